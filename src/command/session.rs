//! Interactive Session
//!
//! Read-eval-print loop over any async line source and sink.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::command::handlers::{execute, Outcome};
use crate::command::parser::{parse, ParseError};
use crate::storage::Storage;
use crate::validator::CommandValidator;

/// One shell session bound to a validator.
pub struct Session<S> {
    validator: CommandValidator<S>,
    prompt: String,
}

impl<S: Storage> Session<S> {
    pub fn new(validator: CommandValidator<S>, prompt: impl Into<String>) -> Self {
        Self {
            validator,
            prompt: prompt.into(),
        }
    }

    pub fn into_validator(self) -> CommandValidator<S> {
        self.validator
    }

    /// Prompts, reads and executes lines until `EXIT` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        info!("Session started");

        loop {
            writer.write_all(self.prompt.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await.context("failed to read command")? else {
                info!("End of input, closing session");
                break;
            };

            let command = match parse(&line) {
                Ok(command) => command,
                Err(ParseError::Empty) => continue,
                Err(e) => {
                    debug!("Rejected line {:?}: {}", line, e);
                    writer.write_all(format!("{e}\n").as_bytes()).await?;
                    continue;
                }
            };

            let outcome = execute(&mut self.validator, command);
            if let Outcome::Exit = outcome {
                info!("Session closed by EXIT");
                break;
            }
            if let Some(text) = outcome.render().context("failed to render reply")? {
                writer.write_all(text.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }

        writer.flush().await?;
        Ok(())
    }
}

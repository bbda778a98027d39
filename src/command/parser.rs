//! Command Parser
//!
//! Turns one input line into a [`Command`]. Tokens are split on whitespace
//! and command words are case-sensitive.

use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Del { key: String },
    Exists { key: String },
    Save { filename: String },
    Load { filename: String },
    Stats,
    Exit,
}

/// Why a line did not produce a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank line; nothing to do
    #[error("empty command")]
    Empty,

    /// Known command with the wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command")]
    Unknown(String),
}

impl Command {
    /// Label printed in front of the command's result.
    ///
    /// Snapshot commands echo their filename as well.
    pub fn label(&self) -> String {
        match self {
            Command::Set { .. } => "SET".to_string(),
            Command::Get { .. } => "GET".to_string(),
            Command::Del { .. } => "DEL".to_string(),
            Command::Exists { .. } => "EXISTS".to_string(),
            Command::Save { filename } => format!("SAVE {filename}"),
            Command::Load { filename } => format!("LOAD {filename}"),
            Command::Stats => "STATS".to_string(),
            Command::Exit => "EXIT".to_string(),
        }
    }
}

/// Parses a single line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&word, args)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    let command = match (word, args) {
        ("SET", [key, value]) => Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        },
        ("SET", _) => return Err(ParseError::Usage("SET key value")),
        ("GET", [key]) => Command::Get {
            key: key.to_string(),
        },
        ("GET", _) => return Err(ParseError::Usage("GET key")),
        ("DEL", [key]) => Command::Del {
            key: key.to_string(),
        },
        ("DEL", _) => return Err(ParseError::Usage("DEL key")),
        ("EXISTS", [key]) => Command::Exists {
            key: key.to_string(),
        },
        ("EXISTS", _) => return Err(ParseError::Usage("EXISTS key")),
        ("SAVE", [filename]) => Command::Save {
            filename: filename.to_string(),
        },
        ("SAVE", _) => return Err(ParseError::Usage("SAVE filename")),
        ("LOAD", [filename]) => Command::Load {
            filename: filename.to_string(),
        },
        ("LOAD", _) => return Err(ParseError::Usage("LOAD filename")),
        ("STATS", []) => Command::Stats,
        ("STATS", _) => return Err(ParseError::Usage("STATS")),
        ("EXIT", []) => Command::Exit,
        ("EXIT", _) => return Err(ParseError::Usage("EXIT")),
        (other, _) => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(command)
}

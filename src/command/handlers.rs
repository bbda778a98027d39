//! Command Handlers
//!
//! Dispatches parsed commands through the validator and renders the results
//! for a human.

use crate::command::parser::Command;
use crate::error::ErrorKind;
use crate::models::{Reply, StatsReport};
use crate::storage::Storage;
use crate::validator::CommandValidator;

/// What the session should do after a command ran.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Print an engine reply under the given label
    Reply { label: String, reply: Reply },
    /// Print a stats report
    Stats(StatsReport),
    /// Close the session
    Exit,
}

impl Outcome {
    /// Text to print for this outcome; `None` for [`Outcome::Exit`].
    pub fn render(&self) -> serde_json::Result<Option<String>> {
        match self {
            Outcome::Reply { label, reply } => Ok(Some(render_reply(label, reply))),
            Outcome::Stats(report) => serde_json::to_string(report).map(Some),
            Outcome::Exit => Ok(None),
        }
    }
}

/// Runs one command against the validator.
pub fn execute<S: Storage>(validator: &mut CommandValidator<S>, command: Command) -> Outcome {
    let label = command.label();
    let reply = match command {
        Command::Set { key, value } => Reply::from(validator.set(key, value)),
        Command::Get { key } => Reply::from(validator.get(&key)),
        Command::Del { key } => Reply::from(validator.del(&key)),
        Command::Exists { key } => Reply::from(validator.exists(&key)),
        Command::Save { filename } => Reply::from(validator.save(&filename)),
        Command::Load { filename } => Reply::from(validator.load(&filename)),
        Command::Stats => return Outcome::Stats(StatsReport::new(validator.stats())),
        Command::Exit => return Outcome::Exit,
    };
    Outcome::Reply { label, reply }
}

/// Formats a reply as `LABEL -> SUCCESS[, value = v]` or
/// `LABEL -> FAILED (reason)`.
pub fn render_reply(label: &str, reply: &Reply) -> String {
    let mut out = format!("{label} -> ");
    if reply.success {
        out.push_str("SUCCESS");
        if let Some(value) = &reply.value {
            out.push_str(", value = ");
            out.push_str(value);
        }
        return out;
    }

    out.push_str("FAILED");
    match reply.error {
        ErrorKind::KeyNotFound => out.push_str(" (key not found)"),
        ErrorKind::InvalidKey => out.push_str(" (invalid key)"),
        ErrorKind::Io => out.push_str(" (io error)"),
        ErrorKind::None => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::command::parser::parse;

    fn run(validator: &mut CommandValidator<CacheStore>, line: &str) -> String {
        let command = parse(line).unwrap();
        execute(validator, command).render().unwrap().unwrap_or_default()
    }

    #[test]
    fn test_render_success_with_value() {
        assert_eq!(
            render_reply("GET", &Reply::with_value("1")),
            "GET -> SUCCESS, value = 1"
        );
        assert_eq!(render_reply("SET", &Reply::ok()), "SET -> SUCCESS");
    }

    #[test]
    fn test_render_failures() {
        assert_eq!(
            render_reply("GET", &Reply::failed(ErrorKind::KeyNotFound)),
            "GET -> FAILED (key not found)"
        );
        assert_eq!(
            render_reply("SET", &Reply::failed(ErrorKind::InvalidKey)),
            "SET -> FAILED (invalid key)"
        );
        assert_eq!(
            render_reply("LOAD x", &Reply::failed(ErrorKind::Io)),
            "LOAD x -> FAILED (io error)"
        );
    }

    #[test]
    fn test_execute_round() {
        let mut validator = CommandValidator::new(CacheStore::new(2));

        assert_eq!(run(&mut validator, "SET a 1"), "SET -> SUCCESS");
        assert_eq!(run(&mut validator, "GET a"), "GET -> SUCCESS, value = 1");
        assert_eq!(run(&mut validator, "EXISTS a"), "EXISTS -> SUCCESS");
        assert_eq!(run(&mut validator, "DEL a"), "DEL -> SUCCESS");
        assert_eq!(run(&mut validator, "GET a"), "GET -> FAILED (key not found)");
    }

    #[test]
    fn test_execute_stats_and_exit() {
        let mut validator = CommandValidator::new(CacheStore::new(2));
        run(&mut validator, "SET a 1");
        run(&mut validator, "GET a");

        let stats = run(&mut validator, "STATS");
        let json: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["total_entries"], 1);

        let outcome = execute(&mut validator, Command::Exit);
        assert!(matches!(outcome, Outcome::Exit));
        assert_eq!(outcome.render().unwrap(), None);
    }
}

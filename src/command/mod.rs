//! Line-Command Driver
//!
//! Text shell in front of the validator.
//!
//! # Commands
//! - `SET key value` - Store a value
//! - `GET key` - Retrieve a value
//! - `DEL key` - Delete a key
//! - `EXISTS key` - Check for a key without refreshing it
//! - `SAVE file` / `LOAD file` - Write or read a snapshot
//! - `STATS` - Print counters as JSON
//! - `EXIT` - End the session

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{execute, render_reply, Outcome};
pub use parser::{parse, Command, ParseError};
pub use session::Session;

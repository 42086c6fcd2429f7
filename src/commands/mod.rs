//! Command parsing and dispatch for the interactive session.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandDispatcher, HELP_TEXT};
pub use parser::{parse, ParsedCommand, Verb};

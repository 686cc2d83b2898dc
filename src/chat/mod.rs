//! Interactive chat mode.
//!
//! Provides a REPL-style interface that keeps the conversation across turns,
//! with slash commands for housekeeping.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;

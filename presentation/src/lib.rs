//! Presentation layer for askdeck
//!
//! Everything the user sees lives here: the CLI argument surface, the
//! terminal and channel display regions, the interactive chat REPL, and
//! the full-screen TUI.

pub mod chat;
pub mod cli;
pub mod display;
pub mod tui;

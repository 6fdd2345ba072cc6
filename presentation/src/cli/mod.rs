//! CLI module

mod commands;

pub use commands::Cli;

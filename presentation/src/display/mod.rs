//! Display region implementations
//!
//! Two ways for an answer to reach the user: [`TerminalDisplay`] writes
//! straight to stdout for the one-shot command and the chat REPL, while
//! [`ChannelDisplay`] forwards every mutation as an event for the TUI to
//! apply to its own state.

mod channel;
mod terminal;

pub use channel::{ChannelDisplay, DisplayEvent};
pub use terminal::TerminalDisplay;

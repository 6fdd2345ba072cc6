//! Messages between the TUI event loop and the panel task

use askdeck_application::SubmitOutcome;

/// Commands sent from the event loop to the panel task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Submit this text as the question field content
    Submit(String),
    /// Shut the panel task down
    Quit,
}

/// Events sent back from the panel task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// A submission finished its exchange; the reveal may still be typing
    SubmitEnded(SubmitOutcome),
    /// The running reveal typed its last character
    RevealFinished,
}

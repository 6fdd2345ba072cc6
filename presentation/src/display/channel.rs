//! Channel-backed display region for the TUI

use tokio::sync::mpsc;

use askdeck_application::DisplayRegion;
use askdeck_domain::Notice;

/// One display mutation, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The region was blanked for a new submission
    Cleared,
    /// Text was appended to the region
    Appended(String),
    /// The region was replaced with a notice
    NoticeSet(Notice),
}

/// Display region that forwards every mutation over a channel
///
/// The TUI cannot let a background task paint the screen directly, so
/// the reveal writes here and the event loop applies the events to its
/// own state between frames. Sends are fire-and-forget: when the UI has
/// already shut down, a still-typing reveal just drops its characters.
pub struct ChannelDisplay {
    tx: mpsc::UnboundedSender<DisplayEvent>,
}

impl ChannelDisplay {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DisplayEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl DisplayRegion for ChannelDisplay {
    fn clear(&self) {
        let _ = self.tx.send(DisplayEvent::Cleared);
    }

    fn append(&self, text: &str) {
        let _ = self.tx.send(DisplayEvent::Appended(text.to_string()));
    }

    fn set_notice(&self, notice: Notice) {
        let _ = self.tx.send(DisplayEvent::NoticeSet(notice));
    }
}

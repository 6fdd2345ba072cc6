//! Terminal display region

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use askdeck_application::DisplayRegion;
use askdeck_domain::Notice;

/// Display region that writes answers to stdout as they are revealed
///
/// A scrolling terminal has no region to blank out, so `clear` prints a
/// separating newline instead once something has been shown. Appends are
/// flushed immediately so each character is visible the moment the
/// reveal emits it.
pub struct TerminalDisplay {
    dirty: AtomicBool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            dirty: AtomicBool::new(false),
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayRegion for TerminalDisplay {
    fn clear(&self) {
        if self.dirty.swap(false, Ordering::SeqCst) {
            println!();
        }
    }

    fn append(&self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn set_notice(&self, notice: Notice) {
        match notice {
            Notice::EmptyQuestion => println!("{}", notice.text().yellow()),
            Notice::RequestFailed => println!("{}", notice.text().red()),
        }
        self.dirty.store(true, Ordering::SeqCst);
    }
}

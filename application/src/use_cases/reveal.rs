//! Reveal task
//!
//! The timed half of the typing effect. [`spawn`] starts a task that
//! appends one character of the answer to the display per tick;
//! [`RevealHandle`] lets the panel cancel it when a new submission
//! supersedes the old one, or wait for it to finish.

use std::sync::Arc;
use std::time::Duration;

use askdeck_domain::{Answer, RevealCursor};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::ports::display::DisplayRegion;

/// Handle to a running reveal
///
/// Dropping the handle detaches the task and the reveal runs to
/// completion on its own. Cancelling stops it between characters and
/// leaves the display at whatever prefix had been typed.
#[derive(Debug)]
pub struct RevealHandle {
    task: JoinHandle<()>,
    token: CancellationToken,
}

impl RevealHandle {
    /// Stop the reveal between characters and wait until the task is gone
    ///
    /// After this returns, no further character will ever reach the
    /// display from this reveal.
    pub async fn cancel(self) {
        self.token.cancel();
        let _ = self.task.await;
    }

    /// Wait for the reveal to finish typing the whole answer
    pub async fn wait(self) {
        let _ = self.task.await;
    }

    /// Wait for the reveal without consuming the handle
    ///
    /// Safe to drop partway and call again; select loops use this so an
    /// interrupted wait still leaves the handle available for cancelling.
    pub async fn join(&mut self) {
        let _ = (&mut self.task).await;
    }

    /// Whether the task has already finished on its own
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the reveal for one answer
///
/// `interval` is the pause between characters; the first character appears
/// one full interval after the spawn, matching the cadence of the ticks
/// that follow. A zero interval shows the whole answer at once.
pub fn spawn(
    display: Arc<dyn DisplayRegion>,
    answer: Answer,
    interval: Duration,
) -> RevealHandle {
    let token = CancellationToken::new();
    let cancelled = token.clone();

    debug!(
        chars = answer.char_count(),
        interval_ms = interval.as_millis() as u64,
        "Starting reveal"
    );

    let task = tokio::spawn(async move {
        if answer.is_empty() {
            return;
        }
        if interval.is_zero() {
            display.append(answer.markup());
            return;
        }

        let mut cursor = RevealCursor::new(&answer);
        let mut ticks = time::interval_at(Instant::now() + interval, interval);
        loop {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(emitted = cursor.emitted(), "Reveal cancelled");
                    return;
                }
                _ = ticks.tick() => {
                    match cursor.next_char() {
                        Some(c) => {
                            let mut buf = [0u8; 4];
                            display.append(c.encode_utf8(&mut buf));
                        }
                        None => {
                            debug!("Reveal complete");
                            return;
                        }
                    }
                }
            }
        }
    });

    RevealHandle { task, token }
}

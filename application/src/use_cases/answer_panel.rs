//! Answer panel use case
//!
//! One submission: read the question field, exchange the question with the
//! answering service and reveal the answer into the display region one
//! character at a time. Validation failures and exchange failures never
//! escape as errors; they end as fixed notices in the display.

use std::sync::Arc;
use std::time::Duration;

use askdeck_domain::{Notice, Question};
use tracing::{debug, info, warn};

use crate::ports::answering_service::AnsweringService;
use crate::ports::display::DisplayRegion;
use crate::ports::question_source::QuestionSource;
use crate::use_cases::reveal::{self, RevealHandle};

/// Pause between revealed characters unless configured otherwise
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(30);

/// How a submission ended
///
/// Every path leaves its result in the display region; the outcome exists
/// so hosts can decide what to do next, not to surface errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The field held only whitespace; the empty-question notice is shown
    EmptyQuestion,
    /// The exchange succeeded and the reveal task is typing the answer
    RevealStarted,
    /// The exchange failed; the failure notice is shown
    RequestFailed,
}

/// The answer panel: question field in, revealed answer out
///
/// The panel owns at most one reveal at a time. Submitting while a reveal
/// is still typing cancels it first, so the display never interleaves two
/// answers.
pub struct AnswerPanel {
    source: Arc<dyn QuestionSource>,
    service: Arc<dyn AnsweringService>,
    display: Arc<dyn DisplayRegion>,
    interval: Duration,
    reveal: Option<RevealHandle>,
}

impl AnswerPanel {
    pub fn new(
        source: Arc<dyn QuestionSource>,
        service: Arc<dyn AnsweringService>,
        display: Arc<dyn DisplayRegion>,
    ) -> Self {
        Self {
            source,
            service,
            display,
            interval: DEFAULT_REVEAL_INTERVAL,
            reveal: None,
        }
    }

    /// Set the pause between revealed characters; zero shows answers at
    /// once
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Submit whatever the question field currently holds
    ///
    /// The display is cleared first on every path. An empty field (after
    /// trimming) short-circuits to the empty-question notice without
    /// touching the service; a failed exchange becomes the failure notice.
    /// On success the reveal task starts and this returns immediately,
    /// while the answer keeps typing in the background.
    pub async fn submit(&mut self) -> SubmitOutcome {
        // A new submission supersedes any reveal still typing
        self.cancel_reveal().await;

        self.display.clear();

        let text = self.source.current_text();
        let Some(question) = Question::try_new(text) else {
            debug!("Submit with empty question field");
            self.display.set_notice(Notice::EmptyQuestion);
            return SubmitOutcome::EmptyQuestion;
        };

        info!(preview = %question.preview(48), "Submitting question");

        match self.service.ask(&question).await {
            Ok(answer) => {
                debug!(chars = answer.char_count(), "Answer received");
                self.reveal = Some(reveal::spawn(
                    self.display.clone(),
                    answer,
                    self.interval,
                ));
                SubmitOutcome::RevealStarted
            }
            Err(err) => {
                warn!(error = %err, "Exchange with answering service failed");
                self.display.set_notice(Notice::RequestFailed);
                SubmitOutcome::RequestFailed
            }
        }
    }

    /// Whether an answer is still being typed out
    pub fn is_revealing(&self) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_finished())
    }

    /// Whether a reveal handle is still held, typing or already done
    pub fn has_pending_reveal(&self) -> bool {
        self.reveal.is_some()
    }

    /// Wait until the current reveal, if any, has typed the whole answer
    ///
    /// Cancellation-safe: dropping this future keeps the handle, so a
    /// later submission can still supersede the running reveal.
    pub async fn wait_for_reveal(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.join().await;
            self.reveal = None;
        }
    }

    /// Stop any running reveal between characters
    pub async fn cancel_reveal(&mut self) {
        if let Some(reveal) = self.reveal.take() {
            reveal.cancel().await;
        }
    }
}

//! Answering service port

use askdeck_domain::{Answer, Question};
use async_trait::async_trait;
use thiserror::Error;

/// Errors an exchange with the answering service can produce
///
/// The display never distinguishes these: every variant collapses into the
/// same failure notice. They stay separate so hosts can log what actually
/// went wrong.
#[derive(Debug, Error)]
pub enum AskError {
    /// The request never produced a response
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The service responded with a non-success status
    #[error("Service returned status {status}")]
    Status { status: u16 },

    /// A response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Port for the service that turns questions into answers
#[async_trait]
pub trait AnsweringService: Send + Sync {
    /// Exchange one question for an answer
    ///
    /// The question text is sent exactly as stored, and the returned body
    /// is passed through verbatim. There is no timeout at this level: the
    /// call resolves when the service does.
    async fn ask(&self, question: &Question) -> Result<Answer, AskError>;
}

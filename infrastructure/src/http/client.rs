//! HTTP answering service client
//!
//! Speaks the one-endpoint protocol of the answering service: POST the
//! question as JSON to `/ask`, take the response body as the answer.

use askdeck_application::ports::answering_service::{AnsweringService, AskError};
use askdeck_domain::{Answer, Question};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Wire shape of one request: a single `question` field carrying the
/// field text exactly as typed
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// [`AnsweringService`] adapter over HTTP
///
/// The client carries no request timeout: the exchange stays pending for
/// as long as the service takes to answer. Any non-2xx status is a
/// failure; the body of a successful response is returned verbatim, no
/// matter what it contains.
pub struct HttpAnsweringService {
    client: reqwest::Client,
    ask_url: String,
}

impl HttpAnsweringService {
    /// Create a client for the service at `base_url`
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let ask_url = format!("{}/ask", base_url.as_ref().trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            ask_url,
        }
    }

    /// The full URL questions are POSTed to
    pub fn ask_url(&self) -> &str {
        &self.ask_url
    }
}

#[async_trait]
impl AnsweringService for HttpAnsweringService {
    async fn ask(&self, question: &Question) -> Result<Answer, AskError> {
        debug!(url = %self.ask_url, "Sending question to answering service");

        let response = self
            .client
            .post(&self.ask_url)
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(|e| AskError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Answering service returned an error status");
            return Err(AskError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AskError::Body(e.to_string()))?;

        debug!(bytes = body.len(), "Answer body received");
        Ok(Answer::new(body))
    }
}

//! Question value object

use serde::{Deserialize, Serialize};

/// A question read from the question field at submit time (Value Object)
///
/// The stored text is exactly what the field held. Surrounding whitespace
/// is kept so the payload sent to the answering service carries the user's
/// input unmodified; only emptiness is judged on the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or whitespace only. Use
    /// [`Question::try_new`] for input that has not been checked yet.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(
            !content.trim().is_empty(),
            "Question content cannot be empty"
        );
        Self { content }
    }

    /// Try to create a question, returning `None` when the trimmed text
    /// is empty
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the raw question text, untrimmed
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the question and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }

    /// A short prefix of the question for log lines, cut on a character
    /// boundary
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let head: String = self.content.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

//! Answer value object

use serde::{Deserialize, Serialize};

/// The body returned by the answering service for one question (Value Object)
///
/// The content is opaque markup: askdeck never parses or rewrites it, it is
/// revealed into the display region verbatim. An empty answer is legal and
/// simply reveals nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    markup: String,
}

impl Answer {
    /// Create an answer from the raw response body
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Get the raw markup
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Whether the answer has no content at all
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    /// Number of characters a full reveal will emit
    pub fn char_count(&self) -> usize {
        self.markup.chars().count()
    }

    /// Consume the answer and return the inner markup
    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.markup)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_creation() {
        let a = Answer::new("<p>Rust is a systems language.</p>");
        assert_eq!(a.markup(), "<p>Rust is a systems language.</p>");
        assert!(!a.is_empty());
    }

    #[test]
    fn test_answer_markup_is_kept_verbatim() {
        let body = "<script>alert('x')</script>\n  raw  ";
        let a = Answer::new(body);
        assert_eq!(a.markup(), body);
        assert_eq!(a.into_markup(), body);
    }

    #[test]
    fn test_empty_answer() {
        let a = Answer::default();
        assert!(a.is_empty());
        assert_eq!(a.char_count(), 0);
    }

    #[test]
    fn test_char_count_is_characters_not_bytes() {
        let a = Answer::new("héllo");
        assert_eq!(a.char_count(), 5);
        assert!(a.markup().len() > 5);
    }
}

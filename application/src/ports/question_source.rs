//! Question source port

use std::sync::{Arc, Mutex};

/// Port for reading the question text at submit time
///
/// Submit takes a snapshot of whatever the field holds at that instant.
/// Edits made after the snapshot do not affect an exchange already in
/// flight.
pub trait QuestionSource: Send + Sync {
    /// The text currently in the field, untrimmed
    fn current_text(&self) -> String;
}

/// A question field backed by shared state
///
/// Hosts that own their input loop write the line here before calling
/// submit. Cloning shares the same underlying field.
#[derive(Debug, Clone, Default)]
pub struct SharedQuestionField {
    text: Arc<Mutex<String>>,
}

impl SharedQuestionField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field content
    pub fn set(&self, text: impl Into<String>) {
        *self.text.lock().unwrap() = text.into();
    }
}

impl QuestionSource for SharedQuestionField {
    fn current_text(&self) -> String {
        self.text.lock().unwrap().clone()
    }
}

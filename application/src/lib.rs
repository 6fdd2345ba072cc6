//! Application layer for askdeck
//!
//! This crate wires the domain objects into the one use case the product
//! has: submit a question, exchange it with the answering service and
//! reveal the answer into a display region. The outer layers provide the
//! concrete service, question source and display through the traits in
//! [`ports`].

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::answering_service::{AnsweringService, AskError};
pub use ports::display::DisplayRegion;
pub use ports::question_source::{QuestionSource, SharedQuestionField};
pub use use_cases::answer_panel::{AnswerPanel, SubmitOutcome};
pub use use_cases::reveal::RevealHandle;

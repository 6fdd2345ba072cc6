//! Domain layer for askdeck
//!
//! This crate contains the value objects and pure logic of the
//! question-answer exchange. It has no I/O and no async: everything
//! time- or transport-shaped lives in the outer layers.
//!
//! # Core Concepts
//!
//! - **Question**: the raw text read from the question field at submit time
//! - **Answer**: the opaque markup the answering service returned
//! - **Notice**: the fixed texts shown in place of an answer
//! - **RevealCursor**: the ordered character walk behind the typing effect

pub mod core;
pub mod reveal;

// Re-export commonly used types
pub use crate::core::answer::Answer;
pub use crate::core::notice::Notice;
pub use crate::core::question::Question;
pub use reveal::RevealCursor;

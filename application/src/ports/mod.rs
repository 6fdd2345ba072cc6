//! Ports - interfaces the outer layers implement
//!
//! The submit use case talks to the world through these traits only:
//! where the question text comes from, who answers it and where the
//! answer is shown.

pub mod answering_service;
pub mod display;
pub mod question_source;

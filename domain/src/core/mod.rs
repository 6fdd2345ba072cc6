//! Core value objects for the question-answer exchange

pub mod answer;
pub mod notice;
pub mod question;

//! Use cases - the submit flow and the reveal task behind it

pub mod answer_panel;
pub mod reveal;

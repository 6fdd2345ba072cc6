//! HTTP adapter for the answering service

pub mod client;

//! Infrastructure layer for askdeck
//!
//! Concrete adapters for the application ports: the HTTP client that
//! speaks to the answering service, and the TOML configuration stack
//! behind it.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::file_config::FileConfig;
pub use config::loader::ConfigLoader;
pub use http::client::HttpAnsweringService;

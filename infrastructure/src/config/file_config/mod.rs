//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default so any subset of the file may be omitted.

mod repl;
mod reveal;
mod service;

pub use repl::FileReplConfig;
pub use reveal::FileRevealConfig;
pub use service::FileServiceConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answering service connection settings
    pub service: FileServiceConfig,
    /// Reveal cadence settings
    pub reveal: FileRevealConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// The pause between revealed characters as a [`Duration`]
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal.interval_ms)
    }

    /// Check the configuration for suspicious values
    ///
    /// Nothing here is fatal. Each returned string names the field and
    /// what looks wrong with it; callers decide how loudly to report.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let url = self.service.base_url.trim();
        if url.is_empty() {
            warnings.push("service.base_url is empty; no request can be sent".to_string());
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            warnings.push(format!(
                "service.base_url '{}' does not look like an HTTP URL",
                self.service.base_url
            ));
        }

        if self.reveal.interval_ms > 1000 {
            warnings.push(format!(
                "reveal.interval_ms = {} will type less than one character per second",
                self.reveal.interval_ms
            ));
        }

        warnings
    }
}

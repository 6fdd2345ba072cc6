//! `[reveal]` section: typing cadence

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRevealConfig {
    /// Milliseconds between revealed characters; 0 shows answers at once
    pub interval_ms: u64,
}

impl Default for FileRevealConfig {
    fn default() -> Self {
        Self { interval_ms: 30 }
    }
}

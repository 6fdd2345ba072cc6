//! `[service]` section: where the answering service lives

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the answering service; `/ask` is appended to it
    pub base_url: String,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

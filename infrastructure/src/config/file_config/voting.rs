//! Voting service configuration from TOML (`[voting]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw voting service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVotingConfig {
    /// Base URL of the voting service
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for FileVotingConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:10003".to_string(),
            timeout_secs: Some(30),
        }
    }
}

impl FileVotingConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

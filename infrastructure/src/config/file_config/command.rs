//! Command configuration from TOML (`[command]` section)

use anipoll_domain::CommandDefaults;
use serde::{Deserialize, Serialize};

/// Raw command configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommandConfig {
    /// Command name shown in usage output
    pub name: String,
    /// Hours until a poll ends when `-ends` is not given
    pub expiry_hours: u32,
    /// Format list used when `-f` is not given
    pub default_formats: String,
}

impl Default for FileCommandConfig {
    fn default() -> Self {
        let defaults = CommandDefaults::default();
        Self {
            name: defaults.name,
            expiry_hours: defaults.expiry_hours,
            default_formats: defaults.formats,
        }
    }
}

impl FileCommandConfig {
    pub fn to_command_defaults(&self) -> CommandDefaults {
        CommandDefaults {
            name: self.name.clone(),
            expiry_hours: self.expiry_hours,
            formats: self.default_formats.clone(),
        }
    }
}

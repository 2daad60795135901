//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! they are used.

mod catalog;
mod command;
mod voting;

pub use catalog::FileCatalogConfig;
pub use command::FileCommandConfig;
pub use voting::FileVotingConfig;

use anipoll_domain::command::criteria::normalize_formats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0}.endpoint cannot be empty")]
    EmptyEndpoint(&'static str),

    #[error("{0}.timeout_secs cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("catalog.max_pages must be at least 1")]
    InvalidMaxPages,

    #[error("catalog.per_page must be between 1 and 50")]
    InvalidPerPage,

    #[error("command.expiry_hours must be at least 1")]
    InvalidExpiry,

    #[error("command.expiry_hours must be at most 8760 (one year)")]
    ExpiryTooLong,

    #[error("command.name cannot be empty")]
    EmptyCommandName,

    #[error("command.default_formats is invalid: {0}")]
    InvalidDefaultFormats(String),
}

/// Longest default poll duration accepted from configuration
const MAX_EXPIRY_HOURS: u32 = 24 * 365;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Anime catalog settings
    pub catalog: FileCatalogConfig,
    /// Voting service settings
    pub voting: FileVotingConfig,
    /// Command defaults
    pub command: FileCommandConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.catalog.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint("catalog"));
        }
        if self.voting.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint("voting"));
        }
        if let Some(0) = self.catalog.timeout_secs {
            return Err(ConfigValidationError::InvalidTimeout("catalog"));
        }
        if let Some(0) = self.voting.timeout_secs {
            return Err(ConfigValidationError::InvalidTimeout("voting"));
        }
        if self.catalog.max_pages == 0 {
            return Err(ConfigValidationError::InvalidMaxPages);
        }
        // AniList caps perPage at 50
        if self.catalog.per_page == 0 || self.catalog.per_page > 50 {
            return Err(ConfigValidationError::InvalidPerPage);
        }
        if self.command.expiry_hours == 0 {
            return Err(ConfigValidationError::InvalidExpiry);
        }
        if self.command.expiry_hours > MAX_EXPIRY_HOURS {
            return Err(ConfigValidationError::ExpiryTooLong);
        }
        if self.command.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCommandName);
        }

        // The default format list goes through the same validation as user input
        normalize_formats(&self.command.default_formats)
            .map_err(|e| ConfigValidationError::InvalidDefaultFormats(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[catalog]
endpoint = "https://catalog.example/graphql"
per_page = 25
max_pages = 4
timeout_secs = 10
min_episodes = 3

[voting]
endpoint = "http://voting:8080"

[command]
name = "seasonpoll"
expiry_hours = 48
default_formats = "TV"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.endpoint, "https://catalog.example/graphql");
        assert_eq!(config.catalog.per_page, 25);
        assert_eq!(config.catalog.to_fetch_params().max_pages, 4);
        assert_eq!(config.catalog.to_fetch_params().min_episodes, 3);
        assert_eq!(config.voting.endpoint, "http://voting:8080");
        assert_eq!(config.voting.timeout_secs, Some(30));
        assert_eq!(config.command.to_command_defaults().name, "seasonpoll");
        assert_eq!(config.command.expiry_hours, 48);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[catalog]\nmax_pages = 2\n").unwrap();
        assert_eq!(config.catalog.max_pages, 2);
        assert_eq!(config.catalog.min_episodes, 5);
        assert_eq!(config.command.default_formats, "TV,ONA");
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.catalog.max_pages = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxPages));

        let mut config = FileConfig::default();
        config.voting.endpoint = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint("voting")));

        let mut config = FileConfig::default();
        config.catalog.per_page = 51;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPerPage));

        let mut config = FileConfig::default();
        config.voting.timeout_secs = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout("voting")));

        let mut config = FileConfig::default();
        config.command.expiry_hours = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidExpiry));
    }

    #[test]
    fn test_expiry_upper_bound() {
        let mut config = FileConfig::default();
        config.command.expiry_hours = MAX_EXPIRY_HOURS;
        assert!(config.validate().is_ok());

        for hours in [MAX_EXPIRY_HOURS + 1, 500_000, u32::MAX] {
            config.command.expiry_hours = hours;
            assert_eq!(config.validate(), Err(ConfigValidationError::ExpiryTooLong));
        }
    }

    #[test]
    fn test_invalid_default_formats() {
        let mut config = FileConfig::default();
        config.command.default_formats = "TV,BLURAY".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDefaultFormats(_))
        ));
    }
}

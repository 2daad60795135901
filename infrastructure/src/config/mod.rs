//! Configuration file loading for anipoll
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANIPOLL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./anipoll.toml` or `./.anipoll.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/anipoll/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileCommandConfig, FileConfig, FileVotingConfig,
};
pub use loader::ConfigLoader;

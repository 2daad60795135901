//! Infrastructure layer for anipoll
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anilist;
pub mod config;
pub mod voting;

// Re-export commonly used types
pub use anilist::{ANILIST_ENDPOINT, AniListCatalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileCommandConfig, FileConfig,
    FileVotingConfig,
};
pub use voting::HttpVotingGateway;

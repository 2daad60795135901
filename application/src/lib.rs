//! Application layer for anipoll
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FetchParams;
pub use ports::{
    catalog_gateway::{CatalogError, CatalogGateway},
    voting_gateway::{BackendError, BackendErrorKind, VotingGateway},
};
pub use use_cases::create_anipoll::{
    AnipollError, AnipollOutcome, CreateAnipollInput, CreateAnipollUseCase,
};
pub use use_cases::fetch_catalog_options::{CatalogFetchError, FetchCatalogOptionsUseCase};

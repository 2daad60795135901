//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_anipoll;
pub mod fetch_catalog_options;

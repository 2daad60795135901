//! Application-level configuration.
//!
//! Parameters that control how use cases behave, independent of where they
//! were loaded from.

pub mod fetch_params;

pub use fetch_params::FetchParams;

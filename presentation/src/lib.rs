//! Presentation layer for anipoll
//!
//! This crate contains the CLI definition and the formatters that turn
//! command outcomes into chat replies or JSON.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use output::reply::{CATALOG_UNAVAILABLE_NOTICE, ReplyFormatter};

//! Command subdomain: from chat text to validated poll criteria.
//!
//! - [`tokenizer`] splits text into shell-style words
//! - [`flags`] holds the declarative flag schema and generic parser
//! - [`criteria`] declares the anipoll flags and validates their values

pub mod criteria;
pub mod error;
pub mod flags;
pub mod tokenizer;

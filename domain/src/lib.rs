//! Domain layer for anipoll
//!
//! This crate contains the command parser, the catalog and poll value
//! objects, and the pure request assembly step. It performs no I/O.
//!
//! # Pipeline
//!
//! ```text
//! RawCommand ─▶ tokenize ─▶ flags ─▶ NormalizedCriteria ─┐
//!                                                        ├─▶ PollCreationRequest
//!               catalog pages ─▶ Vec<PollOption> ─────────┘
//! ```

pub mod catalog;
pub mod command;
pub mod poll;

// Re-export commonly used types
pub use catalog::{
    format::{MediaFormat, UnknownFormat},
    page::{CatalogEntry, CatalogPage, CatalogQuery, CatalogResponse, CatalogResponseError, PageInfo},
    season::{Season, UnknownSeason},
};
pub use command::{
    criteria::{CommandDefaults, NormalizedCriteria, anipoll_schema, parse_command},
    error::{CommandError, ParseError, TokenizeError},
    flags::{FlagKind, FlagSchema, FlagSpec, FlagValue, ParsedArguments},
};
pub use poll::{
    assembler::assemble_poll_request,
    entities::{Poll, PollCreationRequest, PollOption, RawCommand},
};

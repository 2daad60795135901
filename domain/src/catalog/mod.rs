//! Catalog subdomain: the vocabulary shared with the anime catalog.
//!
//! - [`season::Season`] and [`format::MediaFormat`]: the fixed category enums
//! - [`page`]: query criteria, result pages and in-band errors

pub mod format;
pub mod page;
pub mod season;

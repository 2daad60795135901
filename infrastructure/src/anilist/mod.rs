//! AniList catalog adapter
//!
//! Implements [`CatalogGateway`](anipoll_application::CatalogGateway) against
//! the AniList GraphQL API.

mod client;
mod query;
mod wire;

pub use client::{ANILIST_ENDPOINT, AniListCatalog};
pub use query::SEASONAL_MEDIA_QUERY;

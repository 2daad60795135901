//! Catalog Gateway port
//!
//! Defines how the application asks the anime catalog for one page of
//! seasonal results.

use anipoll_domain::{CatalogQuery, CatalogResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failures talking to the catalog.
///
/// Errors the catalog reports inside a well-formed response are not
/// represented here; they arrive in [`CatalogResponse::errors`].
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the paginated anime catalog
///
/// One call is one page. Implementations must not retry and must not follow
/// the cursor themselves; pagination is driven by
/// [`FetchCatalogOptionsUseCase`](crate::use_cases::fetch_catalog_options::FetchCatalogOptionsUseCase).
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch the page selected by `query.page` (first page when `None`)
    async fn query(&self, query: &CatalogQuery) -> Result<CatalogResponse, CatalogError>;
}

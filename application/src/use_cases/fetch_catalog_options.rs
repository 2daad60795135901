//! Fetch Catalog Options use case.
//!
//! Walks the catalog's pages for a seasonal query and folds the surviving
//! entries into poll options.
//!
//! The loop starts with no page cursor, follows `currentPage + 1` while the
//! catalog reports `hasNextPage`, and stops at the first page without one.
//! Any failure aborts the whole fetch: pages already collected are dropped so
//! callers never mistake a truncated list for a complete one.

use crate::config::FetchParams;
use crate::ports::catalog_gateway::{CatalogError, CatalogGateway};
use anipoll_domain::{CatalogQuery, CatalogResponseError, PollOption};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Errors that abort a catalog fetch
#[derive(Error, Debug)]
pub enum CatalogFetchError {
    #[error("Catalog request {request} failed: {source}")]
    Transport {
        request: u32,
        #[source]
        source: CatalogError,
    },

    #[error("Catalog reported errors on request {request}: {}", join_errors(.errors))]
    Remote {
        request: u32,
        errors: Vec<CatalogResponseError>,
    },

    #[error("Catalog response {request} carried no page data")]
    MissingPage { request: u32 },

    #[error("Catalog still had more pages after {max_pages} requests")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Operation cancelled")]
    Cancelled,
}

impl CatalogFetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogFetchError::Cancelled)
    }
}

fn join_errors(errors: &[CatalogResponseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Use case for collecting every matching catalog entry as poll options.
pub struct FetchCatalogOptionsUseCase {
    gateway: Arc<dyn CatalogGateway>,
    params: FetchParams,
}

impl Clone for FetchCatalogOptionsUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            params: self.params,
        }
    }
}

impl FetchCatalogOptionsUseCase {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            params: FetchParams::default(),
        }
    }

    pub fn with_params(mut self, params: FetchParams) -> Self {
        self.params = params;
        self
    }

    /// Fetch all pages for `query` in page order.
    ///
    /// `query.page` is ignored; the first request is always sent without a
    /// cursor.
    pub async fn execute(
        &self,
        query: &CatalogQuery,
        cancellation: &CancellationToken,
    ) -> Result<Vec<PollOption>, CatalogFetchError> {
        let first = CatalogQuery {
            page: None,
            ..query.clone()
        };
        let mut request = first.clone();
        let mut options = Vec::new();

        for attempt in 1..=self.params.max_pages {
            let response = tokio::select! {
                biased;
                _ = cancellation.cancelled() => return Err(CatalogFetchError::Cancelled),
                result = self.gateway.query(&request) => result.map_err(|source| {
                    CatalogFetchError::Transport { request: attempt, source }
                })?,
            };

            if !response.errors.is_empty() {
                return Err(CatalogFetchError::Remote {
                    request: attempt,
                    errors: response.errors,
                });
            }

            let page = response
                .page
                .ok_or(CatalogFetchError::MissingPage { request: attempt })?;
            let next = page.next_page();
            let received = page.entries.len();

            let before = options.len();
            options.extend(
                page.entries
                    .into_iter()
                    .filter(|entry| !entry.is_too_short(self.params.min_episodes))
                    .map(PollOption::from),
            );

            debug!(
                "Catalog page {}: kept {}/{} entries (has_next={})",
                page.page_info.current_page,
                options.len() - before,
                received,
                next.is_some()
            );

            match next {
                Some(page) => request = first.at_page(page),
                None => return Ok(options),
            }
        }

        Err(CatalogFetchError::PageLimitExceeded {
            max_pages: self.params.max_pages,
        })
    }
}

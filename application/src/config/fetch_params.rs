//! Fetch parameters for the catalog pagination loop.

use serde::{Deserialize, Serialize};

/// Catalog pagination loop control parameters.
///
/// Used by [`FetchCatalogOptionsUseCase`](crate::use_cases::fetch_catalog_options::FetchCatalogOptionsUseCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParams {
    /// Hard ceiling on page requests per invocation.
    pub max_pages: u32,
    /// Entries with a known, nonzero episode count below this are dropped.
    pub min_episodes: u32,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            max_pages: 25,
            min_episodes: 5,
        }
    }
}

impl FetchParams {
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = max;
        self
    }

    pub fn with_min_episodes(mut self, min: u32) -> Self {
        self.min_episodes = min;
        self
    }
}

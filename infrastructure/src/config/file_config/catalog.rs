//! Catalog configuration from TOML (`[catalog]` section)

use crate::anilist::ANILIST_ENDPOINT;
use anipoll_application::FetchParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// GraphQL endpoint
    pub endpoint: String,
    /// Entries requested per page
    pub per_page: u32,
    /// Hard ceiling on page requests per command
    pub max_pages: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Entries with fewer (known, nonzero) episodes are left out
    pub min_episodes: u32,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        let fetch = FetchParams::default();
        Self {
            endpoint: ANILIST_ENDPOINT.to_string(),
            per_page: 50,
            max_pages: fetch.max_pages,
            timeout_secs: Some(30),
            min_episodes: fetch.min_episodes,
        }
    }
}

impl FileCatalogConfig {
    pub fn to_fetch_params(&self) -> FetchParams {
        FetchParams::default()
            .with_max_pages(self.max_pages)
            .with_min_episodes(self.min_episodes)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

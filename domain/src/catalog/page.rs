//! Catalog query and page value objects
//!
//! These types describe one round-trip with the paginated anime catalog,
//! independent of the wire format the adapter speaks.

use super::{format::MediaFormat, season::Season};
use serde::{Deserialize, Serialize};

/// Criteria for a seasonal catalog query plus the page cursor.
///
/// `page` is `None` for the first request; the catalog then starts at its
/// first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub season: Option<Season>,
    pub season_year: String,
    pub formats: Vec<MediaFormat>,
    pub page: Option<u32>,
}

impl CatalogQuery {
    pub fn new(season: Option<Season>, season_year: impl Into<String>, formats: Vec<MediaFormat>) -> Self {
        Self {
            season,
            season_year: season_year.into(),
            formats,
            page: None,
        }
    }

    /// Same criteria, positioned at `page`
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Query variables in the catalog's naming.
    ///
    /// `season` is omitted when unset so the catalog matches every season of
    /// the year; `page` is omitted for the first request.
    pub fn variables(&self) -> serde_json::Value {
        let mut vars = serde_json::Map::new();
        if let Some(season) = self.season {
            vars.insert("season".into(), season.as_str().into());
        }
        vars.insert(
            "seasonYear".into(),
            match self.season_year.parse::<i64>() {
                Ok(year) => year.into(),
                Err(_) => self.season_year.clone().into(),
            },
        );
        vars.insert(
            "formats".into(),
            self.formats
                .iter()
                .map(|f| serde_json::Value::from(f.as_str()))
                .collect::<Vec<_>>()
                .into(),
        );
        if let Some(page) = self.page {
            vars.insert("page".into(), page.into());
        }
        serde_json::Value::Object(vars)
    }
}

/// One catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title (romaji)
    pub title: String,
    /// Reference page for the item
    pub url: Option<String>,
    /// Episode count, `None` when the catalog does not know it yet
    pub episodes: Option<u32>,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, url: Option<String>, episodes: Option<u32>) -> Self {
        Self {
            title: title.into(),
            url,
            episodes,
        }
    }

    /// True when the item has a known, nonzero episode count below `min_episodes`.
    ///
    /// Unknown and zero counts are never considered too short: airing shows
    /// often have no count yet.
    pub fn is_too_short(&self, min_episodes: u32) -> bool {
        matches!(self.episodes, Some(n) if n > 0 && n < min_episodes)
    }
}

/// Pagination cursor returned with every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub has_next_page: bool,
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub entries: Vec<CatalogEntry>,
    pub page_info: PageInfo,
}

impl CatalogPage {
    /// Cursor for the following page, if the catalog signalled one
    pub fn next_page(&self) -> Option<u32> {
        self.page_info
            .has_next_page
            .then(|| self.page_info.current_page.saturating_add(1))
    }
}

/// Error reported in-band by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponseError {
    pub message: String,
    pub status: Option<u16>,
}

impl std::fmt::Display for CatalogResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A decoded catalog response: in-band errors and, when present, the page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub errors: Vec<CatalogResponseError>,
    pub page: Option<CatalogPage>,
}

impl CatalogResponse {
    pub fn page(page: CatalogPage) -> Self {
        Self {
            errors: Vec::new(),
            page: Some(page),
        }
    }

    pub fn errors(errors: Vec<CatalogResponseError>) -> Self {
        Self { errors, page: None }
    }
}

//! AniList GraphQL wire types and their mapping to domain values

use anipoll_domain::{CatalogEntry, CatalogPage, CatalogResponse, CatalogResponseError, PageInfo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
    #[serde(default)]
    pub data: Option<GraphQlData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlData {
    #[serde(default)]
    pub page: Option<MediaPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MediaPage {
    #[serde(default)]
    pub page_info: Option<WirePageInfo>,
    #[serde(default)]
    pub media: Vec<Option<Media>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePageInfo {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Media {
    #[serde(default)]
    pub title: Option<MediaTitle>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MediaTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
}

impl Media {
    fn display_title(&self) -> String {
        self.title
            .as_ref()
            .and_then(|t| t.romaji.clone().or_else(|| t.english.clone()))
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

impl From<Media> for CatalogEntry {
    fn from(media: Media) -> Self {
        let title = media.display_title();
        CatalogEntry::new(title, media.site_url, media.episodes)
    }
}

impl From<MediaPage> for CatalogPage {
    fn from(page: MediaPage) -> Self {
        let info = page.page_info.unwrap_or_default();
        CatalogPage {
            entries: page.media.into_iter().flatten().map(CatalogEntry::from).collect(),
            page_info: PageInfo {
                current_page: info.current_page.unwrap_or(1),
                has_next_page: info.has_next_page.unwrap_or(false),
            },
        }
    }
}

impl From<GraphQlResponse> for CatalogResponse {
    fn from(response: GraphQlResponse) -> Self {
        CatalogResponse {
            errors: response
                .errors
                .into_iter()
                .map(|e| CatalogResponseError {
                    message: e.message,
                    status: e.status,
                })
                .collect(),
            page: response.data.and_then(|d| d.page).map(CatalogPage::from),
        }
    }
}

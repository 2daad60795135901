//! Poll entities and value objects

use crate::catalog::page::CatalogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The chat message that triggered the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommand {
    /// Full message text, command name included
    pub content: String,
    pub author_id: String,
    pub server_id: String,
}

impl RawCommand {
    pub fn new(
        content: impl Into<String>,
        author_id: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author_id: author_id.into(),
            server_id: server_id.into(),
        }
    }
}

/// One votable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub content: String,
    pub url: Option<String>,
}

impl PollOption {
    /// Option typed by the user, without a link
    pub fn literal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            url: None,
        }
    }
}

impl From<CatalogEntry> for PollOption {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            content: entry.title,
            url: entry.url,
        }
    }
}

/// Request sent to the voting backend. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollCreationRequest {
    pub title: String,
    /// Maximum number of distinct options one voter may pick
    pub vote_cap: u32,
    pub server_id: String,
    pub creator_id: String,
    /// `None` for a poll that never closes
    pub expires_at: Option<DateTime<Utc>>,
    pub options: Vec<PollOption>,
}

/// A poll as recorded by the voting backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub short_id: String,
    pub title: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub creator_id: String,
}

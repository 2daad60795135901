//! Media format value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a format code is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown media format: {0}")]
pub struct UnknownFormat(pub String);

/// Catalog media format (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 10] = [
        MediaFormat::Tv,
        MediaFormat::TvShort,
        MediaFormat::Movie,
        MediaFormat::Special,
        MediaFormat::Ova,
        MediaFormat::Ona,
        MediaFormat::Music,
        MediaFormat::Manga,
        MediaFormat::Novel,
        MediaFormat::OneShot,
    ];

    /// Format list used when the command does not name one
    pub const DEFAULT_LIST: &'static str = "TV,ONA";

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Tv => "TV",
            MediaFormat::TvShort => "TV_SHORT",
            MediaFormat::Movie => "MOVIE",
            MediaFormat::Special => "SPECIAL",
            MediaFormat::Ova => "OVA",
            MediaFormat::Ona => "ONA",
            MediaFormat::Music => "MUSIC",
            MediaFormat::Manga => "MANGA",
            MediaFormat::Novel => "NOVEL",
            MediaFormat::OneShot => "ONE_SHOT",
        }
    }

    /// Comma-separated list of valid codes, for error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == upper)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

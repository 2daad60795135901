//! Season value object for seasonal catalog queries

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a season name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown season: {0}")]
pub struct UnknownSeason(pub String);

/// Anime broadcast season (Value Object)
///
/// The canonical form is upper-case, which is also what the catalog expects
/// for its `season` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Every season, in the order shown to users
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Canonical upper-case name (e.g. `"SPRING"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }

    /// Title-cased name used when building poll titles (e.g. `"Spring"`)
    pub fn title_case(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }

    /// Season for a calendar month (1-12).
    ///
    /// Jan-Mar is winter, Apr-Jun spring, Jul-Sep summer, Oct-Dec fall.
    pub fn for_month(month: u32) -> Self {
        match month {
            1..=3 => Season::Winter,
            4..=6 => Season::Spring,
            7..=9 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// Season containing the given instant (UTC calendar)
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::for_month(instant.month())
    }

    /// Comma-separated list of valid names, for error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = UnknownSeason;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WINTER" => Ok(Season::Winter),
            "SPRING" => Ok(Season::Spring),
            "SUMMER" => Ok(Season::Summer),
            "FALL" => Ok(Season::Fall),
            _ => Err(UnknownSeason(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("SuMmEr".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "autumn".parse::<Season>().unwrap_err();
        assert_eq!(err, UnknownSeason("autumn".to_string()));
    }

    #[test]
    fn test_for_month_boundaries() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Winter);
        assert_eq!(Season::for_month(4), Season::Spring);
        assert_eq!(Season::for_month(6), Season::Spring);
        assert_eq!(Season::for_month(7), Season::Summer);
        assert_eq!(Season::for_month(9), Season::Summer);
        assert_eq!(Season::for_month(10), Season::Fall);
        assert_eq!(Season::for_month(12), Season::Fall);
    }

    #[test]
    fn test_containing_uses_utc_month() {
        let instant = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        assert_eq!(Season::containing(instant), Season::Fall);
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&Season::Spring).unwrap();
        assert_eq!(json, "\"SPRING\"");
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(Season::valid_names(), "SPRING, SUMMER, FALL, WINTER");
    }
}

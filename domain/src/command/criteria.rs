//! The anipoll command: flag declaration and validation.
//!
//! [`parse_command`] runs the whole text-to-criteria pipeline:
//!
//! 1. tokenize and drop the command name
//! 2. parse flags against [`anipoll_schema`]
//! 3. normalize season, end time, formats and year
//! 4. build the display title
//!
//! Every default that depends on the clock is computed from the
//! `evaluated_at` argument, so the same text and instant always produce the
//! same [`NormalizedCriteria`].

use super::error::{CommandError, ParseError};
use super::flags::{FlagSchema, FlagSpec, FlagValue};
use super::tokenizer::command_arguments;
use crate::catalog::{format::MediaFormat, page::CatalogQuery, season::Season};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Layout used to render default end times (`M/d/yy H:mm`)
pub const END_TIME_DISPLAY_LAYOUT: &str = "%-m/%-d/%y %-H:%M";

const END_TIME_LAYOUT: &str = "%m/%d/%y %H:%M";
const END_DATE_LAYOUT: &str = "%m/%d/%y";

/// Flag keys
pub mod keys {
    pub const TITLE: &str = "title";
    pub const VOTE_CAP: &str = "vote_cap";
    pub const SEASON: &str = "season";
    pub const YEAR: &str = "year";
    pub const FORMATS: &str = "formats";
    pub const END_TIME: &str = "end_time";
}

/// Deployment-level defaults for the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefaults {
    /// Name shown in usage output
    pub name: String,
    /// Hours from evaluation time until the default end time
    pub expiry_hours: u32,
    /// Comma-delimited format list used when `-f` is absent
    pub formats: String,
}

impl Default for CommandDefaults {
    fn default() -> Self {
        Self {
            name: "anipoll".to_string(),
            expiry_hours: 120,
            formats: MediaFormat::DEFAULT_LIST.to_string(),
        }
    }
}

/// Validated poll criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCriteria {
    /// `None` when the user passed an empty season (all seasons of the year)
    pub season: Option<Season>,
    /// Four-digit year
    pub year: String,
    /// Ordered, duplicate-free
    pub formats: Vec<MediaFormat>,
    /// `None` means the poll never expires
    pub end_time: Option<DateTime<Utc>>,
    pub title: String,
    /// Zero means "one vote per option"
    pub vote_cap: u32,
    pub literal_options: Vec<String>,
}

impl NormalizedCriteria {
    /// Catalog query for the first page
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.season, self.year.clone(), self.formats.clone())
    }
}

/// Flag declaration for the anipoll command, with clock-derived defaults.
///
/// Fails when the default end time falls outside the representable range.
pub fn anipoll_schema(
    evaluated_at: DateTime<Utc>,
    defaults: &CommandDefaults,
) -> Result<FlagSchema, ParseError> {
    let default_season = Season::containing(evaluated_at).title_case().to_lowercase();
    let default_end = evaluated_at
        .checked_add_signed(Duration::hours(i64::from(defaults.expiry_hours)))
        .ok_or_else(|| {
            ParseError::new(format!(
                "The default poll duration of {} hours is too long.",
                defaults.expiry_hours
            ))
        })?
        .format(END_TIME_DISPLAY_LAYOUT)
        .to_string();

    Ok(FlagSchema::new(defaults.name.clone())
        .flag(FlagSpec::new(
            keys::TITLE,
            &["t", "title"],
            FlagValue::Text(String::new()),
            "The poll title",
        ))
        .flag(FlagSpec::new(
            keys::VOTE_CAP,
            &["n", "votes"],
            FlagValue::Unsigned(0),
            "The number of unique votes a user can submit. (defaults to the number of anime + additional options)",
        ))
        .flag(FlagSpec::new(
            keys::SEASON,
            &["s", "season"],
            FlagValue::Text(default_season),
            "The anime season (spring, summer, fall or winter)",
        ))
        .flag(FlagSpec::new(
            keys::YEAR,
            &["y", "year"],
            FlagValue::Text(evaluated_at.year().to_string()),
            "The anime year",
        ))
        .flag(FlagSpec::new(
            keys::FORMATS,
            &["f", "formats"],
            FlagValue::Text(defaults.formats.clone()),
            "Comma separated anime formats",
        ))
        .flag(FlagSpec::new(
            keys::END_TIME,
            &["ends"],
            FlagValue::Text(default_end),
            "The poll end time in UTC (M/d/yy H:mm), empty for no end",
        ))
        .trailing("[options]...", "Additional poll options"))
}

/// Parse and validate an anipoll command
pub fn parse_command(
    content: &str,
    evaluated_at: DateTime<Utc>,
    defaults: &CommandDefaults,
) -> Result<NormalizedCriteria, CommandError> {
    let args = command_arguments(content)?;
    let parsed = anipoll_schema(evaluated_at, defaults)?.parse(&args)?;

    let season = normalize_season(parsed.text(keys::SEASON))?;
    let end_time = normalize_end_time(parsed.text(keys::END_TIME), evaluated_at)?;
    let formats = normalize_formats(parsed.text(keys::FORMATS))?;
    let year = normalize_year(parsed.text(keys::YEAR))?;
    let title = build_title(parsed.text(keys::TITLE), season, &year);
    let vote_cap = parsed.unsigned(keys::VOTE_CAP);

    Ok(NormalizedCriteria {
        season,
        year,
        formats,
        end_time,
        title,
        vote_cap,
        literal_options: parsed.into_positional(),
    })
}

/// Empty means "any season"
pub fn normalize_season(raw: &str) -> Result<Option<Season>, ParseError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse::<Season>().map(Some).map_err(|_| {
        ParseError::new(format!(
            "That season is not valid. Valid seasons are: {}",
            Season::valid_names()
        ))
    })
}

/// Empty means "no expiration"; otherwise the instant must be after `evaluated_at`
pub fn normalize_end_time(
    raw: &str,
    evaluated_at: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let end = NaiveDateTime::parse_from_str(raw, END_TIME_LAYOUT)
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, END_DATE_LAYOUT).map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| {
            ParseError::new(format!(
                "The end time \"{}\" is not valid. Use the format M/d/yy H:mm (UTC), for example 1/31/25 18:30.",
                raw
            ))
        })?
        .and_utc();

    if end <= evaluated_at {
        return Err(ParseError::new(format!(
            "The end time must be in the future. {} has already passed.",
            end.format(END_TIME_DISPLAY_LAYOUT)
        )));
    }

    Ok(Some(end))
}

/// Comma-delimited list to an ordered set of formats
pub fn normalize_formats(raw: &str) -> Result<Vec<MediaFormat>, ParseError> {
    let mut formats = Vec::new();
    for code in raw.split(',') {
        let format = code.parse::<MediaFormat>().map_err(|_| {
            ParseError::new(format!(
                "The format \"{}\" is not valid. Valid formats are: {}",
                code.trim(),
                MediaFormat::valid_names()
            ))
        })?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(formats)
}

pub fn normalize_year(raw: &str) -> Result<String, ParseError> {
    let year = raw.trim();
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(year.to_string())
    } else {
        Err(ParseError::new(format!(
            "The year \"{}\" is not valid. Use a four digit year such as 2024.",
            year
        )))
    }
}

/// Explicit title verbatim, else `"<Season> <Year>"`
pub fn build_title(title: &str, season: Option<Season>, year: &str) -> String {
    if !title.is_empty() {
        return title.to_string();
    }
    match season {
        Some(season) => format!("{} {}", season.title_case(), year),
        None => year.to_string(),
    }
}

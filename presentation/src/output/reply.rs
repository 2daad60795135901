//! Chat reply formatter
//!
//! Produces the text the bot posts back into the channel.

use crate::output::formatter::OutputFormatter;
use anipoll_application::AnipollOutcome;
use anipoll_domain::{Poll, PollCreationRequest};
use chrono::{DateTime, Utc};

/// Posted when the catalog could not be read
pub const CATALOG_UNAVAILABLE_NOTICE: &str =
    "the AniList API is unavailable at the moment :anguished:";

/// Formats outcomes as chat reply text
pub struct ReplyFormatter;

impl ReplyFormatter {
    /// Announcement for a freshly created poll
    pub fn new_poll(poll: &Poll) -> String {
        let mut output = format!(
            ":ballot_box: **A new anime poll has started** `{}`\n",
            poll.short_id
        );

        if !poll.title.is_empty() {
            output.push_str(&format!("\n**{}**\n", poll.title));
        }

        if let Some(expires_at) = poll.expires_at {
            output.push_str(&format!("\nPoll ends `{}`\n", Self::timestamp(&expires_at)));
        }

        output.push_str(&format!(
            "\nView the poll with `!poll` or `!poll -id {}`",
            poll.short_id
        ));

        output
    }

    fn timestamp(at: &DateTime<Utc>) -> String {
        at.format("%b %-d, %Y %H:%M:%S UTC").to_string()
    }
}

impl OutputFormatter for ReplyFormatter {
    fn format_outcome(&self, outcome: &AnipollOutcome) -> String {
        match outcome {
            AnipollOutcome::Created { poll } => Self::new_poll(poll),
            AnipollOutcome::Rejected { message } => message.clone(),
            AnipollOutcome::CatalogUnavailable => CATALOG_UNAVAILABLE_NOTICE.to_string(),
        }
    }

    fn format_request(&self, request: &PollCreationRequest) -> String {
        let mut output = format!("**{}**\n", request.title);
        output.push_str(&format!("Votes per member: {}\n", request.vote_cap));
        match request.expires_at {
            Some(at) => output.push_str(&format!("Ends: {}\n", Self::timestamp(&at))),
            None => output.push_str("Ends: never\n"),
        }
        output.push_str(&format!("Options ({}):\n", request.options.len()));
        for (i, option) in request.options.iter().enumerate() {
            match &option.url {
                Some(url) => output.push_str(&format!("  {}. {} <{}>\n", i + 1, option.content, url)),
                None => output.push_str(&format!("  {}. {}\n", i + 1, option.content)),
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anipoll_domain::PollOption;
    use chrono::TimeZone;

    fn poll(title: &str, expires_at: Option<DateTime<Utc>>) -> Poll {
        Poll {
            short_id: "f3k9".to_string(),
            title: title.to_string(),
            expires_at,
            creator_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_new_poll_full() {
        let expires = Utc.with_ymd_and_hms(2024, 10, 24, 14, 30, 0).unwrap();
        let text = ReplyFormatter::new_poll(&poll("Fall 2024", Some(expires)));
        assert_eq!(
            text,
            ":ballot_box: **A new anime poll has started** `f3k9`\n\
             \n**Fall 2024**\n\
             \nPoll ends `Oct 24, 2024 14:30:00 UTC`\n\
             \nView the poll with `!poll` or `!poll -id f3k9`"
        );
    }

    #[test]
    fn test_new_poll_without_title_or_expiry() {
        let text = ReplyFormatter::new_poll(&poll("", None));
        assert_eq!(
            text,
            ":ballot_box: **A new anime poll has started** `f3k9`\n\
             \nView the poll with `!poll` or `!poll -id f3k9`"
        );
    }

    #[test]
    fn test_single_digit_day() {
        let expires = Utc.with_ymd_and_hms(2025, 1, 5, 9, 5, 7).unwrap();
        let text = ReplyFormatter::new_poll(&poll("", Some(expires)));
        assert!(text.contains("`Jan 5, 2025 09:05:07 UTC`"));
    }

    #[test]
    fn test_rejected_is_verbatim() {
        let outcome = AnipollOutcome::Rejected {
            message: "flag provided but not defined: -x".to_string(),
        };
        assert_eq!(
            ReplyFormatter.format_outcome(&outcome),
            "flag provided but not defined: -x"
        );
    }

    #[test]
    fn test_catalog_unavailable() {
        assert_eq!(
            ReplyFormatter.format_outcome(&AnipollOutcome::CatalogUnavailable),
            CATALOG_UNAVAILABLE_NOTICE
        );
    }

    #[test]
    fn test_format_request_lists_options() {
        let request = PollCreationRequest {
            title: "Spring 2024".to_string(),
            vote_cap: 2,
            server_id: String::new(),
            creator_id: "cli".to_string(),
            expires_at: None,
            options: vec![
                PollOption {
                    content: "Show A".to_string(),
                    url: Some("https://anilist.co/anime/1".to_string()),
                },
                PollOption::literal("Other"),
            ],
        };
        let text = ReplyFormatter.format_request(&request);
        assert!(text.starts_with("**Spring 2024**\n"));
        assert!(text.contains("Votes per member: 2\n"));
        assert!(text.contains("Ends: never\n"));
        assert!(text.contains("  1. Show A <https://anilist.co/anime/1>\n"));
        assert!(text.contains("  2. Other\n"));
    }
}

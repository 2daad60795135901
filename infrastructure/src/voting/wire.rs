//! Voting service JSON wire types
//!
//! Field names follow the service's protobuf JSON mapping (camelCase, 64-bit
//! integers possibly encoded as strings).

use anipoll_domain::{Poll, PollCreationRequest};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePollBody<'a> {
    pub title: &'a str,
    pub allowed_unique_votes: u32,
    pub server_id: &'a str,
    pub creator_id: &'a str,
    /// Unix seconds, 0 for no expiry
    pub expires: i64,
    pub options: Vec<OptionBody<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptionBody<'a> {
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
}

impl<'a> From<&'a PollCreationRequest> for CreatePollBody<'a> {
    fn from(request: &'a PollCreationRequest) -> Self {
        Self {
            title: &request.title,
            allowed_unique_votes: request.vote_cap,
            server_id: &request.server_id,
            creator_id: &request.creator_id,
            expires: request.expires_at.map(|t| t.timestamp()).unwrap_or(0),
            options: request
                .options
                .iter()
                .map(|o| OptionBody {
                    content: &o.content,
                    url: o.url.as_deref(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Int64 {
    Number(i64),
    Text(String),
}

impl Int64 {
    fn value(&self) -> i64 {
        match self {
            Int64::Number(n) => *n,
            Int64::Text(s) => s.parse().unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePollReply {
    pub poll: PollBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PollBody {
    pub short_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub expires: Option<Int64>,
    #[serde(default)]
    pub creator_id: String,
}

impl From<PollBody> for Poll {
    fn from(body: PollBody) -> Self {
        let expires_at = body
            .expires
            .map(|e| e.value())
            .filter(|secs| *secs > 0)
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        Poll {
            short_id: body.short_id,
            title: body.title,
            expires_at,
            creator_id: body.creator_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anipoll_domain::PollOption;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_request_body_shape() {
        let request = PollCreationRequest {
            title: "Fall 2024".to_string(),
            vote_cap: 2,
            server_id: "s".to_string(),
            creator_id: "c".to_string(),
            expires_at: Some(Utc.with_ymd_and_hms(2024, 10, 24, 14, 30, 0).unwrap()),
            options: vec![
                PollOption {
                    content: "Show".to_string(),
                    url: Some("https://anilist.co/anime/1".to_string()),
                },
                PollOption::literal("extra"),
            ],
        };
        let json = serde_json::to_value(CreatePollBody::from(&request)).unwrap();

        assert_eq!(json["allowedUniqueVotes"], 2);
        assert_eq!(json["serverId"], "s");
        assert_eq!(json["creatorId"], "c");
        assert_eq!(json["expires"], 1729780200);
        assert_eq!(json["options"][0]["url"], "https://anilist.co/anime/1");
        assert!(json["options"][1].get("url").is_none());
    }

    #[test]
    fn test_no_expiry_is_zero() {
        let request = PollCreationRequest {
            title: String::new(),
            vote_cap: 0,
            server_id: String::new(),
            creator_id: String::new(),
            expires_at: None,
            options: vec![],
        };
        let json = serde_json::to_value(CreatePollBody::from(&request)).unwrap();
        assert_eq!(json["expires"], 0);
    }

    #[test]
    fn test_poll_reply_accepts_string_int64() {
        let body = r#"{"poll":{"shortId":"xyz","title":"T","expires":"1729780200","creatorId":"c"}}"#;
        let reply: CreatePollReply = serde_json::from_str(body).unwrap();
        let poll = Poll::from(reply.poll);
        assert_eq!(poll.short_id, "xyz");
        assert_eq!(
            poll.expires_at,
            Some(Utc.with_ymd_and_hms(2024, 10, 24, 14, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_poll_reply_zero_expiry() {
        let body = r#"{"poll":{"shortId":"xyz","expires":0}}"#;
        let reply: CreatePollReply = serde_json::from_str(body).unwrap();
        assert_eq!(Poll::from(reply.poll).expires_at, None);
    }
}

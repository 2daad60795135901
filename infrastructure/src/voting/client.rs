//! HTTP adapter for the voting service.
//!
//! `POST {endpoint}/polls` with a JSON [`CreatePollBody`]. Failures come
//! back as a non-2xx status with `{"code": ..., "message": ...}`; when the
//! body carries no code the HTTP status decides the kind.

use super::wire::{CreatePollBody, CreatePollReply, ErrorBody};
use anipoll_application::ports::voting_gateway::{BackendError, BackendErrorKind, VotingGateway};
use anipoll_domain::{Poll, PollCreationRequest};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// [`VotingGateway`] speaking JSON over HTTP
pub struct HttpVotingGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVotingGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            BackendError::new(
                BackendErrorKind::Internal,
                format!("Failed to build HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn polls_url(&self) -> String {
        format!("{}/polls", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl VotingGateway for HttpVotingGateway {
    async fn create_poll(&self, request: &PollCreationRequest) -> Result<Poll, BackendError> {
        let url = self.polls_url();
        debug!("Creating poll at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&CreatePollBody::from(request))
            .send()
            .await
            .map_err(|e| {
                BackendError::new(
                    BackendErrorKind::Unavailable,
                    format!("Failed to reach voting service: {}", e),
                )
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            BackendError::new(
                BackendErrorKind::Unavailable,
                format!("Failed to read voting service response: {}", e),
            )
        })?;

        decode_create_poll(status, &body)
    }
}

fn kind_for_status(status: u16) -> BackendErrorKind {
    match status {
        400 | 422 => BackendErrorKind::InvalidArgument,
        404 => BackendErrorKind::NotFound,
        502..=504 => BackendErrorKind::Unavailable,
        500..=599 => BackendErrorKind::Internal,
        _ => BackendErrorKind::Unknown,
    }
}

pub(crate) fn decode_create_poll(status: u16, body: &str) -> Result<Poll, BackendError> {
    if (200..300).contains(&status) {
        let reply: CreatePollReply = serde_json::from_str(body).map_err(|e| {
            BackendError::new(
                BackendErrorKind::Internal,
                format!("Failed to parse voting service response: {}", e),
            )
        })?;
        return Ok(reply.poll.into());
    }

    let error: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let kind = match error.code.as_deref() {
        Some(code) if !code.is_empty() => BackendErrorKind::from_code(code),
        _ => kind_for_status(status),
    };
    let message = error
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status));

    Err(BackendError::new(kind, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polls_url() {
        let gateway = HttpVotingGateway::new("http://localhost:10003/", None).unwrap();
        assert_eq!(gateway.polls_url(), "http://localhost:10003/polls");
    }

    #[test]
    fn test_success() {
        let poll = decode_create_poll(200, r#"{"poll":{"shortId":"a1","title":"Fall 2024"}}"#).unwrap();
        assert_eq!(poll.short_id, "a1");
        assert_eq!(poll.title, "Fall 2024");
    }

    #[test]
    fn test_error_code_wins_over_status() {
        let err = decode_create_poll(
            500,
            r#"{"code":"invalid_argument","message":"title is too long"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::InvalidArgument);
        assert_eq!(err.message, "title is too long");
    }

    #[test]
    fn test_status_fallback() {
        let err = decode_create_poll(404, "").unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::NotFound);
        assert_eq!(err.message, "HTTP 404");

        let err = decode_create_poll(503, "down").unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Unavailable);

        let err = decode_create_poll(500, "{}").unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Internal);
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_create_poll(200, "oops").unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Internal);
    }
}

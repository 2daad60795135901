//! Voting Gateway port
//!
//! Defines the interface to the backend that stores polls.

use anipoll_domain::{Poll, PollCreationRequest};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable class of a backend failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendErrorKind {
    InvalidArgument,
    NotFound,
    Unavailable,
    Internal,
    Unknown,
}

impl BackendErrorKind {
    /// Map a wire code such as `"invalid_argument"` or `"NotFound"`
    pub fn from_code(code: &str) -> Self {
        match code
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase()
            .as_str()
        {
            "invalidargument" => BackendErrorKind::InvalidArgument,
            "notfound" => BackendErrorKind::NotFound,
            "unavailable" => BackendErrorKind::Unavailable,
            "internal" => BackendErrorKind::Internal,
            _ => BackendErrorKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendErrorKind::InvalidArgument => "invalid_argument",
            BackendErrorKind::NotFound => "not_found",
            BackendErrorKind::Unavailable => "unavailable",
            BackendErrorKind::Internal => "internal",
            BackendErrorKind::Unknown => "unknown",
        }
    }

    /// Kinds whose message is written for the end user
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            BackendErrorKind::InvalidArgument | BackendErrorKind::NotFound
        )
    }
}

impl std::fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error from the voting backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_user_facing(&self) -> bool {
        self.kind.is_user_facing()
    }
}

/// Gateway to the voting backend
#[async_trait]
pub trait VotingGateway: Send + Sync {
    /// Create a poll; the only call in the pipeline with side effects
    async fn create_poll(&self, request: &PollCreationRequest) -> Result<Poll, BackendError>;
}

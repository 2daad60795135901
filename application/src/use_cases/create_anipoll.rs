//! Create Anipoll use case.
//!
//! The full command pipeline: parse the chat text, fetch the season's titles
//! from the catalog, assemble the poll request and submit it.
//!
//! [`CreateAnipollUseCase::create_poll`] returns every failure as an
//! [`AnipollError`]. [`CreateAnipollUseCase::execute`] additionally sorts
//! those failures into what the user should see ([`AnipollOutcome`]) and what
//! the caller must handle (the remaining `Err`).

use crate::config::FetchParams;
use crate::ports::catalog_gateway::CatalogGateway;
use crate::ports::voting_gateway::{BackendError, VotingGateway};
use crate::use_cases::fetch_catalog_options::{CatalogFetchError, FetchCatalogOptionsUseCase};
use anipoll_domain::{
    CommandDefaults, CommandError, Poll, PollCreationRequest, RawCommand, assemble_poll_request,
    parse_command,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Errors that can occur while creating an anime poll.
#[derive(Error, Debug)]
pub enum AnipollError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Catalog fetch failed: {0}")]
    Catalog(CatalogFetchError),

    #[error("Voting backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<CatalogFetchError> for AnipollError {
    fn from(err: CatalogFetchError) -> Self {
        match err {
            CatalogFetchError::Cancelled => AnipollError::Cancelled,
            other => AnipollError::Catalog(other),
        }
    }
}

impl AnipollError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AnipollError::Cancelled)
    }
}

/// What the command produced, from the user's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnipollOutcome {
    /// The poll was stored
    Created { poll: Poll },
    /// The command or the backend rejected the request; `message` is for the user
    Rejected { message: String },
    /// The catalog failed; details went to the log only
    CatalogUnavailable,
}

impl AnipollOutcome {
    /// Sort a pipeline failure into what the user should see.
    ///
    /// Command errors and user-facing backend errors become
    /// [`AnipollOutcome::Rejected`]; catalog failures are logged and become
    /// [`AnipollOutcome::CatalogUnavailable`]. Cancellation and unexpected
    /// backend errors are handed back as `Err`.
    pub fn from_failure(err: AnipollError) -> Result<Self, AnipollError> {
        match err {
            AnipollError::Command(e) => {
                warn!("Rejected command: {}", e);
                Ok(AnipollOutcome::Rejected {
                    message: e.to_string(),
                })
            }
            AnipollError::Catalog(e) => {
                error!(error = %e, "received an error from the catalog");
                Ok(AnipollOutcome::CatalogUnavailable)
            }
            AnipollError::Backend(e) if e.is_user_facing() => {
                warn!("Voting backend rejected poll: {}", e);
                Ok(AnipollOutcome::Rejected { message: e.message })
            }
            other => Err(other),
        }
    }
}

/// Input for the [`CreateAnipollUseCase`].
#[derive(Debug, Clone)]
pub struct CreateAnipollInput {
    pub command: RawCommand,
    /// Instant all clock-derived defaults and checks are computed from
    pub evaluated_at: DateTime<Utc>,
}

impl CreateAnipollInput {
    pub fn new(command: RawCommand, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            command,
            evaluated_at,
        }
    }
}

/// Use case for turning an `!anipoll` command into a stored poll.
///
/// Holds no per-invocation state; one instance can serve concurrent commands.
pub struct CreateAnipollUseCase {
    catalog: FetchCatalogOptionsUseCase,
    voting: Arc<dyn VotingGateway>,
    defaults: CommandDefaults,
}

impl Clone for CreateAnipollUseCase {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            voting: self.voting.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

impl CreateAnipollUseCase {
    pub fn new(catalog: Arc<dyn CatalogGateway>, voting: Arc<dyn VotingGateway>) -> Self {
        Self {
            catalog: FetchCatalogOptionsUseCase::new(catalog),
            voting,
            defaults: CommandDefaults::default(),
        }
    }

    pub fn with_fetch_params(mut self, params: FetchParams) -> Self {
        self.catalog = self.catalog.with_params(params);
        self
    }

    pub fn with_command_defaults(mut self, defaults: CommandDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Parse, fetch and assemble without submitting anything.
    pub async fn build_request(
        &self,
        input: &CreateAnipollInput,
        cancellation: &CancellationToken,
    ) -> Result<PollCreationRequest, AnipollError> {
        let criteria = parse_command(&input.command.content, input.evaluated_at, &self.defaults)?;
        debug!(
            "Parsed criteria: season={:?} year={} formats={:?} literal_options={}",
            criteria.season,
            criteria.year,
            criteria.formats,
            criteria.literal_options.len()
        );

        let catalog_options = self
            .catalog
            .execute(&criteria.catalog_query(), cancellation)
            .await?;

        Ok(assemble_poll_request(
            &input.command,
            criteria,
            catalog_options,
        ))
    }

    /// Run the pipeline and submit the poll.
    pub async fn create_poll(
        &self,
        input: &CreateAnipollInput,
        cancellation: &CancellationToken,
    ) -> Result<Poll, AnipollError> {
        let request = self.build_request(input, cancellation).await?;

        info!(
            "Creating poll '{}' with {} options (vote cap {})",
            request.title,
            request.options.len(),
            request.vote_cap
        );

        let poll = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Err(AnipollError::Cancelled),
            result = self.voting.create_poll(&request) => result?,
        };

        Ok(poll)
    }

    /// Run the pipeline and classify the result for the user with
    /// [`AnipollOutcome::from_failure`].
    pub async fn execute(
        &self,
        input: CreateAnipollInput,
        cancellation: &CancellationToken,
    ) -> Result<AnipollOutcome, AnipollError> {
        let started = Instant::now();
        let result = self.create_poll(&input, cancellation).await;
        info!(
            intent = "anipoll",
            took = ?started.elapsed(),
            author = %input.command.author_id,
            "called"
        );

        match result {
            Ok(poll) => Ok(AnipollOutcome::Created { poll }),
            Err(err) => AnipollOutcome::from_failure(err),
        }
    }
}

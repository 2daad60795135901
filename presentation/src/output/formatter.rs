//! Output formatter trait

use anipoll_application::AnipollOutcome;
use anipoll_domain::PollCreationRequest;

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format the outcome of a command
    fn format_outcome(&self, outcome: &AnipollOutcome) -> String;

    /// Format a request that was built but not submitted (dry run)
    fn format_request(&self, request: &PollCreationRequest) -> String;
}

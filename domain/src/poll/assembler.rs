//! Poll request assembly
//!
//! Pure step: everything that can fail has already failed upstream.

use super::entities::{PollCreationRequest, PollOption, RawCommand};
use crate::command::criteria::NormalizedCriteria;

/// Build the poll-creation request.
///
/// Catalog options come first in fetch order, followed by the user's literal
/// options in command order. Duplicates are kept. A zero vote cap becomes the
/// total option count.
pub fn assemble_poll_request(
    command: &RawCommand,
    criteria: NormalizedCriteria,
    catalog_options: Vec<PollOption>,
) -> PollCreationRequest {
    let mut options = catalog_options;
    options.extend(criteria.literal_options.into_iter().map(PollOption::literal));

    let vote_cap = match criteria.vote_cap {
        0 => u32::try_from(options.len()).unwrap_or(u32::MAX),
        cap => cap,
    };

    PollCreationRequest {
        title: criteria.title,
        vote_cap,
        server_id: command.server_id.clone(),
        creator_id: command.author_id.clone(),
        expires_at: criteria.end_time,
        options,
    }
}

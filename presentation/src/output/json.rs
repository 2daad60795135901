//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use anipoll_application::AnipollOutcome;
use anipoll_domain::PollCreationRequest;
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {}\"}}", e))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &AnipollOutcome) -> String {
        Self::to_json(outcome)
    }

    fn format_request(&self, request: &PollCreationRequest) -> String {
        Self::to_json(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anipoll_domain::Poll;

    #[test]
    fn test_outcome_is_tagged() {
        let outcome = AnipollOutcome::Created {
            poll: Poll {
                short_id: "abc".to_string(),
                title: "Fall 2024".to_string(),
                expires_at: None,
                creator_id: "u".to_string(),
            },
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_outcome(&outcome)).unwrap();
        assert_eq!(value["status"], "created");
        assert_eq!(value["poll"]["short_id"], "abc");

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_outcome(&AnipollOutcome::CatalogUnavailable))
                .unwrap();
        assert_eq!(value["status"], "catalog_unavailable");
    }
}

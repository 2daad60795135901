//! AniList catalog adapter.
//!
//! Sends [`SEASONAL_MEDIA_QUERY`] to the AniList GraphQL endpoint, one page
//! per call. AniList reports rate limiting and validation problems as a
//! non-2xx status with a GraphQL `errors` body; those are decoded and passed
//! up as in-band errors rather than transport failures.

use super::query::SEASONAL_MEDIA_QUERY;
use super::wire::GraphQlResponse;
use anipoll_application::ports::catalog_gateway::{CatalogError, CatalogGateway};
use anipoll_domain::{CatalogQuery, CatalogResponse, CatalogResponseError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Public AniList GraphQL endpoint
pub const ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";

/// [`CatalogGateway`] backed by the AniList GraphQL API
pub struct AniListCatalog {
    client: reqwest::Client,
    endpoint: String,
    per_page: u32,
}

impl AniListCatalog {
    /// Create a client for `endpoint`.
    ///
    /// `timeout` bounds each page request; `None` leaves reqwest's default
    /// (no timeout).
    pub fn new(
        endpoint: impl Into<String>,
        per_page: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "anipoll/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            per_page,
        })
    }

    fn request_body(&self, query: &CatalogQuery) -> serde_json::Value {
        let mut variables = query.variables();
        if let Some(vars) = variables.as_object_mut() {
            vars.insert("perPage".into(), self.per_page.into());
        }
        serde_json::json!({
            "query": SEASONAL_MEDIA_QUERY,
            "variables": variables,
        })
    }
}

#[async_trait]
impl CatalogGateway for AniListCatalog {
    async fn query(&self, query: &CatalogQuery) -> Result<CatalogResponse, CatalogError> {
        debug!("Querying AniList page {:?}", query.page);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&self.request_body(query))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;

        decode_response(status, &body)
    }
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Timeout
    } else if err.is_connect() {
        CatalogError::ConnectionError(err.to_string())
    } else {
        CatalogError::RequestFailed(err.to_string())
    }
}

/// Decode a response body, classifying by HTTP status when the body is not
/// a GraphQL document.
pub(crate) fn decode_response(status: u16, body: &str) -> Result<CatalogResponse, CatalogError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<GraphQlResponse>(body) {
        Ok(wire) => {
            let mut response = CatalogResponse::from(wire);
            if !success && response.errors.is_empty() {
                response.errors.push(CatalogResponseError {
                    message: format!("HTTP {}", status),
                    status: Some(status),
                });
            }
            Ok(response)
        }
        Err(_) if !success => Err(CatalogError::RequestFailed(format!("HTTP {}", status))),
        Err(e) => Err(CatalogError::InvalidResponse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anipoll_domain::{MediaFormat, Season};

    #[test]
    fn test_request_body_carries_variables() {
        let catalog = AniListCatalog::new(ANILIST_ENDPOINT, 50, None).unwrap();
        let query = CatalogQuery::new(Some(Season::Winter), "2025", vec![MediaFormat::Tv]).at_page(3);
        let body = catalog.request_body(&query);

        assert_eq!(body["variables"]["season"], "WINTER");
        assert_eq!(body["variables"]["seasonYear"], 2025);
        assert_eq!(body["variables"]["formats"], serde_json::json!(["TV"]));
        assert_eq!(body["variables"]["page"], 3);
        assert_eq!(body["variables"]["perPage"], 50);
        assert!(body["query"].as_str().unwrap().contains("format_in: $formats"));
    }

    #[test]
    fn test_rate_limit_is_in_band() {
        let body = r#"{"errors":[{"message":"Too Many Requests.","status":429}],"data":null}"#;
        let response = decode_response(429, body).unwrap();
        assert_eq!(response.errors[0].message, "Too Many Requests.");
    }

    #[test]
    fn test_error_status_without_errors_is_in_band() {
        let body = r#"{"data":{"page":null}}"#;
        let response = decode_response(500, body).unwrap();
        assert_eq!(response.errors[0].status, Some(500));
    }

    #[test]
    fn test_non_json_error_status_is_transport() {
        let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::RequestFailed(_)));
    }

    #[test]
    fn test_non_json_success_is_invalid() {
        let err = decode_response(200, "not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse(_)));
    }

    #[test]
    fn test_success_page() {
        let body = r#"{"data":{"page":{"pageInfo":{"currentPage":1,"hasNextPage":false},"media":[]}}}"#;
        let response = decode_response(200, body).unwrap();
        assert!(response.errors.is_empty());
        assert!(response.page.is_some());
    }
}

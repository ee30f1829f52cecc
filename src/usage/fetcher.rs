use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use super::models::{RawRecord, UsageRecord};

/// Errors from one fetch-and-parse cycle
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response is not a usage payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed record {key:?}: {reason}")]
    MalformedRecord { key: String, reason: String },
}

/// HTTP client for the remote usage feed
pub struct UsageFeed {
    client: reqwest::Client,
    endpoint: String,
}

impl UsageFeed {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and parse the body into usage records
    pub async fn fetch(&self) -> Result<HashMap<String, UsageRecord>, FeedError> {
        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!(bytes = body.len(), "fetched usage payload");
        parse_payload(&body)
    }
}

/// Parse a JSON payload of record name → raw stats into usage records
pub fn parse_payload(body: &str) -> Result<HashMap<String, UsageRecord>, FeedError> {
    let raw: HashMap<String, RawRecord> = serde_json::from_str(body)?;

    raw.into_iter()
        .map(|(key, raw_record)| match raw_record.into_record() {
            Ok(record) => Ok((key, record)),
            Err(reason) => Err(FeedError::MalformedRecord { key, reason }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_records() {
        let body = r#"{
            "bigdata": {"count": 5, "firstVisit": "2024-01-01", "lastVisit": "2024-01-02"},
            "bigdata-export": {"count": 3, "firstVisit": "2024-01-03", "lastVisit": "2024-01-04"}
        }"#;

        let records = parse_payload(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records["bigdata"].count, 5);
        assert_eq!(records["bigdata-export"].count, 3);
    }

    #[test]
    fn test_parse_payload_empty_object() {
        assert!(parse_payload("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_payload_invalid_json() {
        let err = parse_payload("<html>502</html>").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn test_parse_payload_wrong_shape() {
        // Top level must be an object of records
        let err = parse_payload(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn test_parse_payload_malformed_record() {
        let body = r#"{"app": {"count": 1, "firstVisit": "???", "lastVisit": "2024-01-02"}}"#;

        let err = parse_payload(body).unwrap_err();
        match err {
            FeedError::MalformedRecord { key, reason } => {
                assert_eq!(key, "app");
                assert!(reason.contains("firstVisit"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_payload_missing_field() {
        let body = r#"{"app": {"count": 1, "firstVisit": "2024-01-01"}}"#;
        assert!(matches!(
            parse_payload(body).unwrap_err(),
            FeedError::Parse(_)
        ));
    }
}

//! OpenF1 HTTP API client.
//!
//! One `GET` per endpoint, body decoded as a JSON array of records. The
//! client carries no timeouts, no retries and no caching: a request that
//! never completes leaves the calling view in its loading state until the
//! user navigates away.

pub mod normalize;
mod raw;

pub use raw::{RawConstructor, RawDriver, RawSession};

use serde::de::DeserializeOwned;
use tracing::debug;

/// Default OpenF1 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

/// Error types that can occur while fetching a dataset.
///
/// The UI surfaces all three the same way (the view's error panel with the
/// `Display` text); the distinction exists for logs and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, I/O).
    Request(String),
    /// Non-success HTTP status.
    Status(u16),
    /// Response body was not the expected JSON shape.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "server returned HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// HTTP client for the OpenF1 REST API.
///
/// Cheap to clone; spawned fetch tasks each take their own handle.
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    http: reqwest::Client,
    base_url: String,
}

impl OpenF1Client {
    /// Creates a client for the given base URL. A trailing slash is allowed.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetches one endpoint and decodes the JSON array body.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let url = self.endpoint(path);
        debug!(url = %url, "fetching");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// `GET /sessions` - the races view dataset.
    pub async fn sessions(&self) -> Result<Vec<RawSession>, FetchError> {
        self.get_list("sessions").await
    }

    /// `GET /drivers` - half of the standings view dataset.
    pub async fn drivers(&self) -> Result<Vec<RawDriver>, FetchError> {
        self.get_list("drivers").await
    }

    /// `GET /constructors` - the other half of the standings view dataset.
    pub async fn constructors(&self) -> Result<Vec<RawConstructor>, FetchError> {
        self.get_list("constructors").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = OpenF1Client::new("https://api.openf1.org/v1");
        assert_eq!(
            client.endpoint("sessions"),
            "https://api.openf1.org/v1/sessions"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = OpenF1Client::new("http://localhost:9000/");
        assert_eq!(client.endpoint("drivers"), "http://localhost:9000/drivers");
    }

    #[test]
    fn fetch_error_display_is_user_presentable() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server returned HTTP 503"
        );
        assert_eq!(
            FetchError::Request("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            FetchError::Decode("expected array".to_string()).to_string(),
            "unexpected response body: expected array"
        );
    }
}

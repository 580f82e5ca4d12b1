use crate::application::dto::AssessRequest;
use crate::assessment::domain::AssessmentResult;
use crate::ports::outbound::AssessmentBackend;
use crate::shared::error::{BackendError, BackendResult, ReconError};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Base address used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ASSESS_PATH: &str = "/api/assess";
const HISTORY_PATH: &str = "/api/history";

/// Error document the backend sends alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HttpAssessmentBackend adapter for the evaluation service's JSON API
///
/// This adapter implements the AssessmentBackend port over HTTP:
/// `POST {base}/api/assess` and `GET {base}/api/history`.
///
/// Every request carries the configured timeout. No retries are attempted,
/// so one `assess` call is exactly one request on the wire.
pub struct HttpAssessmentBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpAssessmentBackend {
    /// Creates a backend client for `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) address or the
    /// HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("reputation-recon/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Creates a client for `http://localhost:5000` with a 10 second timeout
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// The normalised base address (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_base_url(raw: &str) -> Result<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = |reason: &str| ReconError::InvalidApiUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(&format!("Unsupported scheme '{}'", url.scheme())).into());
        }
        if matches!(url.host_str(), None | Some("")) {
            return Err(invalid("Missing host").into());
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("Base URL must not carry a query or fragment").into());
        }

        Ok(trimmed.to_string())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and returns the body of a success response
    async fn send(&self, request: reqwest::RequestBuilder) -> BackendResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            return Err(BackendError::Http {
                status: status.as_u16(),
                detail: extract_error_detail(&body),
            });
        }

        Ok(body)
    }

    fn transport_error(&self, error: &reqwest::Error) -> BackendError {
        let message = if error.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs_f64())
        } else if error.is_connect() {
            format!("could not connect to {}: {}", self.base_url, error)
        } else {
            error.to_string()
        };
        BackendError::Network(message)
    }
}

#[async_trait]
impl AssessmentBackend for HttpAssessmentBackend {
    async fn assess(&self, request: &AssessRequest) -> BackendResult<AssessmentResult> {
        let body = self
            .send(self.client.post(self.endpoint(ASSESS_PATH)).json(request))
            .await?;
        parse_body(&body)
    }

    async fn fetch_history(&self) -> BackendResult<Vec<AssessmentResult>> {
        let body = self
            .send(self.client.get(self.endpoint(HISTORY_PATH)))
            .await?;
        parse_body(&body)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> BackendResult<T> {
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}

fn extract_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.trim().is_empty())
}

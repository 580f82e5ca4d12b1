use crate::application::dto::AssessRequest;
use crate::assessment::domain::AssessmentResult;
use crate::shared::error::BackendResult;
use async_trait::async_trait;

/// AssessmentBackend port for the remote evaluation service
///
/// This port abstracts the two endpoints the client depends on:
/// assessment submission and the recent-history listing.
///
/// # Async Support
/// Implementations must be `Send + Sync` because the session shares the
/// backend with its detached history-refresh tasks.
#[async_trait]
pub trait AssessmentBackend: Send + Sync {
    /// Submits one assessment request
    ///
    /// # Arguments
    /// * `request` - Trimmed query plus the snapshot flag
    ///
    /// # Errors
    /// Returns a `BackendError` if:
    /// - The backend cannot be reached
    /// - The backend answers with a non-success status code
    /// - The response body is not a valid assessment document
    async fn assess(&self, request: &AssessRequest) -> BackendResult<AssessmentResult>;

    /// Fetches recent assessments, most recent first
    ///
    /// # Errors
    /// Same failure classes as `assess`
    async fn fetch_history(&self) -> BackendResult<Vec<AssessmentResult>>;
}

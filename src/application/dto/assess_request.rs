use crate::assessment::domain::AssessmentQuery;
use serde::Serialize;

/// AssessRequest - Wire body for `POST /api/assess`
///
/// Built only from a validated `AssessmentQuery`, so `input` is always
/// trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessRequest {
    /// The trimmed product name, URL, or SHA-1 digest
    pub input: String,
    /// Ask the backend for a freshly computed, non-cached evaluation
    pub snapshot_mode: bool,
}

impl AssessRequest {
    /// Creates a point-in-time request; this client always asks for a snapshot
    pub fn snapshot(query: &AssessmentQuery) -> Self {
        Self {
            input: query.as_str().to_string(),
            snapshot_mode: true,
        }
    }
}

/// Network adapters for the evaluation backend
mod http_backend;

pub use http_backend::{HttpAssessmentBackend, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

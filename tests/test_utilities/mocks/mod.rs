/// Mock implementations for testing
mod mock_backend;
mod mock_progress_reporter;

pub use mock_backend::MockBackend;
pub use mock_progress_reporter::MockProgressReporter;

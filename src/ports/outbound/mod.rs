/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (evaluation backend, console, output).
pub mod assessment_backend;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use assessment_backend::AssessmentBackend;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

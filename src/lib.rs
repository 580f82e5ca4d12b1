//! reputation-recon - security reputation assessment client
//!
//! This library submits a product name, URL, or SHA-1 digest to a remote
//! trust evaluation backend, keeps a short history of recent assessments,
//! and renders the returned security report, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`assessment`): Assessment data model, queries and risk tiers
//! - **Application Layer** (`application`): The assessment session, history cache and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP backend, console, formatters and file output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use reputation_recon::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let backend = Arc::new(HttpAssessmentBackend::with_defaults()?);
//! let progress_reporter = Arc::new(StderrProgressReporter::new());
//!
//! // Create the session and populate the history
//! let session = AssessmentSession::new(backend, progress_reporter);
//! session.refresh_history().await;
//!
//! // Assess
//! session.set_query("7zip");
//! if let SubmitOutcome::Completed(SessionStatus::Success) = session.submit().await {
//!     if let Some(result) = session.result() {
//!         let report = AssessmentReportBuilder::build(&result);
//!         println!("{}", MarkdownFormatter::new().format_report(&report)?);
//!     }
//! }
//! session.close();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod assessment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpAssessmentBackend;
    pub use crate::application::dto::{AssessRequest, OutputFormat};
    pub use crate::application::read_models::{
        AssessmentReportBuilder, AssessmentReportView, HistoryView, HistoryViewBuilder,
    };
    pub use crate::application::use_cases::{
        AssessmentSession, HistoryCache, SessionState, SessionStatus, SkipReason, SubmitOutcome,
    };
    pub use crate::assessment::domain::{AssessmentQuery, AssessmentResult, QueryKind};
    pub use crate::assessment::policies::{MaturityTier, RiskTier, SeverityTier};
    pub use crate::ports::outbound::{
        AssessmentBackend, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{BackendError, BackendResult};
    pub use crate::shared::Result;
}

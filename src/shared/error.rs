use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered, trust score at or above any configured minimum
    Success = 0,
    /// The assessed trust score is below `--min-score`
    BelowThreshold = 1,
    /// Invalid command-line arguments (clap parsing errors, empty query)
    InvalidArguments = 2,
    /// Application error (assessment failed, config error, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BelowThreshold => write!(f, "Below Threshold (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of a single call to the evaluation backend.
///
/// Every variant renders as a single human-readable line; that line is what
/// the session shows as its error message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived with a non-success status
    #[error("HTTP error! status: {status}{}", format_detail(.detail))]
    Http { status: u16, detail: Option<String> },

    /// The body was not the expected JSON document
    #[error("Failed to parse backend response: {0}")]
    Parse(String),

    /// The body parsed but broke a documented value range
    #[error("Backend response violates the assessment contract: {0}")]
    Contract(#[from] ContractViolation),
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) if !d.trim().is_empty() => format!(" ({})", d.trim()),
        _ => String::new(),
    }
}

/// Result type for backend port operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// A parsed assessment whose values fall outside the documented ranges
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("{field} = {value} is outside {range}")]
    OutOfRange {
        field: String,
        value: String,
        range: &'static str,
    },
}

/// Application-level errors for the command-line front end.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Invalid API URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http:// or https:// base address, e.g. http://localhost:5000")]
    InvalidApiUrl { url: String, reason: String },

    #[error("No assessment query given\n\n💡 Hint: Pass a product name, URL, or SHA-1 digest, e.g. `reputation-recon 7zip`")]
    EmptyQuery,

    #[error("Assessment failed: {message}")]
    AssessmentFailed { message: String },

    #[error("History entry #{index} not found ({available} available)\n\n💡 Hint: Run with --history to list recent assessments")]
    HistoryEntryNotFound { index: usize, available: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

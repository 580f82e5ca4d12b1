/// ProgressReporter port for user-facing diagnostics
///
/// This port abstracts progress and warning output (e.g., to stderr) so the
/// report itself can go to stdout or a file untouched. It is also the sink for
/// failures that must never reach session state, such as history refreshes.
///
/// Implementations must be `Send + Sync`; background tasks report through it.
pub trait ProgressReporter: Send + Sync {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports that a long-running request has started
    ///
    /// The indicator stays active until the next error or completion report.
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

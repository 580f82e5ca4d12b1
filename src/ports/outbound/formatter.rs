use crate::application::read_models::{AssessmentReportView, HistoryView};
use crate::shared::Result;

/// ReportFormatter port for rendering assessment output
///
/// This port abstracts the rendering of read models into a concrete format
/// (terminal text, Markdown, JSON).
pub trait ReportFormatter {
    /// Renders a full assessment report
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_report(&self, report: &AssessmentReportView) -> Result<String>;

    /// Renders the recent-assessments list
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_history(&self, history: &HistoryView) -> Result<String>;

    /// Renders a report and/or the history list as one document
    ///
    /// The default joins the two renderings with a blank line. Formats that
    /// must stay a single document (JSON) override this.
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_combined(
        &self,
        report: Option<&AssessmentReportView>,
        history: Option<&HistoryView>,
    ) -> Result<String> {
        let mut parts = Vec::new();
        if let Some(report) = report {
            parts.push(self.format_report(report)?);
        }
        if let Some(history) = history {
            parts.push(self.format_history(history)?);
        }
        Ok(parts
            .iter()
            .map(|p| p.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n")
    }
}

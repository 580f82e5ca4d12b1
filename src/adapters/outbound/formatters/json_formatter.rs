use crate::application::read_models::{AssessmentReportView, HistoryView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Report and history in a single document
#[derive(Serialize)]
struct CombinedDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a AssessmentReportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<&'a HistoryView>,
}

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the read models as pretty-printed JSON. The tiers are already
/// resolved in the views, so consumers get the same classification the
/// other formats display.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &AssessmentReportView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(history)?;
        json.push('\n');
        Ok(json)
    }

    fn format_combined(
        &self,
        report: Option<&AssessmentReportView>,
        history: Option<&HistoryView>,
    ) -> Result<String> {
        match (report, history) {
            (Some(report), None) => self.format_report(report),
            (None, Some(history)) => self.format_history(history),
            _ => {
                let mut json =
                    serde_json::to_string_pretty(&CombinedDocument { report, history })?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

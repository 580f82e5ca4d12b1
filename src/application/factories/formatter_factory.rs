use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `use_color` - Whether the text formatter may emit ANSI colours
    ///   (ignored by the other formats)
    ///
    /// # Examples
    /// ```
    /// use reputation_recon::application::dto::OutputFormat;
    /// use reputation_recon::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, false);
    /// ```
    pub fn create(format: OutputFormat, use_color: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use reputation_recon::application::dto::OutputFormat;
    /// use reputation_recon::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering text report...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}

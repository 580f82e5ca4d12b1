/// Output format enumeration for assessment reports
///
/// This enum represents the supported report renderings. It belongs in the
/// application layer as both the CLI (inbound) and the formatters (outbound
/// adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colourised terminal text (default)
    #[default]
    Text,
    /// Human-readable Markdown format
    Markdown,
    /// Machine-readable JSON of the report view
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_text() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str_markdown() {
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("MD").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_json_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(error.contains("text"));
        assert!(error.contains("markdown"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}

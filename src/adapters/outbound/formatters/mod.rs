/// Formatter adapters for the supported report formats
mod json_formatter;
mod markdown_formatter;
mod text_formatter;

#[cfg(test)]
mod test_fixtures;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;

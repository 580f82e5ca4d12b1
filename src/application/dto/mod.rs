/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the domain layer isolated from wire and CLI concerns.
mod assess_request;
mod output_format;

pub use assess_request::AssessRequest;
pub use output_format::OutputFormat;

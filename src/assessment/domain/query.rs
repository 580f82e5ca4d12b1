use std::fmt;

/// Length of a SHA-1 digest rendered as hex
const SHA1_HEX_LENGTH: usize = 40;

/// What an assessment query identifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Free-form product name (e.g. "7zip", "Slack")
    ProductName,
    /// Product homepage or download URL
    Url,
    /// SHA-1 digest of a binary
    Sha1,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::ProductName => write!(f, "product name"),
            QueryKind::Url => write!(f, "URL"),
            QueryKind::Sha1 => write!(f, "SHA-1"),
        }
    }
}

/// NewType wrapper for a submittable assessment query
///
/// The wrapped text is always trimmed and never empty, so holding an
/// `AssessmentQuery` is proof that a request may be issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssessmentQuery(String);

impl AssessmentQuery {
    /// Trims the raw input and returns `None` for empty or whitespace-only text
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the query by its shape
    pub fn kind(&self) -> QueryKind {
        let lower = self.0.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            QueryKind::Url
        } else if self.0.len() == SHA1_HEX_LENGTH && self.0.chars().all(|c| c.is_ascii_hexdigit())
        {
            QueryKind::Sha1
        } else {
            QueryKind::ProductName
        }
    }
}

impl fmt::Display for AssessmentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

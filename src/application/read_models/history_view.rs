//! History view structs for read model

use crate::assessment::policies::RiskTier;
use serde::Serialize;

/// The "Recent Assessments" list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub items: Vec<HistoryItemView>,
    /// Number of entries held by the cache, shown or not
    pub total_cached: usize,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItemView {
    /// 1-based position, usable with `--select`
    pub position: usize,
    pub product_name: String,
    pub trust_score: u32,
    pub tier: RiskTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

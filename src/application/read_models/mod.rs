//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of assessment data for rendering.

pub mod assessment_report_builder;
pub mod assessment_report_view;
pub mod history_view;

pub use assessment_report_builder::{
    format_timestamp, AssessmentReportBuilder, HistoryViewBuilder, UNKNOWN_PRODUCT,
};
pub use assessment_report_view::{
    AlternativeView, AssessmentReportView, BreakdownItemView, BriefView, CveListView, CveView,
    DataHandlingView, EntityView, EvidenceView, IncidentsView, KevEntryView, TrustScoreView,
    VendorReputationView,
};
pub use history_view::{HistoryItemView, HistoryView};

//! Reported-issue ledger, read-time join, and analytics summaries.

pub mod analytics;
pub mod join;
pub mod service;

pub use analytics::AnalyticsService;
pub use join::{AnnotatedAsset, annotate};
pub use service::ReportService;

//! Reported issue entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assethub_core::types::id::{AssetRecordId, ReportedIssueId};

use super::condition::ReportCondition;

/// An immutable ledger entry recording an issue raised against an asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportedIssue {
    /// Unique ledger entry identifier.
    pub id: ReportedIssueId,
    /// The live asset record the issue refers to.
    pub asset_record_id: AssetRecordId,
    /// User-facing asset code at report time.
    pub asset_id: String,
    /// Asset name at report time.
    pub asset_name: String,
    /// Reported condition classification.
    pub condition: ReportCondition,
    /// Free-text description of the issue.
    pub description: String,
    /// Optional photo of the issue, as a data URL.
    pub image: Option<String>,
    /// Identity of the reporter.
    pub reported_by: String,
    /// When the report was filed.
    pub created_at: DateTime<Utc>,
}

/// Data required to file a new reported issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportedIssue {
    /// The live asset record the issue refers to.
    pub asset_record_id: AssetRecordId,
    /// User-facing asset code.
    pub asset_id: String,
    /// Asset name.
    pub asset_name: String,
    /// Reported condition classification.
    pub condition: ReportCondition,
    /// Free-text description.
    pub description: String,
    /// Optional photo as a data URL.
    pub image: Option<String>,
    /// Identity of the reporter.
    pub reported_by: String,
}

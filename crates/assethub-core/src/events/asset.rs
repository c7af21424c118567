//! Asset-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{ArchivedAssetId, AssetRecordId, ReportedIssueId};

/// Events related to asset lifecycle operations.
///
/// These are emitted best-effort through an
/// [`EventSink`](crate::traits::sink::EventSink) after the primary write has
/// committed; they never participate in the write itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssetEvent {
    /// An asset record was created.
    Created {
        /// The record ID.
        record_id: AssetRecordId,
        /// The user-facing asset identifier.
        asset_id: String,
        /// The asset name.
        asset_name: String,
    },
    /// An asset record's fields were edited without a status change.
    Updated {
        /// The record ID.
        record_id: AssetRecordId,
        /// The acting identity.
        updated_by: String,
    },
    /// An asset's operational status changed.
    StatusChanged {
        /// The record ID.
        record_id: AssetRecordId,
        /// The prior status.
        from: String,
        /// The new status.
        to: String,
        /// The reason supplied for the change.
        reason: String,
        /// The acting identity.
        changed_by: String,
    },
    /// A QR artifact was generated and bound to the record.
    QrMaterialized {
        /// The record ID.
        record_id: AssetRecordId,
        /// The canonical URL encoded into the payload.
        canonical_url: String,
        /// Serialized artifact size in bytes.
        artifact_bytes: usize,
    },
    /// A record's QR artifact was cleared.
    QrCleared {
        /// The record ID.
        record_id: AssetRecordId,
    },
    /// An asset was archived and removed from the live store.
    Deleted {
        /// The former live record ID.
        record_id: AssetRecordId,
        /// The archive snapshot ID.
        archive_id: ArchivedAssetId,
        /// Display name of the deleting actor.
        deleted_by: String,
    },
    /// An archived snapshot was permanently removed.
    ArchivePurged {
        /// The archive snapshot ID.
        archive_id: ArchivedAssetId,
        /// The acting identity.
        purged_by: String,
    },
    /// An issue was reported against an asset.
    IssueReported {
        /// The ledger entry ID.
        report_id: ReportedIssueId,
        /// The referenced record ID.
        record_id: AssetRecordId,
        /// The reported condition.
        condition: String,
    },
}

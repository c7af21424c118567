//! Archived asset entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use assethub_core::types::id::{ArchivedAssetId, AssetRecordId, PersonnelId};

use crate::asset::history::StatusChangeEvent;
use crate::asset::model::AssetRecord;
use crate::asset::period::OperationalPeriod;
use crate::asset::status::AssetStatus;

/// A full snapshot of a deleted asset, kept for audit purposes.
///
/// The archive collection is append-only: snapshots are created by the
/// delete path and only ever removed through an explicitly confirmed purge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArchivedAssetRecord {
    /// Unique snapshot identifier.
    pub id: ArchivedAssetId,
    /// The live record id this snapshot was taken from. Never reused.
    pub original_record_id: AssetRecordId,
    /// User-facing asset code at deletion time.
    pub asset_id: String,
    /// Asset name at deletion time.
    pub asset_name: String,
    /// Category at deletion time.
    pub category: String,
    /// Sub-type at deletion time.
    pub sub_type: Option<String>,
    /// Serial number at deletion time.
    pub serial_number: Option<String>,
    /// Operational period at deletion time.
    pub operational_period: OperationalPeriod,
    /// Operational status at deletion time.
    pub status: AssetStatus,
    /// Assigned personnel at deletion time.
    pub assigned_personnel: Option<PersonnelId>,
    /// Purchase date at deletion time.
    pub purchase_date: Option<NaiveDate>,
    /// Renewal date at deletion time.
    pub renewal_date: Option<NaiveDate>,
    /// Whether QR generation was enabled at deletion time.
    pub generate_qr: bool,
    /// QR artifact at deletion time.
    pub qr_image: Option<String>,
    /// Canonical URL at deletion time.
    pub canonical_url: Option<String>,
    /// Full status history at deletion time.
    pub history: Json<Vec<StatusChangeEvent>>,
    /// Original creator identity.
    pub created_by: String,
    /// Original creation time.
    pub created_at: DateTime<Utc>,
    /// Last editor identity before deletion.
    pub updated_by: String,
    /// Last update time before deletion.
    pub updated_at: DateTime<Utc>,
    /// When the deletion happened.
    pub deleted_at: DateTime<Utc>,
    /// Resolved display name of the deleting actor (falls back to the raw
    /// identity when no directory entry resolves).
    pub deleted_by: String,
    /// Raw identity string of the deleting actor.
    pub deleted_by_identity: String,
    /// Reason supplied for the deletion.
    pub deletion_reason: String,
}

impl ArchivedAssetRecord {
    /// Take a snapshot of a live record with deletion audit metadata.
    ///
    /// Every asset field is copied verbatim, history included.
    pub fn snapshot(
        record: &AssetRecord,
        deleted_at: DateTime<Utc>,
        deleted_by: String,
        deleted_by_identity: String,
        deletion_reason: String,
    ) -> Self {
        Self {
            id: ArchivedAssetId::new(),
            original_record_id: record.id,
            asset_id: record.asset_id.clone(),
            asset_name: record.asset_name.clone(),
            category: record.category.clone(),
            sub_type: record.sub_type.clone(),
            serial_number: record.serial_number.clone(),
            operational_period: record.operational_period,
            status: record.status,
            assigned_personnel: record.assigned_personnel,
            purchase_date: record.purchase_date,
            renewal_date: record.renewal_date,
            generate_qr: record.generate_qr,
            qr_image: record.qr_image.clone(),
            canonical_url: record.canonical_url.clone(),
            history: record.history.clone(),
            created_by: record.created_by.clone(),
            created_at: record.created_at,
            updated_by: record.updated_by.clone(),
            updated_at: record.updated_at,
            deleted_at,
            deleted_by,
            deleted_by_identity,
            deletion_reason,
        }
    }
}

//! Asset record entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use assethub_core::types::id::{AssetRecordId, PersonnelId};

use super::history::StatusChangeEvent;
use super::period::OperationalPeriod;
use super::status::AssetStatus;

/// Days before the renewal date at which an expiring asset is flagged.
const EXPIRY_WARNING_DAYS: i64 = 30;

/// A tracked asset or license.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetRecord {
    /// System-assigned record identifier. Stable for the record's lifetime
    /// and never reused by a later asset.
    pub id: AssetRecordId,
    /// User-facing asset code, used for QR payloads and external lookup.
    pub asset_id: String,
    /// Human-readable asset name.
    pub asset_name: String,
    /// Category name from the managed category list.
    pub category: String,
    /// Category-dependent sub-type (asset type or license type).
    pub sub_type: Option<String>,
    /// Manufacturer serial number.
    pub serial_number: Option<String>,
    /// Operational period classification.
    pub operational_period: OperationalPeriod,
    /// Current operational status.
    pub status: AssetStatus,
    /// Weak reference to the assigned personnel record. `None` = unassigned.
    pub assigned_personnel: Option<PersonnelId>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
    /// Renewal date. Ignored by expiry computation when the operational
    /// period is non-expiring.
    pub renewal_date: Option<NaiveDate>,
    /// Whether QR generation is enabled for this record.
    pub generate_qr: bool,
    /// Rendered QR artifact as a PNG data URL. Never present while
    /// `generate_qr` is false.
    pub qr_image: Option<String>,
    /// The stable locator encoded into the QR payload.
    pub canonical_url: Option<String>,
    /// Append-only status change history, oldest first.
    pub history: Json<Vec<StatusChangeEvent>>,
    /// Identity that created the record.
    pub created_by: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Identity of the last editor.
    pub updated_by: String,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Whether this record is exempt from expiry computation.
    pub fn is_non_expiring(&self) -> bool {
        self.operational_period.is_non_expiring()
    }

    /// Classify the record's condition from its renewal date.
    ///
    /// Non-expiring records and records without a renewal date are always
    /// Functional; a lapsed renewal date classifies as Unserviceable and one
    /// within the warning window as Defective. The result is a read-time
    /// projection and is never written back to `status`.
    pub fn expiry_status(&self, today: NaiveDate) -> AssetStatus {
        if self.is_non_expiring() {
            return AssetStatus::Functional;
        }
        let Some(renewal) = self.renewal_date else {
            return AssetStatus::Functional;
        };
        let days_left = (renewal - today).num_days();
        if days_left < 0 {
            AssetStatus::Unserviceable
        } else if days_left <= EXPIRY_WARNING_DAYS {
            AssetStatus::Defective
        } else {
            AssetStatus::Functional
        }
    }

    /// The most recent status change, if any.
    pub fn last_status_change(&self) -> Option<&StatusChangeEvent> {
        self.history.last()
    }
}

/// Data required to create a new asset record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// User-facing asset code.
    pub asset_id: String,
    /// Human-readable asset name.
    pub asset_name: String,
    /// Category name.
    pub category: String,
    /// Category-dependent sub-type.
    pub sub_type: Option<String>,
    /// Manufacturer serial number.
    pub serial_number: Option<String>,
    /// Operational period classification.
    pub operational_period: OperationalPeriod,
    /// Initial operational status.
    pub status: AssetStatus,
    /// Assigned personnel, if any.
    pub assigned_personnel: Option<PersonnelId>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
    /// Renewal date.
    pub renewal_date: Option<NaiveDate>,
    /// Whether QR generation is enabled.
    pub generate_qr: bool,
    /// Identity of the creator.
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: OperationalPeriod, renewal: Option<NaiveDate>) -> AssetRecord {
        let now = Utc::now();
        AssetRecord {
            id: AssetRecordId::new(),
            asset_id: "A-100".to_string(),
            asset_name: "Ward Laptop".to_string(),
            category: "Asset".to_string(),
            sub_type: Some("Laptop".to_string()),
            serial_number: Some("SN-0001".to_string()),
            operational_period: period,
            status: AssetStatus::Functional,
            assigned_personnel: None,
            purchase_date: None,
            renewal_date: renewal,
            generate_qr: false,
            qr_image: None,
            canonical_url: None,
            history: Json(Vec::new()),
            created_by: "admin@example.org".to_string(),
            created_at: now,
            updated_by: "admin@example.org".to_string(),
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expired_renewal_is_unserviceable() {
        let rec = record(OperationalPeriod::Subscription, Some(date(2026, 1, 1)));
        assert_eq!(
            rec.expiry_status(date(2026, 2, 1)),
            AssetStatus::Unserviceable
        );
    }

    #[test]
    fn test_renewal_within_window_is_defective() {
        let rec = record(OperationalPeriod::Subscription, Some(date(2026, 2, 15)));
        assert_eq!(rec.expiry_status(date(2026, 2, 1)), AssetStatus::Defective);
    }

    #[test]
    fn test_distant_renewal_is_functional() {
        let rec = record(OperationalPeriod::Subscription, Some(date(2026, 6, 1)));
        assert_eq!(rec.expiry_status(date(2026, 2, 1)), AssetStatus::Functional);
    }

    #[test]
    fn test_non_expiring_ignores_renewal_date() {
        // A lapsed renewal date must not affect a non-expiring record.
        for period in [
            OperationalPeriod::Perpetual,
            OperationalPeriod::Oem,
            OperationalPeriod::OpenSource,
        ] {
            let rec = record(period, Some(date(2020, 1, 1)));
            assert_eq!(rec.expiry_status(date(2026, 2, 1)), AssetStatus::Functional);
        }
    }

    #[test]
    fn test_missing_renewal_is_functional() {
        let rec = record(OperationalPeriod::Trial, None);
        assert_eq!(rec.expiry_status(date(2026, 2, 1)), AssetStatus::Functional);
    }
}

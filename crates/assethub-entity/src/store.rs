//! Store contracts for the asset, archive, report, and personnel
//! collections.
//!
//! The traits are defined here in `assethub-entity` and implemented in
//! `assethub-database` against PostgreSQL. The service layer only ever sees
//! these traits, so its failure handling can be exercised against in-memory
//! stores. The backing store is trusted to provide per-document atomic
//! writes; no transaction spans the asset/archive boundary.

use async_trait::async_trait;

use assethub_core::result::AppResult;
use assethub_core::types::id::{ArchivedAssetId, AssetRecordId, PersonnelId};
use assethub_core::types::pagination::{PageRequest, PageResponse};

use crate::archive::model::ArchivedAssetRecord;
use crate::asset::model::{AssetRecord, CreateAsset};
use crate::personnel::model::Personnel;
use crate::report::model::{CreateReportedIssue, ReportedIssue};

/// The authoritative collection of live asset records.
#[async_trait]
pub trait AssetStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a record by its system-assigned id.
    async fn find_by_id(&self, id: AssetRecordId) -> AppResult<Option<AssetRecord>>;

    /// Find a record by its user-facing asset code.
    async fn find_by_asset_id(&self, asset_id: &str) -> AppResult<Option<AssetRecord>>;

    /// List records with pagination, newest first.
    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<AssetRecord>>;

    /// Fetch the full current record set (for joins and analytics).
    async fn find_all(&self) -> AppResult<Vec<AssetRecord>>;

    /// Create a new record with empty history and return it.
    async fn create(&self, data: &CreateAsset) -> AppResult<AssetRecord>;

    /// Persist the full proposed state of a record as one atomic write,
    /// history included, and return the stored record.
    async fn replace(&self, record: &AssetRecord) -> AppResult<AssetRecord>;

    /// Remove a record. Returns `true` if a record was removed.
    async fn delete(&self, id: AssetRecordId) -> AppResult<bool>;
}

/// The append-only collection of deleted-asset snapshots.
#[async_trait]
pub trait ArchiveStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a snapshot as a new archive entry and return it.
    async fn create(&self, snapshot: &ArchivedAssetRecord) -> AppResult<ArchivedAssetRecord>;

    /// List snapshots with pagination, most recently deleted first.
    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<ArchivedAssetRecord>>;

    /// Permanently remove a snapshot. Returns `true` if one was removed.
    async fn purge(&self, id: ArchivedAssetId) -> AppResult<bool>;
}

/// The ledger of reported issues, joined to assets at read time.
#[async_trait]
pub trait ReportStore: Send + Sync + std::fmt::Debug + 'static {
    /// File a new report and return it.
    async fn create(&self, data: &CreateReportedIssue) -> AppResult<ReportedIssue>;

    /// Fetch the full current ledger.
    async fn find_all(&self) -> AppResult<Vec<ReportedIssue>>;

    /// Fetch all reports referencing one asset record.
    async fn find_by_record(&self, record_id: AssetRecordId) -> AppResult<Vec<ReportedIssue>>;
}

/// Weak-reference lookup from personnel ids to directory entries.
///
/// Callers must degrade gracefully when a lookup misses: an unresolvable id
/// is shown raw rather than treated as an error.
#[async_trait]
pub trait PersonnelDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find a directory entry by id.
    async fn find_by_id(&self, id: PersonnelId) -> AppResult<Option<Personnel>>;

    /// Find a directory entry by its email identity.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>>;
}

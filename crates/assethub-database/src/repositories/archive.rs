//! Archive store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::ArchivedAssetId;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::archive::model::ArchivedAssetRecord;
use assethub_entity::store::ArchiveStore;

/// Repository for archived asset snapshots.
#[derive(Debug, Clone)]
pub struct ArchiveRepository {
    pool: PgPool,
}

impl ArchiveRepository {
    /// Create a new archive repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArchiveStore for ArchiveRepository {
    async fn create(&self, snapshot: &ArchivedAssetRecord) -> AppResult<ArchivedAssetRecord> {
        sqlx::query_as::<_, ArchivedAssetRecord>(
            "INSERT INTO archived_assets (id, original_record_id, asset_id, asset_name, \
             category, sub_type, serial_number, operational_period, status, \
             assigned_personnel, purchase_date, renewal_date, generate_qr, qr_image, \
             canonical_url, history, created_by, created_at, updated_by, updated_at, \
             deleted_at, deleted_by, deleted_by_identity, deletion_reason) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20, $21, $22, $23, $24) RETURNING *",
        )
        .bind(snapshot.id)
        .bind(snapshot.original_record_id)
        .bind(&snapshot.asset_id)
        .bind(&snapshot.asset_name)
        .bind(&snapshot.category)
        .bind(&snapshot.sub_type)
        .bind(&snapshot.serial_number)
        .bind(snapshot.operational_period)
        .bind(snapshot.status)
        .bind(snapshot.assigned_personnel)
        .bind(snapshot.purchase_date)
        .bind(snapshot.renewal_date)
        .bind(snapshot.generate_qr)
        .bind(&snapshot.qr_image)
        .bind(&snapshot.canonical_url)
        .bind(&snapshot.history)
        .bind(&snapshot.created_by)
        .bind(snapshot.created_at)
        .bind(&snapshot.updated_by)
        .bind(snapshot.updated_at)
        .bind(snapshot.deleted_at)
        .bind(&snapshot.deleted_by)
        .bind(&snapshot.deleted_by_identity)
        .bind(&snapshot.deletion_reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to create archive entry", e)
        })
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<ArchivedAssetRecord>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM archived_assets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to count archive entries", e)
            })?;

        let snapshots = sqlx::query_as::<_, ArchivedAssetRecord>(
            "SELECT * FROM archived_assets ORDER BY deleted_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to list archive entries", e)
        })?;

        Ok(PageResponse::new(
            snapshots,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn purge(&self, id: ArchivedAssetId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM archived_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to purge archive entry", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

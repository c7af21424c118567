//! Asset store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::AssetRecordId;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::model::{AssetRecord, CreateAsset};
use assethub_entity::store::AssetStore;

/// Repository for live asset records.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for AssetRepository {
    async fn find_by_id(&self, id: AssetRecordId) -> AppResult<Option<AssetRecord>> {
        sqlx::query_as::<_, AssetRecord>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to find asset", e))
    }

    async fn find_by_asset_id(&self, asset_id: &str) -> AppResult<Option<AssetRecord>> {
        sqlx::query_as::<_, AssetRecord>("SELECT * FROM assets WHERE asset_id = $1")
            .bind(asset_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find asset by code", e)
            })
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<AssetRecord>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to count assets", e)
            })?;

        let records = sqlx::query_as::<_, AssetRecord>(
            "SELECT * FROM assets ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to list assets", e))?;

        Ok(PageResponse::new(
            records,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn find_all(&self) -> AppResult<Vec<AssetRecord>> {
        sqlx::query_as::<_, AssetRecord>("SELECT * FROM assets ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to fetch assets", e)
            })
    }

    async fn create(&self, data: &CreateAsset) -> AppResult<AssetRecord> {
        sqlx::query_as::<_, AssetRecord>(
            "INSERT INTO assets (asset_id, asset_name, category, sub_type, serial_number, \
             operational_period, status, assigned_personnel, purchase_date, renewal_date, \
             generate_qr, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12) RETURNING *",
        )
        .bind(&data.asset_id)
        .bind(&data.asset_name)
        .bind(&data.category)
        .bind(&data.sub_type)
        .bind(&data.serial_number)
        .bind(data.operational_period)
        .bind(data.status)
        .bind(data.assigned_personnel)
        .bind(data.purchase_date)
        .bind(data.renewal_date)
        .bind(data.generate_qr)
        .bind(&data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("assets_asset_id_key") => {
                AppError::conflict(format!("Asset code '{}' is already in use", data.asset_id))
            }
            _ => AppError::with_source(ErrorKind::Persistence, "Failed to create asset", e),
        })
    }

    async fn replace(&self, record: &AssetRecord) -> AppResult<AssetRecord> {
        sqlx::query_as::<_, AssetRecord>(
            "UPDATE assets SET asset_id = $2, asset_name = $3, category = $4, sub_type = $5, \
             serial_number = $6, operational_period = $7, status = $8, assigned_personnel = $9, \
             purchase_date = $10, renewal_date = $11, generate_qr = $12, qr_image = $13, \
             canonical_url = $14, history = $15, updated_by = $16, updated_at = $17 \
             WHERE id = $1 RETURNING *",
        )
        .bind(record.id)
        .bind(&record.asset_id)
        .bind(&record.asset_name)
        .bind(&record.category)
        .bind(&record.sub_type)
        .bind(&record.serial_number)
        .bind(record.operational_period)
        .bind(record.status)
        .bind(record.assigned_personnel)
        .bind(record.purchase_date)
        .bind(record.renewal_date)
        .bind(record.generate_qr)
        .bind(&record.qr_image)
        .bind(&record.canonical_url)
        .bind(&record.history)
        .bind(&record.updated_by)
        .bind(record.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to update asset", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset {} not found", record.id)))
    }

    async fn delete(&self, id: AssetRecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to delete asset", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

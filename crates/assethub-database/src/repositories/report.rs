//! Report ledger store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::AssetRecordId;
use assethub_entity::report::model::{CreateReportedIssue, ReportedIssue};
use assethub_entity::store::ReportStore;

/// Repository for the reported-issue ledger.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for ReportRepository {
    async fn create(&self, data: &CreateReportedIssue) -> AppResult<ReportedIssue> {
        sqlx::query_as::<_, ReportedIssue>(
            "INSERT INTO reported_issues (asset_record_id, asset_id, asset_name, condition, \
             description, image, reported_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.asset_record_id)
        .bind(&data.asset_id)
        .bind(&data.asset_name)
        .bind(data.condition)
        .bind(&data.description)
        .bind(&data.image)
        .bind(&data.reported_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to file report", e))
    }

    async fn find_all(&self) -> AppResult<Vec<ReportedIssue>> {
        sqlx::query_as::<_, ReportedIssue>(
            "SELECT * FROM reported_issues ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to list reports", e))
    }

    async fn find_by_record(&self, record_id: AssetRecordId) -> AppResult<Vec<ReportedIssue>> {
        sqlx::query_as::<_, ReportedIssue>(
            "SELECT * FROM reported_issues WHERE asset_record_id = $1 ORDER BY created_at DESC",
        )
        .bind(record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to list reports for asset", e)
        })
    }
}

//! Personnel directory implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::PersonnelId;
use assethub_entity::personnel::model::Personnel;
use assethub_entity::store::PersonnelDirectory;

/// Repository for the personnel directory.
#[derive(Debug, Clone)]
pub struct PersonnelRepository {
    pool: PgPool,
}

impl PersonnelRepository {
    /// Create a new personnel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonnelDirectory for PersonnelRepository {
    async fn find_by_id(&self, id: PersonnelId) -> AppResult<Option<Personnel>> {
        sqlx::query_as::<_, Personnel>("SELECT * FROM personnel WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find personnel", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>> {
        sqlx::query_as::<_, Personnel>("SELECT * FROM personnel WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find personnel by email", e)
            })
    }
}

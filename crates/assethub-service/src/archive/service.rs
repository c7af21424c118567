//! Archive-before-remove deletion of asset records.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use assethub_core::error::AppError;
use assethub_core::events::AssetEvent;
use assethub_core::traits::sink::EventSink;
use assethub_core::types::id::{ArchivedAssetId, AssetRecordId};
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::archive::model::ArchivedAssetRecord;
use assethub_entity::store::{ArchiveStore, AssetStore, PersonnelDirectory};

use crate::context::RequestContext;
use crate::notify;

/// Deletes assets by snapshotting them into the archive first.
///
/// The snapshot write and the live-record removal are two writes against
/// independent collections with no spanning transaction; the service
/// guarantees only their ordering. A failed snapshot aborts the delete with
/// the live record untouched; a failed removal after a successful snapshot
/// is surfaced for manual reconciliation, never retried.
#[derive(Debug, Clone)]
pub struct ArchiveService {
    /// Live asset store.
    assets: Arc<dyn AssetStore>,
    /// Archive snapshot store.
    archive: Arc<dyn ArchiveStore>,
    /// Personnel directory (for the deleting actor's display name).
    directory: Arc<dyn PersonnelDirectory>,
    /// Notification side channel.
    events: Arc<dyn EventSink>,
}

impl ArchiveService {
    /// Creates a new archive service.
    pub fn new(
        assets: Arc<dyn AssetStore>,
        archive: Arc<dyn ArchiveStore>,
        directory: Arc<dyn PersonnelDirectory>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            assets,
            archive,
            directory,
            events,
        }
    }

    /// Deletes a live asset, archiving its full snapshot first.
    pub async fn delete_asset(
        &self,
        ctx: &RequestContext,
        record_id: AssetRecordId,
        reason: &str,
    ) -> Result<ArchivedAssetRecord, AppError> {
        if reason.trim().is_empty() {
            return Err(AppError::validation("Deletion requires a reason"));
        }

        let record = self
            .assets
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        let deleted_by = self.resolve_display_name(&ctx.identity).await;
        let snapshot = ArchivedAssetRecord::snapshot(
            &record,
            Utc::now(),
            deleted_by,
            ctx.identity.clone(),
            reason.trim().to_string(),
        );

        let archived = self.archive.create(&snapshot).await.map_err(|e| {
            AppError::archival(format!("Archive write failed, asset not deleted: {e}"))
        })?;

        match self.assets.delete(record_id).await {
            Ok(true) => {}
            Ok(false) => {
                // Another session removed the record between our read and
                // delete. The archive entry stands; nothing was lost.
                warn!(
                    record_id = %record_id,
                    archive_id = %archived.id,
                    "Live record was already gone during delete"
                );
            }
            Err(e) => {
                return Err(AppError::partial_deletion(format!(
                    "Asset {record_id} was archived as {} but could not be removed \
                     from the live store: {e}. Manual reconciliation required.",
                    archived.id
                )));
            }
        }

        info!(
            record_id = %record_id,
            archive_id = %archived.id,
            deleted_by = %archived.deleted_by,
            "Asset archived and deleted"
        );

        notify::emit(
            &self.events,
            AssetEvent::Deleted {
                record_id,
                archive_id: archived.id,
                deleted_by: archived.deleted_by.clone(),
            },
        )
        .await;

        Ok(archived)
    }

    /// Lists archived snapshots, most recently deleted first.
    pub async fn list_archived(
        &self,
        page: PageRequest,
    ) -> Result<PageResponse<ArchivedAssetRecord>, AppError> {
        self.archive.find_page(&page).await
    }

    /// Permanently removes an archive snapshot.
    ///
    /// This is true deletion with no further snapshotting, so it is gated on
    /// super-admin role and an explicit confirmation flag.
    pub async fn purge_archived(
        &self,
        ctx: &RequestContext,
        archive_id: ArchivedAssetId,
        confirmed: bool,
    ) -> Result<(), AppError> {
        if !ctx.is_super_admin() {
            return Err(AppError::forbidden(
                "Only a super-admin can permanently delete archived assets",
            ));
        }
        if !confirmed {
            return Err(AppError::validation(
                "Permanent deletion requires explicit confirmation",
            ));
        }

        let removed = self.archive.purge(archive_id).await?;
        if !removed {
            return Err(AppError::not_found("Archived asset not found"));
        }

        info!(archive_id = %archive_id, purged_by = %ctx.identity, "Archived asset purged");

        notify::emit(
            &self.events,
            AssetEvent::ArchivePurged {
                archive_id,
                purged_by: ctx.identity.clone(),
            },
        )
        .await;

        Ok(())
    }

    /// Resolves the actor's display name, degrading to the raw identity.
    async fn resolve_display_name(&self, identity: &str) -> String {
        match self.directory.find_by_email(identity).await {
            Ok(Some(person)) => person.full_name(),
            Ok(None) => identity.to_string(),
            Err(e) => {
                warn!(error = %e, "Directory lookup failed; using raw identity");
                identity.to_string()
            }
        }
    }
}

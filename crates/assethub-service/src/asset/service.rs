//! Asset CRUD with audited status transitions.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use assethub_core::error::AppError;
use assethub_core::events::AssetEvent;
use assethub_core::traits::sink::EventSink;
use assethub_core::types::id::{AssetRecordId, PersonnelId};
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::category;
use assethub_entity::asset::history::StatusChangeEvent;
use assethub_entity::asset::model::{AssetRecord, CreateAsset};
use assethub_entity::asset::period::OperationalPeriod;
use assethub_entity::asset::status::AssetStatus;
use assethub_entity::store::{AssetStore, PersonnelDirectory};

use crate::context::RequestContext;
use crate::notify;

/// Handles asset CRUD and enforces the status transition rules.
#[derive(Debug, Clone)]
pub struct AssetService {
    /// Live asset store.
    assets: Arc<dyn AssetStore>,
    /// Personnel directory (for assignee display names).
    directory: Arc<dyn PersonnelDirectory>,
    /// Notification side channel.
    events: Arc<dyn EventSink>,
}

/// The full proposed editable state of an asset.
///
/// Callers supply every editable field, not a delta: the engine persists the
/// whole proposed state (plus any appended history entry) as one write, so
/// there is no read-modify-write window exposed beyond the load inside
/// [`AssetService::apply_edit`] itself.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EditAssetRequest {
    /// New asset name.
    pub asset_name: String,
    /// New category.
    pub category: String,
    /// New category-dependent sub-type.
    pub sub_type: Option<String>,
    /// New serial number.
    pub serial_number: Option<String>,
    /// New operational period.
    pub operational_period: OperationalPeriod,
    /// Proposed operational status.
    pub status: AssetStatus,
    /// New personnel assignment.
    pub assigned_personnel: Option<PersonnelId>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New renewal date.
    pub renewal_date: Option<NaiveDate>,
    /// Whether QR generation stays enabled.
    pub generate_qr: bool,
    /// Reason for a status change. Required whenever the proposed status
    /// differs from the current one.
    pub reason: Option<String>,
    /// Responsible party for a completed maintenance. Required exactly for
    /// the Under Maintenance -> Functional transition.
    pub maintained_by: Option<String>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(
        assets: Arc<dyn AssetStore>,
        directory: Arc<dyn PersonnelDirectory>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            assets,
            directory,
            events,
        }
    }

    /// Creates a new asset record with empty history.
    pub async fn create_asset(
        &self,
        ctx: &RequestContext,
        mut data: CreateAsset,
    ) -> Result<AssetRecord, AppError> {
        if data.asset_id.trim().is_empty() {
            return Err(AppError::validation("Asset code cannot be empty"));
        }
        if data.asset_name.trim().is_empty() {
            return Err(AppError::validation("Asset name cannot be empty"));
        }
        category::validate_sub_type(&data.category, data.sub_type.as_deref())?;

        data.created_by = ctx.identity.clone();
        let record = self.assets.create(&data).await?;

        info!(
            record_id = %record.id,
            asset_id = %record.asset_id,
            created_by = %ctx.identity,
            "Asset created"
        );

        notify::emit(
            &self.events,
            AssetEvent::Created {
                record_id: record.id,
                asset_id: record.asset_id.clone(),
                asset_name: record.asset_name.clone(),
            },
        )
        .await;

        Ok(record)
    }

    /// Gets a single asset record.
    pub async fn get_asset(
        &self,
        record_id: AssetRecordId,
    ) -> Result<AssetRecord, AppError> {
        self.assets
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))
    }

    /// Looks up an asset by its user-facing code (the value a scanned QR
    /// payload carries).
    pub async fn get_by_asset_id(&self, asset_id: &str) -> Result<AssetRecord, AppError> {
        self.assets
            .find_by_asset_id(asset_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No asset with code '{asset_id}'")))
    }

    /// Lists asset records with pagination, newest first.
    pub async fn list_assets(
        &self,
        page: PageRequest,
    ) -> Result<PageResponse<AssetRecord>, AppError> {
        self.assets.find_page(&page).await
    }

    /// Applies a full edit to an asset, enforcing the transition rules.
    ///
    /// Validation happens before any persistence; a rejected edit leaves the
    /// record untouched. A status change appends exactly one history entry.
    /// The updated record — fields plus history — is persisted as a single
    /// store write, and store failures propagate without retry.
    pub async fn apply_edit(
        &self,
        ctx: &RequestContext,
        record_id: AssetRecordId,
        req: EditAssetRequest,
    ) -> Result<AssetRecord, AppError> {
        let existing = self
            .assets
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        if req.asset_name.trim().is_empty() {
            return Err(AppError::validation("Asset name cannot be empty"));
        }
        category::validate_sub_type(&req.category, req.sub_type.as_deref())?;

        let status_changed = req.status != existing.status;
        let reason = req.reason.as_deref().map(str::trim).unwrap_or_default();
        if status_changed && reason.is_empty() {
            return Err(AppError::validation("Status change requires a reason"));
        }

        let completes_maintenance = existing.status == AssetStatus::UnderMaintenance
            && req.status == AssetStatus::Functional;
        let maintained_by = req
            .maintained_by
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if completes_maintenance && maintained_by.is_empty() {
            return Err(AppError::validation(
                "Maintenance completion requires a responsible party",
            ));
        }

        let mut updated = existing.clone();
        updated.asset_name = req.asset_name;
        updated.category = req.category;
        updated.sub_type = req.sub_type;
        updated.serial_number = req.serial_number;
        updated.operational_period = req.operational_period;
        updated.status = req.status;
        updated.assigned_personnel = req.assigned_personnel;
        updated.purchase_date = req.purchase_date;
        updated.renewal_date = req.renewal_date;
        updated.generate_qr = req.generate_qr;
        if !req.generate_qr {
            // Disabled QR never keeps a stale artifact.
            updated.qr_image = None;
        }
        updated.updated_by = ctx.identity.clone();
        updated.updated_at = Utc::now();

        if status_changed {
            updated.history.push(StatusChangeEvent {
                changed_at: updated.updated_at,
                changed_by: ctx.identity.clone(),
                from: existing.status,
                to: req.status,
                reason: reason.to_string(),
                maintained_by: completes_maintenance.then(|| maintained_by.to_string()),
            });
        }

        let stored = self.assets.replace(&updated).await?;

        if status_changed {
            info!(
                record_id = %record_id,
                from = %existing.status,
                to = %stored.status,
                changed_by = %ctx.identity,
                "Asset status changed"
            );
            notify::emit(
                &self.events,
                AssetEvent::StatusChanged {
                    record_id,
                    from: existing.status.to_string(),
                    to: stored.status.to_string(),
                    reason: reason.to_string(),
                    changed_by: ctx.identity.clone(),
                },
            )
            .await;
        } else {
            info!(record_id = %record_id, updated_by = %ctx.identity, "Asset updated");
            notify::emit(
                &self.events,
                AssetEvent::Updated {
                    record_id,
                    updated_by: ctx.identity.clone(),
                },
            )
            .await;
        }

        Ok(stored)
    }

    /// Resolves the assignee label for a record.
    ///
    /// A missing directory entry (or a directory failure) degrades to the
    /// raw personnel id; an unassigned record shows as `"Unassigned"`.
    pub async fn assignee_label(&self, record: &AssetRecord) -> String {
        let Some(personnel_id) = record.assigned_personnel else {
            return "Unassigned".to_string();
        };
        match self.directory.find_by_id(personnel_id).await {
            Ok(Some(person)) => person.full_name(),
            _ => personnel_id.to_string(),
        }
    }
}

//! Reported-issue ledger service.

use std::sync::Arc;

use tracing::info;

use assethub_core::error::AppError;
use assethub_core::events::AssetEvent;
use assethub_core::traits::sink::EventSink;
use assethub_core::types::id::AssetRecordId;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::report::condition::ReportCondition;
use assethub_entity::report::model::{CreateReportedIssue, ReportedIssue};
use assethub_entity::store::{AssetStore, ReportStore};

use crate::context::RequestContext;
use crate::notify;
use crate::report::join::{AnnotatedAsset, annotate};

/// Manages the reported-issue ledger and its join onto assets.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Live asset store.
    assets: Arc<dyn AssetStore>,
    /// Report ledger store.
    reports: Arc<dyn ReportStore>,
    /// Notification side channel.
    events: Arc<dyn EventSink>,
}

/// Data supplied when reporting an issue against an asset.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitReportRequest {
    /// The asset being reported.
    pub record_id: AssetRecordId,
    /// Observed condition.
    pub condition: ReportCondition,
    /// Free-text description of the issue.
    pub description: String,
    /// Optional photo as a data URL.
    pub image: Option<String>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        assets: Arc<dyn AssetStore>,
        reports: Arc<dyn ReportStore>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            assets,
            reports,
            events,
        }
    }

    /// Files a new issue report against an asset.
    pub async fn submit_report(
        &self,
        ctx: &RequestContext,
        req: SubmitReportRequest,
    ) -> Result<ReportedIssue, AppError> {
        if req.description.trim().is_empty() {
            return Err(AppError::validation(
                "A report requires a condition and a description",
            ));
        }

        let record = self
            .assets
            .find_by_id(req.record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        let report = self
            .reports
            .create(&CreateReportedIssue {
                asset_record_id: record.id,
                asset_id: record.asset_id.clone(),
                asset_name: record.asset_name.clone(),
                condition: req.condition,
                description: req.description.trim().to_string(),
                image: req.image,
                reported_by: ctx.identity.clone(),
            })
            .await?;

        info!(
            report_id = %report.id,
            record_id = %record.id,
            condition = %report.condition,
            reported_by = %ctx.identity,
            "Issue reported"
        );

        notify::emit(
            &self.events,
            AssetEvent::IssueReported {
                report_id: report.id,
                record_id: record.id,
                condition: report.condition.to_string(),
            },
        )
        .await;

        Ok(report)
    }

    /// Fetches all reports filed against one asset.
    pub async fn reports_for_asset(
        &self,
        record_id: AssetRecordId,
    ) -> Result<Vec<ReportedIssue>, AppError> {
        self.reports.find_by_record(record_id).await
    }

    /// Lists assets with their open-report projection attached.
    ///
    /// Recomputed from the current ledger on every call; the asset store is
    /// never written.
    pub async fn annotated_assets(
        &self,
        page: PageRequest,
    ) -> Result<PageResponse<AnnotatedAsset>, AppError> {
        let assets = self.assets.find_page(&page).await?;
        let issues = self.reports.find_all().await?;

        let annotated = annotate(assets.items, &issues);
        Ok(PageResponse::new(
            annotated,
            assets.page,
            assets.page_size,
            assets.total_items,
        ))
    }
}

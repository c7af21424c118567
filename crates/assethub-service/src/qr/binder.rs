//! QR identity binder — derives a scannable payload bound to an asset.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use image::Luma;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use qrcode::{EcLevel, QrCode};
use tracing::info;

use assethub_core::config::qr::QrConfig;
use assethub_core::error::AppError;
use assethub_core::events::AssetEvent;
use assethub_core::traits::sink::EventSink;
use assethub_core::types::id::AssetRecordId;
use assethub_entity::asset::model::AssetRecord;
use assethub_entity::store::AssetStore;

use crate::context::RequestContext;
use crate::notify;

/// Binds a scannable QR artifact to an asset record.
///
/// The payload encodes the user-facing asset code and its canonical URL at
/// error correction level H, so a physically worn label stays readable. The
/// rendered PNG is carried inline on the record as a data URL and is
/// size-guarded before anything is persisted.
#[derive(Debug, Clone)]
pub struct QrBinder {
    /// Live asset store.
    assets: Arc<dyn AssetStore>,
    /// Notification side channel.
    events: Arc<dyn EventSink>,
    /// Origin and size-guard settings.
    config: QrConfig,
}

impl QrBinder {
    /// Creates a new QR binder.
    pub fn new(assets: Arc<dyn AssetStore>, events: Arc<dyn EventSink>, config: QrConfig) -> Self {
        Self {
            assets,
            events,
            config,
        }
    }

    /// Materializes the QR artifact for a record and persists it.
    ///
    /// The canonical URL is the override when given, else the record's
    /// existing URL, else derived from the asset code. Artifacts above the
    /// hard ceiling are rejected outright; artifacts above the soft warning
    /// threshold are rejected unless the caller passes `accept_oversize`
    /// (the headless stand-in for an interactive confirmation). Nothing is
    /// persisted on rejection.
    pub async fn materialize(
        &self,
        ctx: &RequestContext,
        record_id: AssetRecordId,
        canonical_url_override: Option<String>,
        accept_oversize: bool,
    ) -> Result<AssetRecord, AppError> {
        let mut record = self
            .assets
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        let canonical_url = canonical_url_override
            .or_else(|| record.canonical_url.clone())
            .unwrap_or_else(|| self.default_canonical_url(&record.asset_id));

        let payload = serde_json::json!({
            "assetId": record.asset_id,
            "assetUrl": canonical_url,
        })
        .to_string();

        let png = self.render_png(&payload)?;
        let artifact_bytes = png.len();

        if artifact_bytes > self.config.abort_bytes {
            return Err(AppError::size_exceeded(format!(
                "QR artifact is {artifact_bytes} bytes, above the {} byte ceiling",
                self.config.abort_bytes
            )));
        }
        if artifact_bytes > self.config.warn_bytes && !accept_oversize {
            return Err(AppError::size_exceeded(format!(
                "QR artifact is {artifact_bytes} bytes, above the {} byte warning \
                 threshold; oversize acceptance is required to proceed",
                self.config.warn_bytes
            )));
        }

        record.generate_qr = true;
        record.qr_image = Some(format!("data:image/png;base64,{}", BASE64.encode(&png)));
        record.canonical_url = Some(canonical_url.clone());
        record.updated_by = ctx.identity.clone();
        record.updated_at = Utc::now();

        let stored = self.assets.replace(&record).await?;

        info!(
            record_id = %record_id,
            canonical_url = %canonical_url,
            artifact_bytes,
            "QR artifact materialized"
        );

        notify::emit(
            &self.events,
            AssetEvent::QrMaterialized {
                record_id,
                canonical_url,
                artifact_bytes,
            },
        )
        .await;

        Ok(stored)
    }

    /// Disables QR generation for a record and clears any stored artifact.
    pub async fn clear(
        &self,
        ctx: &RequestContext,
        record_id: AssetRecordId,
    ) -> Result<AssetRecord, AppError> {
        let mut record = self
            .assets
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        record.generate_qr = false;
        record.qr_image = None;
        record.updated_by = ctx.identity.clone();
        record.updated_at = Utc::now();

        let stored = self.assets.replace(&record).await?;

        info!(record_id = %record_id, "QR artifact cleared");

        notify::emit(&self.events, AssetEvent::QrCleared { record_id }).await;

        Ok(stored)
    }

    /// Derives the canonical URL for an asset code.
    fn default_canonical_url(&self, asset_id: &str) -> String {
        format!(
            "{}/dashboard/{}",
            self.config.origin.trim_end_matches('/'),
            utf8_percent_encode(asset_id, NON_ALPHANUMERIC)
        )
    }

    /// Renders the payload to a PNG at the configured target size.
    fn render_png(&self, payload: &str) -> Result<Vec<u8>, AppError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(|e| AppError::internal(format!("Failed to encode QR payload: {e}")))?;

        let size = self.config.render_size_px;
        let rendered = code
            .render::<Luma<u8>>()
            .min_dimensions(size, size)
            .build();

        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);
        rendered
            .write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| AppError::internal(format!("Failed to encode QR image: {e}")))?;

        Ok(buf)
    }
}

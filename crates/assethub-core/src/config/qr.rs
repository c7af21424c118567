//! QR identity binding configuration.

use serde::{Deserialize, Serialize};

/// Settings for QR code materialization and the artifact size guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    /// Origin used to build canonical asset URLs, without a trailing slash
    /// (e.g. `https://assets.example.org`).
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Target rendering size of the QR image in pixels (square).
    #[serde(default = "default_render_size")]
    pub render_size_px: u32,
    /// Soft warning threshold for the serialized artifact, in bytes.
    /// Artifacts above this size require explicit oversize acceptance.
    #[serde(default = "default_warn_bytes")]
    pub warn_bytes: usize,
    /// Hard ceiling for the serialized artifact, in bytes. Artifacts above
    /// this size are rejected unconditionally.
    #[serde(default = "default_abort_bytes")]
    pub abort_bytes: usize,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            render_size_px: default_render_size(),
            warn_bytes: default_warn_bytes(),
            abort_bytes: default_abort_bytes(),
        }
    }
}

fn default_origin() -> String {
    "https://assets.local".to_string()
}

fn default_render_size() -> u32 {
    250
}

fn default_warn_bytes() -> usize {
    700 * 1024
}

fn default_abort_bytes() -> usize {
    950 * 1024
}

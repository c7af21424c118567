//! Asset CRUD and the status transition engine.

pub mod service;

pub use service::{AssetService, EditAssetRequest};

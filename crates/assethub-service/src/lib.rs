//! # assethub-service
//!
//! Business logic services for AssetHub. Each service holds `Arc<dyn …>`
//! handles to the store contracts defined in `assethub-entity` (implemented
//! for PostgreSQL in `assethub-database`) and is consumed directly by the
//! surrounding application's event handlers.
//!
//! The services are:
//! - [`asset::AssetService`] — asset CRUD and the status transition engine.
//! - [`qr::QrBinder`] — canonical URL derivation and QR artifact binding.
//! - [`archive::ArchiveService`] — archive-before-remove deletion and the
//!   permanent-archive view.
//! - [`report::ReportService`] — the reported-issue ledger and its read-time
//!   join onto assets.
//! - [`report::AnalyticsService`] — derived status/category summaries.
//!
//! Every operation is a single asynchronous call that runs to completion or
//! failure; there is no background scheduling and no automatic retry.

pub mod archive;
pub mod asset;
pub mod context;
pub mod notify;
pub mod qr;
pub mod report;

#[cfg(test)]
mod testing;

pub use context::RequestContext;

//! Soft-delete/archival path and the permanent-archive view.

pub mod service;

pub use service::ArchiveService;

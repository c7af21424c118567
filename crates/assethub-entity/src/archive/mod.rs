//! Archived asset snapshot entity.

pub mod model;

pub use model::ArchivedAssetRecord;

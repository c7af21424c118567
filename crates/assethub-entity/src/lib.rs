//! # assethub-entity
//!
//! Domain entity models for AssetHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.
//!
//! The store contracts in [`store`] are defined here and implemented in
//! `assethub-database`, so the service layer can be exercised against
//! in-memory stores.

pub mod archive;
pub mod asset;
pub mod personnel;
pub mod report;
pub mod store;

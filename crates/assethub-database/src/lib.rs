//! # assethub-database
//!
//! PostgreSQL connection management and concrete store implementations for
//! all AssetHub collections.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

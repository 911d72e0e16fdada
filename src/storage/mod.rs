//! Storage layer for the stratstats tracker
//!
//! This module wraps the SQLite store, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Connection, table creation and additive column migration
//! - `queries`: Team and player CRUD
//! - `backup`: SQL dump and restore

pub mod backup;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::StatsDatabase;

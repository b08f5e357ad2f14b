//! Data access for the TV-show read API.
//!
//! This crate is the only place that speaks SQL. It provides:
//!
//! - `connect`: builds the fixed-size MySQL connection pool from settings.
//! - `probe`: the startup liveness check (acquire + ping).
//! - `ShowRepository`: the high-level query surface used by the handlers,
//!   returning explicitly typed rows rather than raw result sets.
//! - `DbError`: the specific error type returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{MAX_POOL_CONNECTIONS, connect, probe};
pub use error::DbError;
pub use repository::{ShowDetail, ShowRepository, ShowSummary};

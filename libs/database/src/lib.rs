//! Database library providing SeaORM connectors and utilities for the SQL todo store
//!
//! # Features
//!
//! - `sql` (default) - SQLite and PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::sql;
//! use migration::Migrator;
//!
//! let db = sql::connect("sqlite://./data/todos.db?mode=rwc").await?;
//! sql::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

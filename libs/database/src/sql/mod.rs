//! SQL database connector and utilities
//!
//! Connection management, migration running and health checks for the
//! SeaORM-backed stores. SQLite and PostgreSQL share the same code path;
//! the backend is picked from the URL scheme.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE_URL, SqlConfig};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    prepare_storage, run_migrations,
};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;

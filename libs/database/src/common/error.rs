/// Unified database error type for connection-level operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SQL-specific errors (SeaORM)
    #[cfg(feature = "sql")]
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Filesystem preparation for a file-backed store failed
    #[error("Storage path error: {0}")]
    StoragePath(#[from] std::io::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

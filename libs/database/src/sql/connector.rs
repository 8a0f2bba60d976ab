use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{DatabaseError, RetryConfig, retry, retry_with_backoff};

/// Connect to a SQL database with the default pool settings
///
/// # Example
/// ```ignore
/// use database::sql::connect;
///
/// let db = connect("sqlite://./data/todos.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqlConfig::new(database_url)).await
}

/// Connect using a SqlConfig
pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to SQL database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff on failure
///
/// For file-backed SQLite the parent directory is created first.
pub async fn connect_from_config_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DatabaseError> {
    prepare_storage(&config)?;
    let options = config.into_connect_options();

    let db = match retry_config {
        Some(policy) => retry_with_backoff(|| connect_with_options(options.clone()), policy).await,
        None => retry(|| connect_with_options(options.clone())).await,
    }
    .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    Ok(db)
}

/// Create the directory holding a SQLite database file, if needed.
pub fn prepare_storage(config: &SqlConfig) -> Result<(), DatabaseError> {
    let Some(file) = config.sqlite_file() else {
        return Ok(());
    };

    if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
        info!(path = %dir.display(), "Ensured SQLite data directory");
    }

    Ok(())
}

/// Run database migrations using the provided Migrator
///
/// Idempotent: already-applied migrations are skipped, so this is the
/// one-time schema creation step run at startup.
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::sql::run_migrations;
///
/// run_migrations::<Migrator>(&db, "todo_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DatabaseError> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

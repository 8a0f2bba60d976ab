use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::sql::SqlConfig;
use strum::{Display, EnumString};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Which repository backs the service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    /// SeaORM over `DATABASE_URL` (SQLite or PostgreSQL)
    #[default]
    Sql,
    /// Process-local map; contents are lost on exit
    Memory,
}

impl FromEnv for StorageBackend {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("TODO_STORAGE", "sql");
        raw.parse().map_err(|_| ConfigError::ParseError {
            key: "TODO_STORAGE".to_string(),
            details: format!("expected `sql` or `memory`, got `{}`", raw),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub storage: StorageBackend,
    pub database: SqlConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let storage = StorageBackend::from_env()?;
        let database = SqlConfig::from_env()?; // Defaults to a SQLite file under ./data

        // The pool recycles idle connections, and each one is a fresh empty database
        if storage == StorageBackend::Sql && database.is_sqlite_memory() {
            return Err(ConfigError::ParseError {
                key: "DATABASE_URL".to_string(),
                details: "in-memory SQLite is not a durable store; use TODO_STORAGE=memory"
                    .to_string(),
            }
            .into());
        }

        Ok(Self {
            app: app_info!(),
            server,
            storage,
            database,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(["TODO_STORAGE", "DATABASE_URL", "PORT", "APP_ENV"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.storage, StorageBackend::Sql);
            assert!(config.database.is_sqlite());
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.app.name, "todo_api");
        });
    }

    #[test]
    fn test_memory_storage_is_case_insensitive() {
        temp_env::with_var("TODO_STORAGE", Some("Memory"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.storage, StorageBackend::Memory);
        });
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        temp_env::with_var("TODO_STORAGE", Some("redis"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("TODO_STORAGE"));
        });
    }

    #[test]
    fn test_in_memory_sqlite_url_is_rejected() {
        temp_env::with_vars(
            [("TODO_STORAGE", None), ("DATABASE_URL", Some("sqlite::memory:"))],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("DATABASE_URL"));
                assert!(err.to_string().contains("TODO_STORAGE=memory"));
            },
        );
    }

    #[test]
    fn test_in_memory_sqlite_url_is_ignored_for_memory_storage() {
        temp_env::with_vars(
            [
                ("TODO_STORAGE", Some("memory")),
                ("DATABASE_URL", Some("sqlite::memory:")),
            ],
            || {
                assert_eq!(Config::from_env().unwrap().storage, StorageBackend::Memory);
            },
        );
    }

    #[test]
    fn test_storage_backend_display() {
        assert_eq!(StorageBackend::Sql.to_string(), "sql");
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }
}

//! Readiness handler backed by the configured store.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::sql::check_health;
use sea_orm::DatabaseConnection;

/// Readiness check: `SELECT 1` against the SQL store when one is configured.
pub async fn ready_handler(State(db): State<Option<DatabaseConnection>>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = match &db {
        Some(db) => vec![(
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) }),
        )],
        None => vec![("storage", Box::pin(async { Ok(()) }))],
    };

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check SQL database health
///
/// Executes `SELECT 1` against whichever backend the connection uses.
/// Backs the `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let backend = db.get_database_backend();
    debug!(?backend, "Running SQL health check");

    let stmt = Statement::from_string(backend, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("SQL health check passed");
    Ok(())
}

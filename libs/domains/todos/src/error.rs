use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid todo: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        TodoError::Internal(err.to_string())
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Invalid(errors) => AppError::ValidationError(errors),
            TodoError::NotFound(id) => AppError::NotFound(format!("Todo {} not found", id)),
            TodoError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

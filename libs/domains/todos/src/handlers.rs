use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{
    AppError, IdPath, JsonBody, QueryParams,
    errors::responses::{
        BadRequestIdResponse, BadRequestQueryResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTodo, Todo, TodoFilter, UpdateTodo};
use crate::repository::TodoRepository;
use crate::service::TodoService;

const TAG: &str = "todos";

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, get_todo, update_todo, delete_todo),
    components(
        schemas(Todo, CreateTodo, UpdateTodo, TodoFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(shared_service)
}

/// List todos, optionally filtered by completion state
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(TodoFilter),
    responses(
        (status = 200, description = "Todos in ascending id order", body = Vec<Todo>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    QueryParams(filter): QueryParams<TodoFilter>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = service.list_todos(filter).await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created successfully", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<Todo>, AppError> {
    let todo = service.get_todo(id).await?;
    Ok(Json(todo))
}

/// Replace a todo's title, description and completion state
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated successfully", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let todo = service.update_todo(id, input).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

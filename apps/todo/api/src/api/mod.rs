use axum::{Router, routing::get};
use domain_todos::{TodoRepository, TodoService, handlers};
use sea_orm::DatabaseConnection;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    Router::new().nest("/todos", handlers::router(service))
}

/// Creates a router with the /ready endpoint.
///
/// Merged next to the stateless app router from `create_router`. With the
/// in-memory store there is nothing to ping and the service is always ready.
pub fn ready_router(db: Option<DatabaseConnection>) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{create_router, health_router};
    use core_config::{app_info, server::ServerConfig};
    use domain_todos::{InMemoryTodoRepository, SqlTodoRepository};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app<R: TodoRepository + 'static>(
        service: TodoService<R>,
        db: Option<DatabaseConnection>,
    ) -> Router {
        create_router::<ApiDoc>(routes(service), &ServerConfig::default())
            .unwrap()
            .merge(health_router(app_info!()))
            .merge(ready_router(db))
    }

    fn memory_app() -> Router {
        app(TodoService::new(InMemoryTodoRepository::new()), None)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_todos_are_served_under_api_prefix() {
        let app = memory_app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/todos")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "title": "Buy milk" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;

        let response = app
            .oneshot(get(&format!("/api/todos/{}", created["id"])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["title"], "Buy milk");
    }

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let response = memory_app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "todo_api");
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let response = memory_app().oneshot(get("/ready")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["storage"], "connected");
    }

    #[tokio::test]
    async fn test_ready_pings_database() {
        let db = database::sql::connect("sqlite::memory:").await.unwrap();
        let service = TodoService::new(SqlTodoRepository::new(db.clone()));

        let response = app(service, Some(db.clone()))
            .oneshot(get("/ready"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["database"], "connected");
    }

    #[tokio::test]
    async fn test_ready_fails_when_database_is_closed() {
        let db = database::sql::connect("sqlite::memory:").await.unwrap();
        let handle = db.clone();
        db.close().await.unwrap();

        let response = ready_router(Some(handle)).oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_openapi_lists_todo_paths() {
        let response = memory_app()
            .oneshot(get("/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["paths"]["/todos"].is_object());
        assert!(body["paths"]["/todos/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = memory_app().oneshot(get("/api/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "NOT_FOUND");
    }
}

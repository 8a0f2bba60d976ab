use super::shutdown::shutdown_signal;
use crate::errors::handlers::{method_not_allowed, not_found, panic_response};
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, http::StatusCode, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// Sets up:
/// - Swagger UI at `/swagger-ui`, OpenAPI JSON at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - JSON 404 and 405 fallbacks
/// - Panic recovery (JSON 500), request timeout, request tracing,
///   security headers, CORS and response compression
///
/// Health endpoints (`/health`, `/ready`) are merged by the app afterwards
/// so probes bypass the API middleware.
///
/// # Errors
/// Returns `InvalidInput` if the configured CORS origins are empty or invalid.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/todos", handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &ServerConfig::default())?;
/// ```
pub fn create_router<T>(apis: Router, config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = create_cors_layer(&config.cors_allowed_origins)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        // gzip, br, deflate, zstd based on Accept-Encoding
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve the router until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained first. The cleanup future (closing the
/// store, flushing state) gets `server_config.shutdown_timeout` to finish
/// before it is abandoned.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    fn app() -> Router {
        let apis = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route("/boom", get(boom));
        create_router::<TestDoc>(apis, &ServerConfig::default()).unwrap()
    }

    async fn send(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = send("/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = send("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_json_500() {
        let response = send("/api/boom").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = send("/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_handler_times_out_with_408() {
        let config = ServerConfig {
            request_timeout: std::time::Duration::from_millis(20),
            ..ServerConfig::default()
        };
        let apis = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                "late"
            }),
        );

        let response = create_router::<TestDoc>(apis, &config)
            .unwrap()
            .oneshot(Request::get("/api/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_create_router_rejects_empty_cors() {
        let config = ServerConfig {
            cors_allowed_origins: vec![],
            ..ServerConfig::default()
        };
        assert!(create_router::<TestDoc>(Router::new(), &config).is_err());
    }
}

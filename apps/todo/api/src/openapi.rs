use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Create, list, update and delete todo items"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/todos", api = domain_todos::ApiDoc)
    )
)]
pub struct ApiDoc;

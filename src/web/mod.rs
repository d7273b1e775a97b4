pub mod dtos;
pub mod handlers;

use anyhow::Result;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::web::dtos::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analyze, crate::health::health_check),
    components(schemas(
        dtos::AnalyzeRequest,
        dtos::ErrorResponse,
        crate::extractor::VideoMetadata,
        crate::health::HealthResponse
    )),
    tags(
        (name = "analyze", description = "Video metadata analysis"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Assemble the application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .route("/healthz", get(crate::health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured origin (`*` allows any).
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    Ok(if origin == "*" {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origin.parse::<HeaderValue>()?)
    })
}

// One misbehaving request must never take the service down; a panic inside a
// handler becomes the same JSON error shape as everything else.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    tracing::error!("panic while handling request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to analyze video".to_string(),
        }),
    )
        .into_response()
}

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    extractor,
    normalizer::normalize,
    web::dtos::{AnalyzeRequest, ErrorResponse},
};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Analyze a video URL: normalize, serve from cache when possible, otherwise
/// fetch the page, extract metadata and store it.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analyze",
    request_body(
        content = AnalyzeRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Extracted metadata", body = crate::extractor::VideoMetadata),
        (status = 400, description = "Missing or unrecognized URL", body = ErrorResponse),
        (status = 502, description = "Upstream fetch failed", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn analyze(State(state): State<AppState>, Form(req): Form<AnalyzeRequest>) -> Response {
    if let Err(message) = req.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    let canonical = match normalize(&req.url) {
        Ok(canonical) => canonical,
        Err(e) => {
            info!(url = %req.url, error = %e, "rejected input url");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid YouTube URL".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Cache failures degrade to a miss; they must not fail the request.
    match state.cache.get(&canonical).await {
        Ok(Some(cached)) => {
            info!(url = %canonical, "cache hit");
            return (StatusCode::OK, Json(cached.metadata)).into_response();
        }
        Ok(None) => {}
        Err(e) => warn!(url = %canonical, error = %e, "cache lookup failed"),
    }

    let page = match state.fetcher.fetch_page(canonical.as_str()).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %canonical, error = %e, "upstream fetch failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Network error: {e}"),
                }),
            )
                .into_response();
        }
    };

    let metadata = extractor::extract(&page.body_utf8);

    if let Err(e) = state.cache.put(&canonical, metadata.clone()).await {
        warn!(url = %canonical, error = %e, "cache store failed");
    }

    (StatusCode::OK, Json(metadata)).into_response()
}

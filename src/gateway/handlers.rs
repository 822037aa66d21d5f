use axum::{
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};

use super::{AppState, StrainRequest};
use crate::titles::TitleStore;

pub(super) const MISSING_MESSAGE: &str = "input JSON must contain \"message\" element";
pub(super) const UNKNOWN_ERROR: &str = "Oops, Unknown error occurred. Please try again later.";

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// GET /health: always public
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "ok",
        "cached_titles": state.strainer.cache().len(),
        "free_fetch_slots": state.strainer.fetcher().available_slots(),
    });
    Json(body)
}

/// POST /strainers: extract mentions, emoticons and titled links
pub(super) async fn handle_strain(
    State(state): State<AppState>,
    body: Result<Json<StrainRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(error = %e, "rejected strain request body");
            return error_response(StatusCode::BAD_REQUEST, MISSING_MESSAGE);
        }
    };

    // Run on its own task so a panic anywhere in the pipeline becomes a 500.
    let strainer = state.strainer.clone();
    match tokio::spawn(async move { strainer.strain(&request.message).await }).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Unknown error occurred. Error: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_ERROR)
        }
    }
}

/// Fallback for unknown paths
pub(super) async fn handle_not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested URL was not found on the server.",
    )
}

/// Fallback for known paths hit with the wrong method
pub(super) async fn handle_method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "The method is not allowed for the requested URL.",
    )
}

/// Rewrite transport-layer rejections (body limit, request timeout) into the
/// same JSON error shape the handlers produce.
pub(super) async fn json_transport_errors(response: Response) -> Response {
    let message = match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => "The request body is too large.",
        StatusCode::REQUEST_TIMEOUT => "The request timed out.",
        _ => return response,
    };

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    error_response(response.status(), message)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ApiResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback; also the response for path ids that do not
/// match the expected format (a route-constraint miss).
pub async fn not_found() -> Response {
    let body = Json(ApiResponse::<serde_json::Value>::failure(
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

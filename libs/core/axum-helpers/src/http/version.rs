//! API version negotiation middleware.

use axum::{
    extract::Request,
    http::{HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ApiResponse;

/// Version assumed when the client does not specify one.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Query parameter and request header carrying the requested version.
pub const API_VERSION_PARAM: &str = "api-version";

/// Versions this service can serve.
const SUPPORTED_VERSIONS: &[&str] = &["1", "1.0"];

/// Middleware that negotiates the API version for a request.
///
/// The requested version is read from the `api-version` query parameter
/// first, then the `api-version` header; when neither is present the
/// default version is assumed. Requests for an unsupported version are
/// rejected with BAD_REQUEST before reaching the handler. Every response
/// reports the supported versions in an `api-supported-versions` header.
pub async fn api_version(request: Request, next: Next) -> Response {
    let requested = version_from_query(request.uri().query()).or_else(|| {
        request
            .headers()
            .get(API_VERSION_PARAM)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    });

    let version = requested.unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

    if !SUPPORTED_VERSIONS.contains(&version.as_str()) {
        tracing::info!(version = %version, "Rejected unsupported API version");
        let body = Json(ApiResponse::<serde_json::Value>::failure(format!(
            "The HTTP resource that matches the request URI does not support the API version '{}'",
            version
        )));
        return (StatusCode::BAD_REQUEST, body).into_response();
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static("api-supported-versions"),
        DEFAULT_API_VERSION.parse().unwrap(),
    );

    response
}

fn version_from_query(query: Option<&str>) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == API_VERSION_PARAM && !value.is_empty()).then(|| value.to_string())
    })
}

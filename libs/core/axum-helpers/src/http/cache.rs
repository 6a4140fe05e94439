//! Response cache-control middleware.

use axum::{
    extract::Request,
    http::{header, Method},
    middleware::Next,
    response::Response,
};

/// How long clients and shared caches may reuse a cached GET response.
const CACHE_MAX_AGE_SECS: u32 = 60;

/// Middleware that marks successful GET responses as cacheable.
///
/// Adds `Cache-Control: public, max-age=60` to 2xx GET responses that do
/// not already carry a Cache-Control header. Write responses are never
/// marked cacheable.
pub async fn response_caching(request: Request, next: Next) -> Response {
    let is_get = request.method() == Method::GET;
    let mut response = next.run(request).await;

    if is_get
        && response.status().is_success()
        && !response.headers().contains_key(header::CACHE_CONTROL)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            format!("public, max-age={}", CACHE_MAX_AGE_SECS)
                .parse()
                .unwrap(),
        );
    }

    response
}

//! Keyed rate-limiting middleware.

use axum::{
    extract::{Request, State},
    http::{header, HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::keyed::DefaultKeyedStateStore,
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::response::ApiResponse;

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
const X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");
const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// How requests are grouped into rate-limit buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitStrategy {
    /// One bucket per client IP address
    IpAddress,
    /// One bucket per authenticated user (Authorization header)
    PerUser,
    /// One bucket per API key (x-api-key header)
    PerApiKey,
}

impl Default for RateLimitStrategy {
    fn default() -> Self {
        Self::IpAddress
    }
}

impl FromStr for RateLimitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ip" | "ip-address" | "ipaddress" => Ok(Self::IpAddress),
            "user" | "per-user" | "peruser" => Ok(Self::PerUser),
            "api-key" | "apikey" | "per-api-key" => Ok(Self::PerApiKey),
            other => Err(format!("unknown rate limit strategy '{}'", other)),
        }
    }
}

/// In-memory keyed rate limiter backed by `governor`.
///
/// Requests are bucketed by the configured [`RateLimitStrategy`]; each
/// bucket is allowed `per_minute` requests per minute. Apply with
/// `axum::middleware::from_fn_with_state` on the routes to protect:
///
/// ```ignore
/// use axum::middleware;
/// use axum_helpers::http::{rate_limit, KeyedRateLimiter, RateLimitStrategy};
/// use std::sync::Arc;
///
/// let limiter = Arc::new(KeyedRateLimiter::new(RateLimitStrategy::IpAddress, 60));
/// let router = router.layer(middleware::from_fn_with_state(limiter, rate_limit));
/// ```
pub struct KeyedRateLimiter {
    strategy: RateLimitStrategy,
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    clock: DefaultClock,
}

impl KeyedRateLimiter {
    /// Create a limiter allowing `per_minute` requests per key per minute.
    pub fn new(strategy: RateLimitStrategy, per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));
        let clock = DefaultClock::default();
        let limiter = RateLimiter::new(quota, DefaultKeyedStateStore::default(), clock.clone());

        Self {
            strategy,
            limiter,
            clock,
        }
    }

    /// Check the request against its bucket.
    ///
    /// Returns the time to wait before the next permitted request when the
    /// bucket is exhausted.
    pub fn check(&self, request: &Request) -> Result<(), Duration> {
        let key = self.key_for(request);
        self.limiter
            .check_key(&key)
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()))
    }

    /// Derive the bucket key for a request per the configured strategy.
    ///
    /// Requests missing the relevant header share an "anonymous" bucket.
    fn key_for(&self, request: &Request) -> String {
        let headers = request.headers();

        let value = match self.strategy {
            RateLimitStrategy::IpAddress => headers
                .get(X_FORWARDED_FOR)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .or_else(|| headers.get(X_REAL_IP).and_then(|v| v.to_str().ok())),
            RateLimitStrategy::PerUser => headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            RateLimitStrategy::PerApiKey => {
                headers.get(X_API_KEY).and_then(|v| v.to_str().ok())
            }
        };

        value.unwrap_or("anonymous").to_string()
    }
}

/// Rate-limiting middleware.
///
/// Over-quota requests receive 429 with the failure envelope and a
/// Retry-After header; everything else passes through untouched.
pub async fn rate_limit(
    State(limiter): State<Arc<KeyedRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    match limiter.check(&request) {
        Ok(()) => next.run(request).await,
        Err(wait) => {
            tracing::info!(wait_secs = wait.as_secs(), "Request rate limited");
            let body = Json(ApiResponse::<serde_json::Value>::failure(
                "API calls quota exceeded, please try again later",
            ));
            let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
            response.headers_mut().insert(
                header::RETRY_AFTER,
                wait.as_secs().max(1).into(),
            );
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_header(name: &'static str, value: &str) -> Request {
        axum::http::Request::builder()
            .header(name, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "ip".parse::<RateLimitStrategy>().unwrap(),
            RateLimitStrategy::IpAddress
        );
        assert_eq!(
            "per-user".parse::<RateLimitStrategy>().unwrap(),
            RateLimitStrategy::PerUser
        );
        assert_eq!(
            "api-key".parse::<RateLimitStrategy>().unwrap(),
            RateLimitStrategy::PerApiKey
        );
        assert!("bogus".parse::<RateLimitStrategy>().is_err());
    }

    #[test]
    fn test_key_per_api_key() {
        let limiter = KeyedRateLimiter::new(RateLimitStrategy::PerApiKey, 10);
        let request = request_with_header("x-api-key", "key-1");
        assert_eq!(limiter.key_for(&request), "key-1");
    }

    #[test]
    fn test_key_falls_back_to_anonymous() {
        let limiter = KeyedRateLimiter::new(RateLimitStrategy::IpAddress, 10);
        let request = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(limiter.key_for(&request), "anonymous");
    }

    #[test]
    fn test_ip_key_uses_first_forwarded_address() {
        let limiter = KeyedRateLimiter::new(RateLimitStrategy::IpAddress, 10);
        let request = request_with_header("x-forwarded-for", "10.0.0.1, 10.0.0.2");
        assert_eq!(limiter.key_for(&request), "10.0.0.1");
    }

    #[test]
    fn test_quota_exhaustion_per_key() {
        let limiter = KeyedRateLimiter::new(RateLimitStrategy::PerApiKey, 2);
        let request = request_with_header("x-api-key", "burst");

        assert!(limiter.check(&request).is_ok());
        assert!(limiter.check(&request).is_ok());
        assert!(limiter.check(&request).is_err());

        // A different key still has its full quota
        let other = request_with_header("x-api-key", "other");
        assert!(limiter.check(&other).is_ok());
    }
}

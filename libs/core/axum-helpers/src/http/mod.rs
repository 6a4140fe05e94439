//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//! - API version negotiation
//! - Response cache headers
//! - Rate limiting
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_env, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer_from_env()?);
//! ```

pub mod cache;
pub mod cors;
pub mod rate_limit;
pub mod security;
pub mod version;

// Re-export commonly used functions
pub use cache::response_caching;
pub use cors::{cors_layer_from_env, create_permissive_cors_layer};
pub use rate_limit::{rate_limit, KeyedRateLimiter, RateLimitStrategy};
pub use security::security_headers;
pub use version::{api_version, DEFAULT_API_VERSION};

//! Catalog API routes
//!
//! Wires the catalog domain to HTTP routes and applies the per-route
//! middleware stack: version negotiation, response cache headers, and
//! rate limiting per the configured strategy.

use axum::{middleware, Router};
use axum_helpers::http::{api_version, rate_limit, response_caching, KeyedRateLimiter};
use domain_catalog::{handlers, CatalogService, MongoProductRepository};
use std::sync::Arc;

use crate::state::AppState;

/// Create the catalog router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository over the configured collection
    let repository = MongoProductRepository::new(&state.db, &state.config.catalog.collection);

    // Create the service
    let service = CatalogService::new(repository);

    let limiter = Arc::new(KeyedRateLimiter::new(
        state.config.rate_limit.strategy,
        state.config.rate_limit.per_minute,
    ));

    // Domain router plus the catalog middleware stack
    handlers::router(service)
        .layer(middleware::from_fn(api_version))
        .layer(middleware::from_fn(response_caching))
        .layer(middleware::from_fn_with_state(limiter, rate_limit))
}

//! Envelope-shaped fallback handlers and reusable OpenAPI response types.

pub mod handlers;
pub mod responses;

pub use handlers::not_found;

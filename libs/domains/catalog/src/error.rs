use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::ApiResponse;
use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product with id: {0}, not found")]
    NotFound(String),

    #[error("Product, {0} not found")]
    DeleteTargetNotFound(String),

    #[error("Product {0} does not exist")]
    UnknownName(String),

    #[error("Product {0} already exists")]
    AlreadyExists(String),

    #[error("Error updating product {0}, please try again later")]
    UpdateFailed(String),

    #[error("Error deleting product {0}, please try again later")]
    DeleteFailed(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Render failures as the response envelope with the endpoint status policy.
///
/// Store-level detail never reaches the client; it is logged and replaced
/// with a generic message.
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_)
            | CatalogError::DeleteTargetNotFound(_)
            | CatalogError::UnknownName(_) => StatusCode::NOT_FOUND,
            CatalogError::AlreadyExists(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::UpdateFailed(_)
            | CatalogError::DeleteFailed(_)
            | CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            CatalogError::Database(detail) => {
                tracing::error!("Database error: {}", detail);
                "Something went wrong, please try again later".to_string()
            }
            CatalogError::UpdateFailed(_) | CatalogError::DeleteFailed(_) => {
                tracing::error!("{}", self);
                self.to_string()
            }
            other => {
                tracing::info!("{}", other);
                other.to_string()
            }
        };

        (status, Json(ApiResponse::<Product>::failure(message))).into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

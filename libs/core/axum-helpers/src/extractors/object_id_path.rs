//! Document-id path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::errors::handlers::not_found;

/// Extractor for 24-character hex document ids in path parameters.
///
/// Ids that are not exactly 24 hex characters are rejected with the same
/// 404 envelope a non-matching route produces, so a malformed id behaves
/// like a route-constraint miss rather than reaching the handler.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct ObjectIdPath(pub String);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        if is_object_id(&id) {
            Ok(ObjectIdPath(id))
        } else {
            Err(not_found().await)
        }
    }
}

fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_24_hex_chars() {
        assert!(is_object_id("602d2149e773f2a3990b47f5"));
        assert!(is_object_id("ABCDEF0123456789abcdef01"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_object_id("602d2149e773f2a3990b47f"));
        assert!(!is_object_id("602d2149e773f2a3990b47f55"));
        assert!(!is_object_id(""));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_object_id("602d2149e773f2a3990b47zz"));
        assert!(!is_object_id("not-a-valid-document-id!"));
    }
}

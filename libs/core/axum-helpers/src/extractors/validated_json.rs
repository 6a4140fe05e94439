//! JSON extractor with automatic validation using the validator crate.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait
/// before the handler runs. Rejected bodies never reach handler logic.
///
/// The rejection body lists the first error message of each failing field:
///
/// ```json
/// {
///   "status": false,
///   "message": [{ "Error": "'Name' must not be empty." }],
///   "data": {}
/// }
/// ```
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating: {}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| validation_failure(vec![json!({ "Error": e.body_text() })]))?;

        data.validate().map_err(|e| {
            let errors: Vec<serde_json::Value> = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let message = errors
                        .iter()
                        .next()
                        .and_then(|err| err.message.as_ref())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("'{}' is invalid", field));
                    json!({ "Error": message })
                })
                .collect();

            validation_failure(errors)
        })?;

        Ok(ValidatedJson(data))
    }
}

fn validation_failure(errors: Vec<serde_json::Value>) -> Response {
    let body = json!({
        "status": false,
        "message": errors,
        "data": {},
    });

    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}

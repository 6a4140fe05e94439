//! Reusable OpenAPI response types for consistent API documentation.

#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

use crate::response::ApiResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": false,
        "data": null,
        "message": "Something went wrong, please try again later"
    })
)]
pub struct InternalServerErrorResponse(pub ApiResponse<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": false,
        "message": [{ "Error": "'Name' must not be empty." }],
        "data": {}
    })
)]
pub struct BadRequestValidationResponse(pub ApiResponse<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": false,
        "data": null,
        "message": "The requested resource was not found"
    })
)]
pub struct NotFoundResponse(pub ApiResponse<serde_json::Value>);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Resource already exists",
    content_type = "application/json",
    example = json!({
        "status": false,
        "data": null,
        "message": "Product IPhone X already exists"
    })
)]
pub struct UnprocessableEntityResponse(pub ApiResponse<serde_json::Value>);

//! Generic response envelope shared by every API endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform wrapper around every API response, success or failure.
///
/// The wire shape is always `{"status": bool, "data": T | null,
/// "message": string | null}`; `data` and `message` are serialized even
/// when absent so clients can rely on the full envelope.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": true,
///   "data": { "name": "IPhone X" },
///   "message": "Product data found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully
    pub status: bool,
    /// The response payload, if any
    pub data: Option<T>,
    /// Human-readable outcome message, if any
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying data and no message.
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: None,
        }
    }

    /// Success envelope carrying both data and a message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Success envelope with a message but no data (e.g. update/delete).
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Failure envelope with a message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_null_message() {
        let envelope = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], serde_json::Value::Null);
    }

    #[test]
    fn test_failure_serializes_null_data() {
        let envelope = ApiResponse::<String>::failure("Product X does not exist");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["message"], "Product X does not exist");
    }

    #[test]
    fn test_message_only_has_no_data() {
        let envelope = ApiResponse::<u32>::message_only("done");
        assert!(envelope.status);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("done"));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by create/update/delete endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Message the server wants shown to the user, if any
    pub fn reported_message(&self) -> Option<&str> {
        let nonblank = |m: &&str| !m.trim().is_empty();
        self.message
            .as_deref()
            .filter(nonblank)
            .or_else(|| self.error.as_deref().filter(nonblank))
    }
}

/// Rows of a list endpoint. Accepts a bare array or a `{ "data": [...] }`
/// envelope; anything else is an empty list.
pub fn rows_from_json(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reported_message_prefers_message_then_error() {
        let resp: ApiResponse =
            serde_json::from_value(json!({"success": false, "error": "Slug taken"})).unwrap();
        assert_eq!(resp.reported_message(), Some("Slug taken"));

        let resp: ApiResponse = serde_json::from_value(
            json!({"success": false, "message": "Bad input", "error": "ignored"}),
        )
        .unwrap();
        assert_eq!(resp.reported_message(), Some("Bad input"));

        assert_eq!(ApiResponse::failed("  ").reported_message(), None);
    }

    #[test]
    fn test_blank_message_falls_through_to_error() {
        let resp: ApiResponse = serde_json::from_value(
            json!({"success": false, "message": "", "error": "Slug taken"}),
        )
        .unwrap();
        assert_eq!(resp.reported_message(), Some("Slug taken"));

        let resp: ApiResponse =
            serde_json::from_value(json!({"success": false, "message": " ", "error": ""}))
                .unwrap();
        assert_eq!(resp.reported_message(), None);
    }

    #[test]
    fn test_missing_success_defaults_to_false() {
        let resp: ApiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!resp.success);
    }

    #[test]
    fn test_rows_from_json_accepts_both_shapes() {
        assert_eq!(rows_from_json(json!([{"id": 1}, {"id": 2}])).len(), 2);
        assert_eq!(rows_from_json(json!({"data": [{"id": 1}]})).len(), 1);
        assert!(rows_from_json(json!({"success": true})).is_empty());
        assert!(rows_from_json(json!("oops")).is_empty());
    }
}

//! Wire types for the Jumble API

use jumble_core::Value;
use serde::{Deserialize, Serialize};

/// Fixed description attached to every generated payload
pub const RESPONSE_DESCRIPTION: &str = "Complex, nested, random data array for JS/TS practice.";

/// Landing page served at `/`
pub const INDEX_HTML: &str = "<h1>Complex Random Data API</h1><p>Visit <a href=\"/api/complex-array\">/api/complex-array</a> to generate data.</p>";

/// Body of `GET /api/complex-array`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexArrayResponse {
    pub description: String,
    pub parameters: ResponseParameters,
    pub data: Vec<Value>,
}

/// Effective parameters after defaults and clamping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseParameters {
    pub size: usize,
    pub max_depth: i64,
    /// ISO-8601 UTC, millisecond precision
    pub generated_timestamp: String,
}

/// Error body, e.g. `{"error":"Not Found"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameters_use_camel_case() {
        let params = ResponseParameters {
            size: 3,
            max_depth: -1,
            generated_timestamp: "2024-05-01T12:00:00.000Z".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "size": 3, "maxDepth": -1, "generatedTimestamp": "2024-05-01T12:00:00.000Z" })
        );
    }

    #[test]
    fn test_response_field_order() {
        let response = ComplexArrayResponse {
            description: RESPONSE_DESCRIPTION.to_string(),
            parameters: ResponseParameters {
                size: 1,
                max_depth: 0,
                generated_timestamp: "t".to_string(),
            },
            data: vec![Value::Boolean(true)],
        };
        let text = serde_json::to_string(&response).unwrap();
        let description = text.find("\"description\"").unwrap();
        let parameters = text.find("\"parameters\"").unwrap();
        let data = text.find("\"data\"").unwrap();
        assert!(description < parameters && parameters < data);
        assert!(text.ends_with("\"data\":[true]}"));
    }
}

//! Request and response types for the REST API.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default number of nodes returned by `/nodes/highly-connected`.
pub const DEFAULT_HIGHLY_CONNECTED_LIMIT: i64 = 10;

/// JSON error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Query parameters for `/nodes/highly-connected`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HighlyConnectedParams {
    /// Maximum number of nodes to return. Zero or negative yields an empty list;
    /// an empty value (`?limit=`) means the default.
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[param(default = 10)]
    pub limit: i64,
}

impl HighlyConnectedParams {
    /// Limit clamped to a usable length; non-positive values become 0.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }
}

fn default_limit() -> i64 {
    DEFAULT_HIGHLY_CONNECTED_LIMIT
}

/// Query values arrive as strings; blank falls back to the default, anything
/// else must be an integer.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_HIGHLY_CONNECTED_LIMIT);
    }
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid limit: {raw}")))
}

/// Query parameters for `/nodes/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Keyword matched case-insensitively against title, group and ASIN.
    pub keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit_clamps_negative() {
        let params = HighlyConnectedParams { limit: -5 };
        assert_eq!(params.effective_limit(), 0);
        let params = HighlyConnectedParams { limit: 25 };
        assert_eq!(params.effective_limit(), 25);
    }

    #[test]
    fn test_limit_defaults_to_ten() {
        let params: HighlyConnectedParams = serde_json::from_str("{}").expect("parse");
        assert_eq!(params.limit, DEFAULT_HIGHLY_CONNECTED_LIMIT);
    }

    #[test]
    fn test_blank_limit_uses_default() {
        let params: HighlyConnectedParams =
            serde_json::from_str(r#"{"limit":""}"#).expect("parse");
        assert_eq!(params.limit, DEFAULT_HIGHLY_CONNECTED_LIMIT);

        let params: HighlyConnectedParams =
            serde_json::from_str(r#"{"limit":"5"}"#).expect("parse");
        assert_eq!(params.limit, 5);

        let err = serde_json::from_str::<HighlyConnectedParams>(r#"{"limit":"ten"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            error: "Node 7 not found".to_string(),
        };
        let json = serde_json::to_string(&body).expect("should serialize");
        assert_eq!(json, r#"{"error":"Node 7 not found"}"#);
    }
}

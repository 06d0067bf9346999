//! Response types for the Tax Calculation Engine API.
//!
//! The calculation core defines no error responses: every type-coercible
//! request produces a result. The only error body the API returns is for
//! query strings the transport layer itself cannot coerce.

use serde::{Deserialize, Serialize};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed query error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::with_details(
            "MALFORMED_QUERY",
            message,
            "Query parameters must be numeric where a number is expected",
        )
    }
}

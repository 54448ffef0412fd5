//! JSON error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Error body: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn malformatted_id() -> Self {
        Self::new("malformatted id")
    }

    pub fn unknown_endpoint() -> Self {
        Self::new("unknown endpoint")
    }

    pub fn internal_error() -> Self {
        Self::new("Something went wrong!")
    }
}

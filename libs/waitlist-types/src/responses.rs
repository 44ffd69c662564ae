use serde::{Deserialize, Serialize};

use crate::messages::JOINED;

/// Body of a 201 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinWaitlistResponse {
    pub success: bool,
    pub message: String,
}

impl JoinWaitlistResponse {
    pub fn joined() -> Self {
        Self {
            success: true,
            message: JOINED.to_string(),
        }
    }
}

/// Body of every error response: `{ "error": "..." }`.
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
}

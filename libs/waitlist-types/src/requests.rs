use serde::{Deserialize, Serialize};

/// Body of `POST /functions/v1/sync-to-sheets`.
///
/// `email` is optional on the wire so a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinWaitlistRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl JoinWaitlistRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

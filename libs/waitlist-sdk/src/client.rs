//! Waitlist client implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use waitlist_types::{GENERIC_CLIENT_ERROR, JOINED, JoinWaitlistRequest};

use crate::error::WaitlistError;

/// Default request timeout for a join call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistClientConfig {
    /// Full URL of the join endpoint (e.g., "https://api.example.com/functions/v1/sync-to-sheets")
    pub endpoint: String,

    /// Public key sent as `Authorization: Bearer <key>` when set
    pub anon_key: Option<String>,

    /// Request timeout (default: 15s)
    pub timeout: Option<Duration>,
}

/// What the server answered to a join call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx. `message` is the server's message or the default success text.
    Joined { message: String },
    /// Any other status. `message` is the server's `error` or a generic fallback.
    Rejected { status: u16, message: String },
}

/// Anything that can submit an email to the waitlist.
///
/// Implemented by [`WaitlistClient`]; [`crate::SubmissionForm`] only depends on this
/// trait so callers can swap the transport.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, email: &str) -> Result<SubmitOutcome, WaitlistError>;
}

/// HTTP client for the waitlist API.
pub struct WaitlistClient {
    config: WaitlistClientConfig,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new waitlist client.
    ///
    /// Fails if the endpoint is empty or the HTTP client cannot be built.
    pub fn new(config: WaitlistClientConfig) -> Result<Self, WaitlistError> {
        if config.endpoint.trim().is_empty() {
            return Err(WaitlistError::Config("endpoint is required".into()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Submit one email to the join endpoint.
    ///
    /// Server-side rejections come back as `Ok(SubmitOutcome::Rejected)`. Only
    /// transport failures and unreadable bodies are errors.
    pub async fn join(&self, email: &str) -> Result<SubmitOutcome, WaitlistError> {
        let mut request = self
            .http_client
            .post(&self.config.endpoint)
            .json(&JoinWaitlistRequest::new(email));

        if let Some(key) = &self.config.anon_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        // Success and error bodies share this loose shape.
        #[derive(Deserialize)]
        struct ApiBody {
            message: Option<String>,
            error: Option<String>,
        }

        let body: ApiBody = response.json().await?;

        if status.is_success() {
            Ok(SubmitOutcome::Joined {
                message: body.message.unwrap_or_else(|| JOINED.to_string()),
            })
        } else {
            tracing::debug!(status = status.as_u16(), error = ?body.error, "Join rejected");
            Ok(SubmitOutcome::Rejected {
                status: status.as_u16(),
                message: body.error.unwrap_or_else(|| GENERIC_CLIENT_ERROR.to_string()),
            })
        }
    }
}

#[async_trait]
impl Submitter for WaitlistClient {
    async fn submit(&self, email: &str) -> Result<SubmitOutcome, WaitlistError> {
        self.join(email).await
    }
}

//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound clients should be built here rather than through
//! `reqwest::Client::new()`, so a slow upstream can never hold a request open.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build an HTTP client whose total request time is capped at `request_timeout`.
///
/// The connect timeout never exceeds the request timeout.
pub fn try_build_client(request_timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(request_timeout))
        .timeout(request_timeout)
        .build()
}

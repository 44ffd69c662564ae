use axum::http::{HeaderMap, header::USER_AGENT};

use crate::application::use_cases::waitlist::ClientMetadata;

/// Read the caller's address and user agent from request headers.
///
/// `x-forwarded-for` wins over `x-real-ip`; the header value is recorded as
/// sent, proxy chain included. Missing or non-UTF-8 values become empty strings.
pub fn client_metadata(headers: &HeaderMap) -> ClientMetadata {
    let ip_address = header_str(headers, "x-forwarded-for")
        .or_else(|| header_str(headers, "x-real-ip"))
        .unwrap_or_default();
    let user_agent = header_str(headers, USER_AGENT.as_str()).unwrap_or_default();

    ClientMetadata {
        ip_address,
        user_agent,
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

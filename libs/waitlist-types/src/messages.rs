/// Returned with 201 once the entry is stored.
pub const JOINED: &str = "Successfully joined the waitlist!";

/// Returned with 400 when the email is missing or has no `@`.
pub const INVALID_EMAIL: &str = "Valid email is required";

/// Returned with 409 when the email is already on the list.
pub const DUPLICATE_EMAIL: &str = "Email already registered";

/// Returned with 500. Never carries store details.
pub const INTERNAL_ERROR: &str = "An error occurred. Please try again.";

/// Client-side fallback when an error response has no `error` field.
pub const GENERIC_CLIENT_ERROR: &str = "Something went wrong. Please try again.";

/// Client-side message for transport failures (unreachable host, unreadable body).
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

//! Shared wire types for the waitlist API.
//!
//! This crate provides:
//! - The join request/response bodies (`JoinWaitlistRequest`, `JoinWaitlistResponse`)
//! - The error body returned on every non-2xx response (`ErrorResponse`)
//! - The canonical user-facing messages used by both the server and the client

mod messages;
mod requests;
mod responses;

pub use messages::{
    DUPLICATE_EMAIL, GENERIC_CLIENT_ERROR, INTERNAL_ERROR, INVALID_EMAIL, JOINED, NETWORK_ERROR,
};
pub use requests::JoinWaitlistRequest;
pub use responses::{ErrorResponse, JoinWaitlistResponse};

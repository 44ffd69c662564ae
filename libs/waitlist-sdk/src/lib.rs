//! Rust client for the waitlist API.
//!
//! Two layers:
//!
//! - [`WaitlistClient`] performs one `POST` to the join endpoint and reports what
//!   the server said.
//! - [`SubmissionForm`] holds the state a signup form needs (field value,
//!   loading flag, last message) and turns a submission into a user-facing
//!   message.
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_sdk::{SubmissionForm, WaitlistClient, WaitlistClientConfig};
//!
//! let client = WaitlistClient::new(WaitlistClientConfig {
//!     endpoint: "https://api.example.com/functions/v1/sync-to-sheets".to_string(),
//!     anon_key: None,
//!     timeout: None,
//! })?;
//!
//! let mut form = SubmissionForm::new();
//! form.set_email("someone@example.com");
//! match form.submit(&client).await {
//!     Ok(message) => println!("{message}"),
//!     Err(message) => eprintln!("{message}"),
//! }
//! ```

mod client;
mod error;
mod form;

pub use client::{SubmitOutcome, Submitter, WaitlistClient, WaitlistClientConfig};
pub use error::WaitlistError;
pub use form::{MessageKind, SubmissionForm};

pub use waitlist_types::{ErrorResponse, JoinWaitlistRequest, JoinWaitlistResponse};

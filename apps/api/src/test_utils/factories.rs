//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    application::use_cases::waitlist::ClientMetadata,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Fixed timestamp for deterministic tests.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Request metadata as a proxied browser would send it.
pub fn create_test_metadata() -> ClientMetadata {
    ClientMetadata {
        ip_address: "203.0.113.7".to_string(),
        user_agent: "test-agent/1.0".to_string(),
    }
}

/// Create a stored waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        ip_address: Some(String::new()),
        user_agent: Some(String::new()),
        synced_to_sheets: false,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

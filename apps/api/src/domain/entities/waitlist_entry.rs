use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One stored waitlist signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub synced_to_sheets: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the handler on insert. `id` and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub ip_address: String,
    pub user_agent: String,
}

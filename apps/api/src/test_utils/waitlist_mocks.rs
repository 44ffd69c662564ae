//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        ports::sheet_exporter::SheetExporter, use_cases::waitlist::WaitlistRepoTrait,
    },
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// Waitlist repository
// ============================================================================

/// In-memory implementation of WaitlistRepoTrait for testing.
///
/// Enforces email uniqueness under a single lock, like the table's UNIQUE
/// constraint, and counts calls so tests can assert the store was not touched.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<Uuid, WaitlistEntry>>,
    insert_calls: AtomicUsize,
    mark_synced_calls: AtomicUsize,
    fail_inserts: bool,
    fail_mark_synced: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let map: HashMap<Uuid, WaitlistEntry> = entries.into_iter().map(|e| (e.id, e)).collect();
        Self {
            entries: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Every insert fails with a database error.
    pub fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    /// Inserts succeed, flagging an entry as synced fails.
    pub fn failing_mark_synced() -> Self {
        Self {
            fail_mark_synced: true,
            ..Self::default()
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().values().cloned().collect()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn mark_synced_calls(&self) -> usize {
        self.mark_synced_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepoTrait for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_inserts {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let mut entries = self.entries.lock().unwrap();

        if entries.values().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEmail);
        }

        let stored = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            ip_address: Some(entry.ip_address.clone()),
            user_agent: Some(entry.user_agent.clone()),
            synced_to_sheets: false,
            created_at: Utc::now(),
        };

        entries.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn mark_synced(&self, id: Uuid) -> AppResult<()> {
        self.mark_synced_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_mark_synced {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .get_mut(&id)
            .ok_or_else(|| AppError::Internal(format!("waitlist entry {id} not found")))?;
        entry.synced_to_sheets = true;
        Ok(())
    }
}

// ============================================================================
// Sheet exporters
// ============================================================================

/// Exporter that accepts every row and remembers it.
#[derive(Default)]
pub struct RecordingSheetExporter {
    pub rows: Mutex<Vec<(String, DateTime<Utc>)>>,
}

impl RecordingSheetExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exported_emails(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|(email, _)| email.clone())
            .collect()
    }
}

#[async_trait]
impl SheetExporter for RecordingSheetExporter {
    async fn export(&self, email: &str, timestamp: DateTime<Utc>) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .push((email.to_string(), timestamp));
        Ok(())
    }
}

/// Exporter standing in for an unreachable endpoint.
pub struct FailingSheetExporter;

#[async_trait]
impl SheetExporter for FailingSheetExporter {
    async fn export(&self, _email: &str, _timestamp: DateTime<Utc>) -> AppResult<()> {
        Err(AppError::Export("connection refused".into()))
    }
}

/// Exporter that answers only after `delay`.
pub struct SlowSheetExporter {
    delay: Duration,
}

impl SlowSheetExporter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SheetExporter for SlowSheetExporter {
    async fn export(&self, _email: &str, _timestamp: DateTime<Utc>) -> AppResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_entry;

    #[tokio::test]
    async fn seeded_email_is_treated_as_duplicate() {
        let repo = InMemoryWaitlistRepo::with_entries(vec![create_test_entry(|e| {
            e.email = "seeded@example.com".to_string()
        })]);

        let result = repo
            .insert(&NewWaitlistEntry {
                email: "seeded@example.com".to_string(),
                ip_address: String::new(),
                user_agent: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
        assert_eq!(repo.get_all().len(), 1);
    }

    #[tokio::test]
    async fn mark_synced_unknown_id_fails() {
        let repo = InMemoryWaitlistRepo::new();
        assert!(repo.mark_synced(Uuid::new_v4()).await.is_err());
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use waitlist_types::INVALID_EMAIL;

use crate::{
    app_error::{AppError, AppResult},
    application::{ports::sheet_exporter::SheetExporter, validators::is_valid_email},
    domain::entities::{
        export_status::ExportStatus,
        waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    },
};

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait WaitlistRepoTrait: Send + Sync {
    /// Insert a new entry. Must fail with `AppError::DuplicateEmail` when the
    /// email is already stored; the check and the write are one atomic step.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;

    /// Set `synced_to_sheets = true` for an existing entry.
    async fn mark_synced(&self, id: Uuid) -> AppResult<()>;
}

// ============================================================================
// Types
// ============================================================================

/// Request metadata recorded next to the email. Empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMetadata {
    pub ip_address: String,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub entry: WaitlistEntry,
    pub export: ExportStatus,
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepoTrait>,
    exporter: Option<Arc<dyn SheetExporter>>,
    export_timeout: Duration,
}

impl WaitlistUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepoTrait>,
        exporter: Option<Arc<dyn SheetExporter>>,
        export_timeout: Duration,
    ) -> Self {
        Self {
            repo,
            exporter,
            export_timeout,
        }
    }

    /// Validate, store, and best-effort export one signup.
    ///
    /// Only validation and insert failures are returned. Whatever happens in the
    /// export step is reported through `JoinOutcome::export` and never as `Err`.
    pub async fn join(
        &self,
        email: Option<&str>,
        metadata: ClientMetadata,
    ) -> AppResult<JoinOutcome> {
        let email = match email {
            Some(email) if is_valid_email(email) => email,
            _ => return Err(AppError::InvalidInput(INVALID_EMAIL.into())),
        };

        let mut entry = self
            .repo
            .insert(&NewWaitlistEntry {
                email: email.to_string(),
                ip_address: metadata.ip_address,
                user_agent: metadata.user_agent,
            })
            .await?;

        info!(entry_id = %entry.id, "Waitlist entry created");

        let export = self.export_entry(&entry).await;
        if export == ExportStatus::Synced {
            entry.synced_to_sheets = true;
        }

        debug!(
            entry_id = %entry.id,
            export = export.as_str(),
            reached_sheet = export.reached_sheet(),
            "Waitlist submission finished"
        );

        Ok(JoinOutcome { entry, export })
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    async fn export_entry(&self, entry: &WaitlistEntry) -> ExportStatus {
        let Some(exporter) = &self.exporter else {
            debug!(entry_id = %entry.id, "No sheet exporter configured, skipping export");
            return ExportStatus::Skipped;
        };

        let exported =
            tokio::time::timeout(self.export_timeout, exporter.export(&entry.email, Utc::now()))
                .await;

        match exported {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                warn!(entry_id = %entry.id, error = %err, "Failed to sync to sheets");
                return ExportStatus::Failed;
            }
            Err(_) => {
                warn!(
                    entry_id = %entry.id,
                    timeout_ms = self.export_timeout.as_millis() as u64,
                    "Sheet export timed out"
                );
                return ExportStatus::Failed;
            }
        }

        match self.repo.mark_synced(entry.id).await {
            Ok(()) => ExportStatus::Synced,
            Err(err) => {
                warn!(entry_id = %entry.id, error = %err, "Failed to flag entry as synced");
                ExportStatus::ExportedNotFlagged
            }
        }
    }
}

/// Result of the best-effort sheet export for one submission.
///
/// Never part of the client-visible response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    /// Export succeeded and the entry was flagged as synced.
    Synced,
    /// Export succeeded but flagging the entry failed.
    ExportedNotFlagged,
    /// Export failed or timed out.
    Failed,
    /// No exporter configured.
    Skipped,
}

impl ExportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportStatus::Synced => "synced",
            ExportStatus::ExportedNotFlagged => "exported_not_flagged",
            ExportStatus::Failed => "failed",
            ExportStatus::Skipped => "skipped",
        }
    }

    /// Whether the sheet received the row.
    pub fn reached_sheet(&self) -> bool {
        matches!(
            self,
            ExportStatus::Synced | ExportStatus::ExportedNotFlagged
        )
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::app_error::AppResult;

/// Outbound port for the spreadsheet that mirrors the waitlist.
///
/// Implementations report any failure as `Err`; callers decide whether it matters.
#[async_trait]
pub trait SheetExporter: Send + Sync {
    async fn export(&self, email: &str, timestamp: DateTime<Utc>) -> AppResult<()>;
}

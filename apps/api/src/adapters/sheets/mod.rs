use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::sheet_exporter::SheetExporter,
};

/// Form field carrying the email in the Apps Script request.
pub const EMAIL_FIELD: &str = "entry.emailAddress";
/// Form field carrying the RFC 3339 submission timestamp.
pub const TIMESTAMP_FIELD: &str = "entry.timestamp";

/// Posts waitlist rows to a Google Apps Script web app bound to the sheet.
#[derive(Clone)]
pub struct GoogleSheetsExporter {
    client: Client,
    endpoint: Url,
}

impl GoogleSheetsExporter {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SheetExporter for GoogleSheetsExporter {
    async fn export(&self, email: &str, timestamp: DateTime<Utc>) -> AppResult<()> {
        let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        let form = [(EMAIL_FIELD, email), (TIMESTAMP_FIELD, timestamp.as_str())];

        self.client
            .post(self.endpoint.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Export(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Export(e.to_string()))?;

        Ok(())
    }
}

//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        ports::sheet_exporter::SheetExporter, use_cases::waitlist::WaitlistUseCases,
    },
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::new());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_repo(repo.clone())
///     .with_exporter(Arc::new(FailingSheetExporter))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    repo: Arc<InMemoryWaitlistRepo>,
    exporter: Option<Arc<dyn SheetExporter>>,
    export_timeout: Duration,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    /// Create a new builder with an empty repo and no exporter.
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
            exporter: None,
            export_timeout: Duration::from_millis(500),
        }
    }

    /// Use a repo the test keeps a handle to.
    pub fn with_repo(mut self, repo: Arc<InMemoryWaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    /// Enable the export step with the given exporter.
    pub fn with_exporter(mut self, exporter: Arc<dyn SheetExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn with_export_timeout(mut self, timeout: Duration) -> Self {
        self.export_timeout = timeout;
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let config = AppConfig {
            database_url: SecretString::new("postgres://unused".into()),
            db_max_connections: 1,
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            sheets_export_url: None,
            sheets_export_timeout: self.export_timeout,
        };

        let waitlist_use_cases =
            WaitlistUseCases::new(self.repo, self.exporter, self.export_timeout);

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;
    use crate::{infra::app::create_app, test_utils::SlowSheetExporter};

    #[tokio::test]
    async fn slow_exporter_does_not_hold_the_response() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = TestAppStateBuilder::new()
            .with_repo(repo.clone())
            .with_exporter(Arc::new(SlowSheetExporter::new(Duration::from_secs(30))))
            .with_export_timeout(Duration::from_millis(50))
            .build();
        let server = TestServer::new(create_app(app_state)).unwrap();

        let started = std::time::Instant::now();
        let response = server
            .post("/functions/v1/sync-to-sheets")
            .json(&serde_json::json!({ "email": "slow@example.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!repo.get_all()[0].synced_to_sheets);
    }
}

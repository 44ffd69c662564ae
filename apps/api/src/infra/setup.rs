use crate::{
    adapters::{http::app_state::AppState, sheets::GoogleSheetsExporter},
    application::ports::sheet_exporter::SheetExporter,
    infra::{
        config::AppConfig, error::InfraError, http_client::try_build_client,
        postgres_persistence,
    },
    use_cases::waitlist::{WaitlistRepoTrait, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc =
        Arc::new(postgres_persistence(&config.database_url, config.db_max_connections).await?);

    let exporter = match &config.sheets_export_url {
        Some(url) => {
            let client =
                try_build_client(config.sheets_export_timeout).map_err(InfraError::HttpClient)?;
            info!(host = url.host_str().unwrap_or_default(), "Sheet export enabled");
            Some(Arc::new(GoogleSheetsExporter::new(client, url.clone())) as Arc<dyn SheetExporter>)
        }
        None => {
            info!("SHEETS_EXPORT_URL not set, sheet export disabled");
            None
        }
    };

    let waitlist_use_cases = WaitlistUseCases::new(
        postgres_arc as Arc<dyn WaitlistRepoTrait>,
        exporter,
        config.sheets_export_timeout,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs). Skipped when the working directory is read-only.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub database_url: SecretString,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Apps Script endpoint that appends rows to the waitlist sheet.
    /// `None` turns the export step off.
    pub sheets_export_url: Option<Url>,
    /// Upper bound on the inline export call, connect included.
    pub sheets_export_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
        );

        let sheets_export_url = parse_export_url(std::env::var("SHEETS_EXPORT_URL").ok());
        let sheets_export_timeout_secs: u64 = get_env_default("SHEETS_EXPORT_TIMEOUT_SECS", 5);

        Self {
            database_url,
            db_max_connections,
            bind_addr,
            sheets_export_url,
            sheets_export_timeout: export_timeout(sheets_export_timeout_secs),
        }
    }
}

fn parse_export_url(raw: Option<String>) -> Option<Url> {
    let raw = raw?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    Some(
        raw.parse()
            .expect("SHEETS_EXPORT_URL must be a valid absolute URL"),
    )
}

/// A zero bound would time out every export before it starts.
fn export_timeout(secs: u64) -> Duration {
    assert!(secs > 0, "SHEETS_EXPORT_TIMEOUT_SECS must be greater than zero");
    Duration::from_secs(secs)
}

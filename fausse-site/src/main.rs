//! Café Fausse site front-end
//!
//! Terminal rendition of the marketing site: routed pages over the static
//! content catalog, plus the reservation and newsletter forms submitting
//! to the remote service.

mod app;
mod event;
mod term;
mod ui;

use std::path::PathBuf;

use anyhow::Context;

use app::App;
use fausse_client::ClientConfig;
use shared::ContentRegistry;

/// Optional JSON catalog replacing the compiled-in content
const CONTENT_FILE_ENV: &str = "FAUSSE_CONTENT_FILE";

/// Where the log file goes (the terminal belongs to the UI)
const LOG_DIR_ENV: &str = "FAUSSE_LOG_DIR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_tracing()?;

    let registry = match std::env::var(CONTENT_FILE_ENV) {
        Ok(path) if !path.is_empty() => ContentRegistry::from_json_file(&path)
            .with_context(|| format!("loading content catalog from {}", path))?,
        _ => ContentRegistry::builtin(),
    };

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting site front-end");
    let client = config.build_client()?;

    let mut guard = term::TerminalGuard::acquire()?;
    let (mut app, mut events_rx) = App::new(registry, client);
    let result = app.run(&mut events_rx, guard.terminal()).await;
    drop(guard);

    tracing::info!("site front-end stopped");
    result
}

fn init_tracing() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = log_directory(std::env::var_os(LOG_DIR_ENV));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "fausse-site.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn log_directory(configured: Option<std::ffi::OsString>) -> PathBuf {
    match configured {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::temp_dir().join("fausse-site"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_prefers_configured_path() {
        let configured = log_directory(Some("/var/log/fausse".into()));
        assert_eq!(configured, PathBuf::from("/var/log/fausse"));

        let fallback = log_directory(None);
        assert!(fallback.ends_with("fausse-site"));

        let empty = log_directory(Some("".into()));
        assert_eq!(empty, fallback);
    }
}

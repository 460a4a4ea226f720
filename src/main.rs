use anyhow::Result;
use shelfboard::{config::GlobalConfig, tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Keep the guard alive for the lifetime of the app so logs get flushed
    let _log_guard = init_logging();

    let config = GlobalConfig::load_or_default();

    // First run: persist the defaults so the config file is discoverable
    if let Ok(config_path) = GlobalConfig::config_path() {
        if !config_path.exists() {
            if let Err(err) = config.save() {
                tracing::warn!(error = %err, "failed to write default config");
            }
        }
    }

    tracing::info!("starting shelfboard");
    let mut app = tui::App::new(config)?;
    app.run()?;
    tracing::info!("shutting down");

    Ok(())
}

/// Log to a file in the data directory — stdout belongs to the TUI.
/// Logging is best-effort: without a data dir the app simply runs unlogged.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let data_dir = GlobalConfig::data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;

    let appender = tracing_appender::rolling::never(&data_dir, "shelfboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SHELFBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

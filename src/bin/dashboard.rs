use env_logger::{Builder, WriteStyle};
use log::error;
use plantcare::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        AppConfig::default()
    });

    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    if let Err(e) = plantcare::run_dashboard(config).await {
        error!("Dashboard error: {}", e);
        return Err(e);
    }
    Ok(())
}

pub mod advice;
pub mod client;
pub mod collectors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod renderer;
pub mod server;
pub mod speech;
pub mod state;

use crate::advice::translations::{text, Text};
use crate::client::{ApiClient, ReplySource};
use crate::collectors::{collector, sensor};
use crate::config::AppConfig;
use crate::speech::Speaker;
use crate::state::SnapshotStore;
use anyhow::Context;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const SCREEN_WIDTH: usize = 64;

fn log_failure(e: &anyhow::Error) {
    error!("Application error: {e:#}");
    // Print chain of error causes
    let mut source = e.source();
    while let Some(e) = source {
        error!("Caused by: {e}");
        source = e.source();
    }
}

/// Runs the sensor and chat REST server until it is stopped.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting plant care server");

    match server::serve(&config).await {
        Ok(_) => info!("Server stopped"),
        Err(e) => {
            log_failure(&e);
            return Err(e).context("Server failed to run");
        }
    }

    Ok(())
}

/// Runs the terminal dashboard until Ctrl-C.
pub async fn run_dashboard(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting dashboard");

    tokio::select! {
        result = dashboard_loop(&config) => {
            match result {
                Ok(_) => info!("Dashboard completed successfully"),
                Err(e) => {
                    log_failure(&e);
                    return Err(e).context("Dashboard failed to run");
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}

async fn dashboard_loop(config: &AppConfig) -> anyhow::Result<()> {
    let settings = &config.dashboard;
    let language = settings.language;

    let client = ApiClient::new(
        &settings.server_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
    .context("Failed to build API client")?;
    let speaker = Speaker::new(&settings.tts_command, settings.speak);
    let store = SnapshotStore::default();

    let mut interval = tokio::time::interval(Duration::from_secs(settings.poll_interval_secs.max(1)));
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let mut last_screen = String::new();

    debug!("Polling {} in {}", settings.server_url, language.english_name());
    println!("{}\n{}\n", text(Text::Assistant, language), text(Text::Welcome, language));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let online = sensor::poll(&client, &store).await;

                let snapshot = store.current().await;
                let view = collector::build_view(online.then_some(&snapshot), language, Utc::now());
                let screen = dashboard::create_screen(&view, SCREEN_WIDTH);
                if screen != last_screen {
                    println!("{}\n", screen);
                    last_screen = screen;
                }
            }
            line = input.next_line(), if input_open => {
                let message = match line {
                    Ok(Some(message)) => message,
                    Ok(None) => {
                        debug!("Input closed");
                        input_open = false;
                        continue;
                    }
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        input_open = false;
                        continue;
                    }
                };
                let message = message.trim();
                if message.is_empty() {
                    continue;
                }

                let snapshot = store.current().await;
                let reply = client.ask(message, &snapshot, language).await;
                let marker = match reply.source {
                    ReplySource::Server => "",
                    ReplySource::LocalFallback => " (offline)",
                };
                println!("{}{}: {}\n", text(Text::Assistant, language), marker, reply.text);

                speaker.say(&reply.text, language).await;
            }
        }
    }
}

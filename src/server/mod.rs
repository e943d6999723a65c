use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use log::info;

use crate::client::OllamaClient;
use crate::config::AppConfig;
use crate::state::SnapshotStore;

pub mod handlers;

/// Shared by every worker.
pub struct AppState {
    pub store: SnapshotStore,
    pub ollama: OllamaClient,
}

pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let ollama = OllamaClient::new(&config.ollama).context("Failed to build Ollama client")?;
    ollama.probe().await;

    let state = web::Data::new(AppState {
        store: SnapshotStore::default(),
        ollama,
    });

    let address = (config.server.host.clone(), config.server.port);
    info!(
        "Plant care server listening on http://{}:{}",
        address.0, address.1
    );
    info!("Ollama expected at {}", config.ollama.url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(handlers::routes)
    })
    .bind(address.clone())
    .context(format!("Failed to bind {}:{}", address.0, address.1))?
    .run()
    .await
    .context("HTTP server stopped with an error")?;

    Ok(())
}

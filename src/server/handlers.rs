use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{info, warn};

use crate::advice::generate_fallback;
use crate::advice::prompt::build_prompt;
use crate::error::ApiError;
use crate::models::api::{ChatRequest, ChatResponse, HealthResponse, IngestResponse};
use crate::models::{SensorSnapshot, SensorUpdate};
use crate::server::AppState;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/sensor-data")
            .app_data(sensor_json_config())
            .route(web::get().to(get_sensor_data))
            .route(web::post().to(post_sensor_data)),
    )
    .service(
        web::resource("/api/chat")
            .app_data(chat_json_config())
            .route(web::post().to(chat)),
    )
    .route("/api/health", web::get().to(health))
    .route("/api/ollama-status", web::get().to(ollama_status));
}

// Sensor boards do not always set a content type.
fn sensor_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!("Rejected sensor data: {}", err);
            ApiError::InvalidSensorData(err.to_string()).into()
        })
}

fn chat_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected chat request: {}", err);
        ApiError::InvalidChatRequest(err.to_string()).into()
    })
}

async fn get_sensor_data(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.current().await)
}

async fn post_sensor_data(
    state: web::Data<AppState>,
    update: web::Json<SensorUpdate>,
) -> HttpResponse {
    let snapshot = state.store.apply(&update).await;
    info!(
        "Received sensor data from {}: moisture {}%, humidity {}%, temperature {}°C",
        snapshot.device_id, snapshot.soil_moisture, snapshot.humidity, snapshot.temperature
    );
    HttpResponse::Ok().json(IngestResponse::accepted(snapshot))
}

async fn chat(state: web::Data<AppState>, request: web::Json<ChatRequest>) -> HttpResponse {
    let request = request.into_inner();

    // Readings sent with the question win; gaps are filled with demo values.
    let snapshot = match &request.sensor_data {
        Some(update) => update.overlay(&SensorSnapshot::default()),
        None => state.store.current().await,
    };

    let prompt = build_prompt(&request.message, &snapshot, request.language);
    let response = match state.ollama.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Error calling Ollama: {}", e);
            generate_fallback(&request.message, &snapshot, request.language)
        }
    };

    HttpResponse::Ok().json(ChatResponse { response })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "running".to_string(),
        ollama: "checking...".to_string(),
        timestamp: Utc::now(),
    })
}

async fn ollama_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.ollama.status().await)
}

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::OllamaConfig;
use crate::error::FetchError;
use crate::models::api::OllamaStatus;

/// # Ollama HTTP API
///
/// Only two endpoints of the local Ollama daemon are used:
///
/// | Method | Path            | Purpose                                   |
/// |--------|-----------------|-------------------------------------------|
/// | POST   | `/api/generate` | One-shot completion, `stream: false`      |
/// | GET    | `/api/tags`     | Installed models, used as a liveness probe |
///
/// A non-streaming generate reply carries the whole completion in its
/// `response` field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    options: GenerateOptions,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            options: GenerateOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                max_tokens: config.max_tokens,
            },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `prompt` to the model and returns the trimmed completion.
    pub async fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: &self.options,
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(FetchError::Network)?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await.map_err(FetchError::Decode)?;
        debug!("generate took: {} ms", start.elapsed().as_millis());

        let reply = body.response.trim();
        if reply.is_empty() {
            return Err(FetchError::EmptyReply);
        }
        Ok(reply.to_string())
    }

    pub async fn list_models(&self) -> Result<Vec<String>, FetchError> {
        let start = Instant::now();
        let tags: TagsResponse = self
            .http
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(FetchError::Network)?
            .error_for_status()?
            .json()
            .await
            .map_err(FetchError::Decode)?;
        debug!("list_models took: {} ms", start.elapsed().as_millis());

        Ok(tags.models.into_iter().map(|model| model.name).collect())
    }

    pub async fn status(&self) -> OllamaStatus {
        match self.list_models().await {
            Ok(models) => OllamaStatus::Connected { models },
            Err(e) => OllamaStatus::Disconnected {
                error: e.to_string(),
            },
        }
    }

    /// Logs whether chat replies will come from the model or from canned advice.
    pub async fn probe(&self) {
        match self.list_models().await {
            Ok(models) => info!(
                "Ollama connection successful ({} model(s) at {})",
                models.len(),
                self.base_url
            ),
            Err(e) => warn!(
                "Ollama not accessible at {} - using fallback responses: {}",
                self.base_url, e
            ),
        }
    }
}

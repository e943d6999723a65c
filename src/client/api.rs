use log::{debug, warn};
use std::time::{Duration, Instant};

use crate::advice::generate_fallback;
use crate::error::FetchError;
use crate::models::api::{ChatRequest, ChatResponse};
use crate::models::{Language, SensorSnapshot, SensorUpdate};

/// Where a chat reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Server,
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
}

/// Client for the plant care server's REST API, used by the dashboard.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_snapshot(&self) -> Result<SensorSnapshot, FetchError> {
        let start = Instant::now();
        let snapshot = self
            .http
            .get(format!("{}/api/sensor-data", self.base_url))
            .send()
            .await
            .map_err(FetchError::Network)?
            .error_for_status()?
            .json()
            .await
            .map_err(FetchError::Decode)?;
        debug!("fetch_snapshot took: {} ms", start.elapsed().as_millis());
        Ok(snapshot)
    }

    pub async fn chat(
        &self,
        message: &str,
        snapshot: &SensorSnapshot,
        language: Language,
    ) -> Result<String, FetchError> {
        let start = Instant::now();
        let request = ChatRequest {
            message: message.to_string(),
            sensor_data: Some(SensorUpdate::from(snapshot)),
            language,
        };

        let reply: ChatResponse = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(FetchError::Network)?
            .error_for_status()?
            .json()
            .await
            .map_err(FetchError::Decode)?;
        debug!("chat took: {} ms", start.elapsed().as_millis());

        if reply.response.trim().is_empty() {
            return Err(FetchError::EmptyReply);
        }
        Ok(reply.response)
    }

    /// Asks the server, answering locally from `snapshot` when the server can't be reached.
    pub async fn ask(&self, message: &str, snapshot: &SensorSnapshot, language: Language) -> ChatReply {
        match self.chat(message, snapshot, language).await {
            Ok(text) => ChatReply {
                text,
                source: ReplySource::Server,
            },
            Err(e) => {
                warn!("Chat request failed, answering locally: {}", e);
                ChatReply {
                    text: generate_fallback(message, snapshot, language),
                    source: ReplySource::LocalFallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_fails_without_server() {
        let result = unreachable().fetch_snapshot().await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_ask_falls_back_locally() {
        let snapshot = SensorSnapshot {
            soil_moisture: 25.0,
            ..SensorSnapshot::default()
        };
        let reply = unreachable().ask("What about my soil?", &snapshot, Language::En).await;

        assert_eq!(reply.source, ReplySource::LocalFallback);
        assert!(reply.text.contains("25%"));
    }
}

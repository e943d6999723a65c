use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::Language;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub server_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub language: Language,
    pub speak: bool,
    pub tts_command: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(rename = "SERVER", alias = "server", default)]
    pub server: ServerConfig,
    #[serde(rename = "OLLAMA", alias = "ollama", default)]
    pub ollama: OllamaConfig,
    #[serde(rename = "DASHBOARD", alias = "dashboard", default)]
    pub dashboard: DashboardConfig,
    #[serde(rename = "LOGGING", alias = "logging", default)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434".to_string(),
            model: "mistral".to_string(),
            timeout_secs: 30,
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 150,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
            poll_interval_secs: 2,
            request_timeout_secs: 5,
            language: Language::En,
            speak: false,
            tts_command: "espeak-ng".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(config::FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!(
            "[SERVER]\nhost = {}\nport = {}\n\n",
            self.server.host, self.server.port
        ));

        config_str.push_str(&format!(
            "[OLLAMA]\nurl = {}\nmodel = {}\ntimeout_secs = {}\ntemperature = {}\ntop_p = {}\nmax_tokens = {}\n\n",
            self.ollama.url,
            self.ollama.model,
            self.ollama.timeout_secs,
            self.ollama.temperature,
            self.ollama.top_p,
            self.ollama.max_tokens
        ));

        config_str.push_str(&format!(
            "[DASHBOARD]\nserver_url = {}\npoll_interval_secs = {}\nrequest_timeout_secs = {}\nlanguage = {}\nspeak = {}\ntts_command = {}\n\n",
            self.dashboard.server_url,
            self.dashboard.poll_interval_secs,
            self.dashboard.request_timeout_secs,
            self.dashboard.language,
            self.dashboard.speak,
            self.dashboard.tts_command
        ));

        config_str.push_str(&format!("[LOGGING]\nlevel = {}\n", self.logging.level));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ini_file(content: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ollama.url, "http://localhost:11434");
        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.ollama.max_tokens, 150);
        assert_eq!(config.dashboard.poll_interval_secs, 2);
        assert_eq!(config.dashboard.language, Language::En);
        assert_eq!(config.dashboard.speak, false);
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_from_file() {
        let temp_file = ini_file(
            "[SERVER]\nhost = 127.0.0.1\nport = 8080\n\n[OLLAMA]\nmodel = llama3.2:3b\ntimeout_secs = 5\n\n[DASHBOARD]\nlanguage = ar\nspeak = true\n\n[LOGGING]\nlevel = debug\n",
        );

        let config = AppConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ollama.model, "llama3.2:3b");
        assert_eq!(config.ollama.timeout_secs, 5);
        // Untouched keys keep their defaults
        assert_eq!(config.ollama.url, "http://localhost:11434");
        assert_eq!(config.dashboard.language, Language::Ar);
        assert_eq!(config.dashboard.speak, true);
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_file = ini_file("[LOGGING]\nlevel = warn\n");
        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.tts_command, "espeak-ng");
        assert_eq!(config.get_log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::from_file("/nonexistent/plantcare.ini").is_err());
    }

    #[test]
    fn test_save_config() {
        let mut config = AppConfig::default();
        config.server.port = 4000;
        config.ollama.model = "phi3".to_string();
        config.ollama.temperature = 0.5;
        config.dashboard.server_url = "http://192.168.137.1:3000".to_string();
        config.dashboard.language = Language::Ar;
        config.dashboard.speak = true;
        config.logging.level = "trace".to_string();

        let temp_file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let config_path = temp_file.path();

        config.save(config_path).unwrap();

        let loaded_config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(loaded_config.server.port, 4000);
        assert_eq!(loaded_config.ollama.model, "phi3");
        assert_eq!(loaded_config.ollama.temperature, 0.5);
        assert_eq!(loaded_config.dashboard.server_url, "http://192.168.137.1:3000");
        assert_eq!(loaded_config.dashboard.language, Language::Ar);
        assert_eq!(loaded_config.dashboard.speak, true);
        assert_eq!(loaded_config.get_log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }
}

// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Resolved runtime settings. The screening service base URL is the only
/// knob; the endpoint path and the batch/size caps are fixed constants of
/// the service contract.
#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    pub service_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<ConfigSection>,
    production: Option<ConfigSection>,
}

#[derive(Debug, Deserialize)]
struct ConfigSection {
    service_url: Option<String>,
}

impl ScreenerConfig {
    /// Resolve the service URL: CLI flag, then SCREENER_SERVICE_URL, then an
    /// optional config.yaml in the working directory, then the default.
    pub fn resolve(cli_override: Option<String>) -> Result<Self> {
        if let Some(url) = cli_override {
            return Ok(Self::with_url(url));
        }

        if let Ok(url) = std::env::var("SCREENER_SERVICE_URL") {
            return Ok(Self::with_url(url));
        }

        if let Some(url) = Self::from_config_file()? {
            return Ok(Self::with_url(url));
        }

        Ok(Self::with_url(DEFAULT_SERVICE_URL.to_string()))
    }

    fn with_url(url: String) -> Self {
        Self {
            service_url: url.trim_end_matches('/').to_string(),
        }
    }

    fn get_environment() -> String {
        std::env::var("SCREENER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn from_config_file() -> Result<Option<String>> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            return Ok(None);
        }

        let environment = Self::get_environment();
        info!("Loading config.yaml for environment: {}", environment);

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let section = match environment.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(section.and_then(|s| s.service_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins_and_is_normalized() {
        let config = ScreenerConfig::resolve(Some("http://screener:9000/".to_string())).unwrap();
        assert_eq!(config.service_url, "http://screener:9000");
    }

    #[test]
    fn test_config_file_sections_parse() {
        let raw = "local:\n  service_url: http://localhost:8000\nproduction:\n  service_url: https://screener.example.com\n";
        let parsed: ConfigFile = serde_yaml::from_str(raw).unwrap();
        assert_eq!(
            parsed.local.and_then(|s| s.service_url).as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(
            parsed.production.and_then(|s| s.service_url).as_deref(),
            Some("https://screener.example.com")
        );
    }
}

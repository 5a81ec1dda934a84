use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;

/// Origins allowed to call the API from a browser when none are configured.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://127.0.0.1:8000",
    "http://localhost:8000",
    "http://127.0.0.1:8001",
    "http://localhost:8001",
    "http://127.0.0.1:5500",
    "http://localhost:5500",
];

pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// `USE_MOCK=1`: never call the LLM
    pub use_mock: bool,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub llm_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let llm_timeout_secs: u64 = lookup("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
        if llm_timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            port,
            use_mock: lookup("USE_MOCK").as_deref() == Some("1"),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL"),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            allowed_origins,
        })
    }

    /// True when no LLM call will ever be attempted.
    pub fn heuristic_only(&self) -> bool {
        self.use_mock || self.openai_api_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 8000);
        assert!(!config.use_mock);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.allowed_origins.len(), DEFAULT_CORS_ORIGINS.len());
        assert!(config.heuristic_only());
    }

    #[test]
    fn test_key_enables_llm_unless_mock() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(!config.heuristic_only());

        let config = config_from(&[("OPENAI_API_KEY", "sk-test"), ("USE_MOCK", "1")]).unwrap();
        assert!(config.use_mock);
        assert!(config.heuristic_only());
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert_eq!(config.openai_api_key, None);
    }

    #[test]
    fn test_only_literal_one_enables_mock() {
        assert!(!config_from(&[("USE_MOCK", "true")]).unwrap().use_mock);
        assert!(!config_from(&[("USE_MOCK", "0")]).unwrap().use_mock);
    }

    #[test]
    fn test_origins_parsed_from_comma_list() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://a.example, https://b.example,,",
        )])
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "-3")]).is_err());
    }
}

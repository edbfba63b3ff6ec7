use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is optional: without it the service runs in mock-only mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_base_url: None,
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match optional(&lookup, "LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: optional(&lookup, "GEMINI_API_KEY"),
            gemini_base_url: optional(&lookup, "GEMINI_BASE_URL"),
            llm_timeout: Duration::from_secs(timeout_secs),
            port: match optional(&lookup, "PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn llm_mode(&self) -> &'static str {
        if self.gemini_api_key.is_some() {
            "external"
        } else {
            "mock"
        }
    }
}

/// Blank values are treated the same as unset ones.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.port, 4000);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.llm_mode(), "mock");
    }

    #[test]
    fn test_blank_api_key_selects_mock_mode() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.llm_mode(), "mock");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("PORT", "8081"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.gemini_base_url.as_deref(),
            Some("http://localhost:9999")
        );
        assert_eq!(config.llm_timeout, Duration::from_secs(5));
        assert_eq!(config.port, 8081);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.llm_mode(), "external");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("LLM_TIMEOUT_SECS", "0")])).is_err());
    }
}

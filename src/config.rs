//! Runtime configuration read from the environment (and an optional `.env`).

use std::time::Duration;

use crate::error::ConfigError;

const ENV_URL: &str = "SUPABASE_URL";
const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";
const ENV_PUBLISHABLE_KEY: &str = "SUPABASE_PUBLISHABLE_KEY";
const ENV_TIMEOUT: &str = "AI_STUDIO_REQUEST_TIMEOUT_SECS";
const ENV_LOG: &str = "AI_STUDIO_LOG";

pub const DEFAULT_LOG_FILTER: &str = "ai_studio=info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`. `None` leaves the backend unconfigured.
    pub functions_url: Option<String>,
    pub anon_key: Option<String>,
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            functions_url: None,
            anon_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout_secs = match read(ENV_TIMEOUT) {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: ENV_TIMEOUT,
                    value,
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            backend: BackendConfig {
                functions_url: read(ENV_URL),
                anon_key: read(ENV_ANON_KEY).or_else(|| read(ENV_PUBLISHABLE_KEY)),
                request_timeout: Duration::from_secs(timeout_secs),
            },
            log_filter: read(ENV_LOG),
        })
    }

    /// Lists what the backend still needs before requests can succeed.
    pub fn missing(&self) -> Vec<ConfigError> {
        let mut missing = Vec::new();
        if self.backend.functions_url.is_none() {
            missing.push(ConfigError::Missing(ENV_URL));
        }
        if self.backend.anon_key.is_none() {
            missing.push(ConfigError::Missing(ENV_ANON_KEY));
        }
        missing
    }
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.backend, BackendConfig::default());
        assert_eq!(config.missing().len(), 2);
    }

    #[test]
    fn test_reads_backend_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", " https://demo.supabase.co "),
            ("SUPABASE_PUBLISHABLE_KEY", "anon"),
            ("AI_STUDIO_REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(
            config.backend.functions_url.as_deref(),
            Some("https://demo.supabase.co")
        );
        assert_eq!(config.backend.anon_key.as_deref(), Some("anon"));
        assert_eq!(config.backend.request_timeout, Duration::from_secs(30));
        assert!(config.missing().is_empty());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let result = AppConfig::from_lookup(lookup_from(&[("AI_STUDIO_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}

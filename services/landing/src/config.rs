use std::time::Duration;

use anyhow::{bail, Context, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub metadata_timeout: Duration,
    /// Zero disables the metadata cache.
    pub metadata_cache_ttl: Duration,
    /// Absolute origin used for `og:url`; relative links when unset.
    pub public_base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            metadata_timeout: Duration::from_millis(5000),
            metadata_cache_ttl: Duration::from_secs(3600),
            public_base_url: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("LANDING_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let timeout_ms = match lookup("METADATA_TIMEOUT_MS") {
            Some(v) => parse_u64("METADATA_TIMEOUT_MS", &v)?,
            None => defaults.metadata_timeout.as_millis() as u64,
        };
        if timeout_ms == 0 {
            bail!("METADATA_TIMEOUT_MS must be greater than 0");
        }

        let cache_secs = match lookup("METADATA_CACHE_SECS") {
            Some(v) => parse_u64("METADATA_CACHE_SECS", &v)?,
            None => defaults.metadata_cache_ttl.as_secs(),
        };

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        // Tiny sanity checks (fail fast, fail loud)
        if let Some(base) = &public_base_url {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                bail!("PUBLIC_BASE_URL must start with http:// or https://");
            }
        }

        Ok(Self {
            bind_addr,
            metadata_timeout: Duration::from_millis(timeout_ms),
            metadata_cache_ttl: Duration::from_secs(cache_secs),
            public_base_url,
        })
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.metadata_timeout, Duration::from_secs(5));
        assert_eq!(cfg.metadata_cache_ttl, Duration::from_secs(3600));
        assert!(cfg.public_base_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[
            ("LANDING_BIND_ADDR", "127.0.0.1:8081"),
            ("METADATA_TIMEOUT_MS", "750"),
            ("METADATA_CACHE_SECS", "0"),
            ("PUBLIC_BASE_URL", "https://blinks.example.com/"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8081");
        assert_eq!(cfg.metadata_timeout, Duration::from_millis(750));
        assert_eq!(cfg.metadata_cache_ttl, Duration::ZERO);
        assert_eq!(cfg.public_base_url.as_deref(), Some("https://blinks.example.com"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("METADATA_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("METADATA_TIMEOUT_MS", "0")]).is_err());
        assert!(config_from(&[("METADATA_CACHE_SECS", "-1")]).is_err());
        assert!(config_from(&[("PUBLIC_BASE_URL", "blinks.example.com")]).is_err());
    }
}

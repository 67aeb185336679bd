use pc_core::contract::RECOMMEND_PLAY_PATH;
use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const BACKEND_URL_ENV: &str = "PLAYCALL_BACKEND_URL";
pub const TIMEOUT_SECS_ENV: &str = "PLAYCALL_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Startup-time configuration problems. These are reported once, before any
/// request is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var}='{value}' is not a valid http(s) URL: {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var}='{value}' must be a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    endpoint: Url,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let (base_url, endpoint) = parse_base_url(base_url)?;
        Ok(Self {
            base_url,
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BACKEND_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(BACKEND_URL_ENV))?;

        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout {
                        var: TIMEOUT_SECS_ENV,
                        value: raw.to_string(),
                    })?;
                config.timeout = Duration::from_secs(secs);
            }
        }

        Ok(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the recommendation endpoint.
    pub fn recommend_url(&self) -> &Url {
        &self.endpoint
    }
}

/// Base URL (always ending in '/') and the recommendation endpoint under it.
fn parse_base_url(raw: &str) -> Result<(Url, Url), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var: BACKEND_URL_ENV,
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    // The trailing slash makes join append instead of replacing the last segment.
    let endpoint = url
        .join(RECOMMEND_PLAY_PATH.trim_start_matches('/'))
        .map_err(|e| invalid(e.to_string()))?;
    Ok((url, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_backend_url_is_a_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(BACKEND_URL_ENV));

        let err = ClientConfig::from_lookup(lookup(&[(BACKEND_URL_ENV, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(BACKEND_URL_ENV));
    }

    #[test]
    fn endpoint_is_joined_under_base() {
        let config =
            ClientConfig::from_lookup(lookup(&[(BACKEND_URL_ENV, "http://localhost:8001")]))
                .unwrap();
        assert_eq!(config.recommend_url().as_str(), "http://localhost:8001/api/recommend-play");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let prefixed = ClientConfig::new("https://example.com/football").unwrap();
        assert_eq!(
            prefixed.recommend_url().as_str(),
            "https://example.com/football/api/recommend-play"
        );

        let trailing = ClientConfig::new("https://example.com/football/").unwrap();
        assert_eq!(trailing.recommend_url(), prefixed.recommend_url());
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(ClientConfig::new("not a url"), Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn endpoint_is_fixed_at_construction() {
        let config = ClientConfig::new("http://localhost:8001/backend?x=1")
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.recommend_url().path(), "/backend/api/recommend-play");
        assert_ne!(config.recommend_url(), config.base_url());
        assert!(config.recommend_url().query().is_none());

        assert!(matches!(
            ClientConfig::new("data:text/plain,hello"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn timeout_override() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BACKEND_URL_ENV, "http://localhost:8001"),
            (TIMEOUT_SECS_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));

        for bad in ["0", "-3", "soon"] {
            let err = ClientConfig::from_lookup(lookup(&[
                (BACKEND_URL_ENV, "http://localhost:8001"),
                (TIMEOUT_SECS_ENV, bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{bad}");
        }
    }
}

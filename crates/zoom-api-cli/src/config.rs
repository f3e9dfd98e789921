/*
[INPUT]:  YAML configuration file and ZOOM_* environment variables
[OUTPUT]: Parsed CLI configuration and adapter client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use zoom_api_adapter::{ApiConfig, ClientConfig};

pub const ENV_API_KEY: &str = "ZOOM_API_KEY";
pub const ENV_API_SECRET: &str = "ZOOM_API_SECRET";
pub const ENV_BASE_URL: &str = "ZOOM_BASE_URL";

/// Top-level configuration for the CLI
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API root; the vendor default is used when unset
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply ZOOM_* overrides; empty values are ignored
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(secret) = get(ENV_API_SECRET) {
            self.api_secret = Some(secret);
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        self
    }

    /// Credentials and API location for the adapter client
    pub fn api_config(&self) -> anyhow::Result<ApiConfig> {
        let api_key = non_empty(self.api_key.as_deref())
            .with_context(|| format!("api_key missing; set it in the config file or {ENV_API_KEY}"))?;
        let api_secret = non_empty(self.api_secret.as_deref()).with_context(|| {
            format!("api_secret missing; set it in the config file or {ENV_API_SECRET}")
        })?;

        let api = ApiConfig::new(api_key, api_secret);
        Ok(match non_empty(self.base_url.as_deref()) {
            Some(base_url) => api.with_base_url(base_url),
            None => api,
        })
    }

    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = ClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            if secs == 0 {
                bail!("timeout_secs must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            if secs == 0 {
                bail!("connect_timeout_secs must be greater than zero");
            }
            config.connect_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use zoom_api_adapter::http::DEFAULT_BASE_URL;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
base_url: "http://localhost:9000/v2"
api_key: "k"
api_secret: "s"
timeout_secs: 5
connect_timeout_secs: 2
"#;
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();

        let api = config.api_config().unwrap();
        assert_eq!(api.api_key(), "k");
        assert_eq!(api.base_url(), "http://localhost:9000/v2");

        let client = config.client_config().unwrap();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_missing_base_url_uses_vendor_default() {
        let config: CliConfig = serde_yaml::from_str("api_key: k\napi_secret: s\n").unwrap();

        assert_eq!(config.api_config().unwrap().base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.client_config().unwrap().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config: CliConfig = serde_yaml::from_str("api_key: file-key\napi_secret: file-secret\n").unwrap();

        let config = config.with_env_overrides(env(&[
            (ENV_API_KEY, "env-key"),
            (ENV_BASE_URL, "http://127.0.0.1:8080"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.api_secret.as_deref(), Some("file-secret"));
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let config: CliConfig = serde_yaml::from_str("api_key: k\napi_secret: s\n").unwrap();

        let config = config.with_env_overrides(env(&[(ENV_API_SECRET, "")]));

        assert_eq!(config.api_secret.as_deref(), Some("s"));
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let config: CliConfig = serde_yaml::from_str("api_key: k\n").unwrap();

        let err = config.api_config().unwrap_err();
        assert!(err.to_string().contains("api_secret"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config: CliConfig = serde_yaml::from_str("timeout_secs: 0\n").unwrap();

        assert!(config.client_config().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config: CliConfig = serde_yaml::from_str("api_key: k\napi_secret: hunter2\n").unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}

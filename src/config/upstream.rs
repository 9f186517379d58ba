use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::constants::CLI_TIMEOUT_MS;
use crate::constants::DEFAULT_API_BASE_URL;
use crate::constants::DEFAULT_SITE_ORIGIN;
use crate::constants::PROXY_TIMEOUT_MS;
use crate::constants::TIER_STATS_PATH;
use crate::constants::VERIFY_PATH;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    // Origin / Referer sent along with every request
    pub site_origin: String,
    pub verify_path: String,
    pub tier_stats_path: String,
    pub cli_timeout_ms: u64,
    pub proxy_timeout_ms: u64,
    // Random User-Agent and forwarded IPs per request
    pub rotate_headers: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            verify_path: VERIFY_PATH.to_string(),
            tier_stats_path: TIER_STATS_PATH.to_string(),
            cli_timeout_ms: CLI_TIMEOUT_MS,
            proxy_timeout_ms: PROXY_TIMEOUT_MS,
            rotate_headers: true,
        }
    }
}

impl UpstreamConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn base(&self) -> Result<Url, ConfigError> {
        // Url::join drops the last path segment unless the base ends with a slash
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|e| ConfigError::InvalidValue {
            field: "upstream.base_url",
            reason: format!("{}: {}", self.base_url, e),
        })
    }

    fn endpoint(
        &self,
        field: &'static str,
        path: &str,
    ) -> Result<Url, ConfigError> {
        self.base()?
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidValue { field, reason: format!("{}: {}", path, e) })
    }

    pub fn verify_url(&self) -> Result<Url, ConfigError> {
        self.endpoint("upstream.verify_path", &self.verify_path)
    }

    pub fn tier_stats_url(&self) -> Result<Url, ConfigError> {
        self.endpoint("upstream.tier_stats_path", &self.tier_stats_path)
    }

    pub fn referer(&self) -> String {
        format!("{}/", self.site_origin.trim_end_matches('/'))
    }

    pub fn cli_timeout(&self) -> Duration {
        Duration::from_millis(self.cli_timeout_ms)
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_millis(self.proxy_timeout_ms)
    }
}

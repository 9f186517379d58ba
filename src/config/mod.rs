pub mod batch;
pub mod log;
pub mod proxy;
pub mod upstream;

use std::path::Path;

use ::config::Environment;
use ::config::File;
use serde::Deserialize;
use serde::Serialize;

pub use batch::BatchConfig;
pub use log::LoggingConfig;
pub use proxy::ProxyConfig;
pub use upstream::UpstreamConfig;

use crate::Result;
use crate::err_with_loc;
use crate::error::ConfigError;

/// Default config file name, looked up in the working directory (any format `config` understands).
pub const DEFAULT_CONFIG_FILE: &str = "Config";

/// Environment prefix, e.g. `AIRDROP__UPSTREAM__BASE_URL=http://localhost:3000`
pub const ENV_PREFIX: &str = "AIRDROP";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub batch: BatchConfig,
    pub proxy: ProxyConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults, then the config file, then `AIRDROP__*` environment variables.
    ///
    /// An explicit `path` must exist; the default `Config.*` file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_source = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(err_with_loc!(ConfigError::OpenFileError(path.display().to_string())));
                }
                File::from(path).required(true)
            },
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Config = ::config::Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .build()
            .and_then(|raw| raw.try_deserialize())
            .map_err(|e| err_with_loc!(ConfigError::LoadError(e.to_string())))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.upstream.verify_url().map_err(|e| err_with_loc!(e))?;
        self.upstream.tier_stats_url().map_err(|e| err_with_loc!(e))?;
        self.batch.validate().map_err(|e| err_with_loc!(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_upstream_behaviour() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, "https://api.trade.fun");
        assert_eq!(config.upstream.cli_timeout_ms, 10_000);
        assert_eq!(config.upstream.proxy_timeout_ms, 15_000);
        assert!(config.upstream.rotate_headers);
        assert_eq!(config.batch.initial_delay_ms, 1_000);
        assert_eq!(config.batch.max_delay_ms, 5_000);
        assert_eq!(config.batch.backoff_factor, 1.5);
        assert_eq!(config.proxy.port, 8081);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_file_and_env_override() {
        let path = std::env::temp_dir().join(format!("airdrop-checker-{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "[upstream]\nbase_url = \"http://localhost:3000\"\n\n[batch]\nmax_delay_ms = 8000").unwrap();
        }

        let config = temp_env::with_var("AIRDROP__PROXY__PORT", Some("9090"), || Config::load(Some(&path))).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.upstream.base_url, "http://localhost:3000");
        assert_eq!(config.upstream.cli_timeout_ms, 10_000);
        assert_eq!(config.batch.max_delay_ms, 8_000);
        assert_eq!(config.batch.initial_delay_ms, 1_000);
        assert_eq!(config.proxy.port, 9090);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("airdrop-checker-does-not-exist.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("at "));
        assert!(format!("{:#}", err).contains("Failed to open config file"));
    }

    #[test]
    fn rejects_unusable_base_url() {
        let mut config = Config::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}

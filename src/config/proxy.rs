use serde::Deserialize;
use serde::Serialize;

use crate::constants::PROXY_HOST;
use crate::constants::PROXY_PORT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: PROXY_HOST.to_string(),
            port: PROXY_PORT,
        }
    }
}

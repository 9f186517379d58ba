use rand::Rng;
use rand::seq::IndexedRandom;
use reqwest::header::ACCEPT;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::header::CACHE_CONTROL;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::header::ORIGIN;
use reqwest::header::PRAGMA;
use reqwest::header::REFERER;
use reqwest::header::USER_AGENT;

use crate::config::UpstreamConfig;
use crate::constants::USER_AGENTS;
use crate::error::VerifyError;

/// Browser-looking header set for one outbound request.
///
/// With rotation on, each request gets a random User-Agent from
/// [`USER_AGENTS`] and two random dotted quads for the forwarded-IP headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProfile {
    pub user_agent: &'static str,
    pub forwarded_for: Option<String>,
    pub real_ip: Option<String>,
    pub origin: String,
    pub referer: String,
}

pub fn random_user_agent() -> &'static str {
    USER_AGENTS.choose(&mut rand::rng()).copied().unwrap_or(USER_AGENTS[0])
}

/// Four octets in `0..255`. Not a real address and not meant to be one.
pub fn random_ip() -> String {
    let mut rng = rand::rng();
    let octets: [u8; 4] = std::array::from_fn(|_| rng.random_range(0..255));
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

impl HeaderProfile {
    pub fn generate(config: &UpstreamConfig) -> Self {
        let origin = config.site_origin.trim_end_matches('/').to_string();
        let referer = config.referer();

        if config.rotate_headers {
            Self {
                user_agent: random_user_agent(),
                forwarded_for: Some(random_ip()),
                real_ip: Some(random_ip()),
                origin,
                referer,
            }
        } else {
            Self {
                user_agent: USER_AGENTS[0],
                forwarded_for: None,
                real_ip: None,
                origin,
                referer,
            }
        }
    }

    pub fn to_header_map(&self) -> Result<HeaderMap, VerifyError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(HeaderName::from_static("sec-fetch-dest"), HeaderValue::from_static("empty"));
        headers.insert(HeaderName::from_static("sec-fetch-mode"), HeaderValue::from_static("cors"));
        headers.insert(HeaderName::from_static("sec-fetch-site"), HeaderValue::from_static("cross-site"));
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent));
        headers.insert(ORIGIN, header_value(&self.origin)?);
        headers.insert(REFERER, header_value(&self.referer)?);

        if let Some(ip) = &self.forwarded_for {
            headers.insert(HeaderName::from_static("x-forwarded-for"), header_value(ip)?);
        }
        if let Some(ip) = &self.real_ip {
            headers.insert(HeaderName::from_static("x-real-ip"), header_value(ip)?);
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, VerifyError> {
    HeaderValue::from_str(value).map_err(|e| VerifyError::Local(format!("invalid header value {:?}: {}", value, e)))
}

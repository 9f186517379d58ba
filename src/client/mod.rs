pub mod headers;
pub mod validator;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use tracing::debug;
use tracing::warn;
use url::Url;

pub use headers::HeaderProfile;
pub use validator::is_valid_solana_address;
pub use validator::validate_wallet_address;

use crate::Result;
use crate::config::UpstreamConfig;
use crate::err_with_loc;
use crate::error::VerifyError;
use crate::model::ApiEnvelope;
use crate::model::TierStats;
use crate::model::VerificationResult;

/// What the CLI needs from the upstream airdrop service.
#[async_trait]
pub trait AirdropApi: Send + Sync {
    async fn verify_wallet(
        &self,
        address: &str,
    ) -> std::result::Result<VerificationResult, VerifyError>;

    async fn tier_stats(&self) -> std::result::Result<TierStats, VerifyError>;
}

/// HTTP client for the upstream verify and tier-stats endpoints.
///
/// Holds no mutable state; cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct AirdropClient {
    http: Client,
    config: Arc<UpstreamConfig>,
    verify_url: Url,
    tier_stats_url: Url,
}

impl AirdropClient {
    pub fn new(
        config: UpstreamConfig,
        timeout: Duration,
    ) -> Result<Self> {
        let verify_url = config.verify_url().map_err(|e| err_with_loc!(e))?;
        let tier_stats_url = config.tier_stats_url().map_err(|e| err_with_loc!(e))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| err_with_loc!(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
            verify_url,
            tier_stats_url,
        })
    }

    pub fn for_cli(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.clone(), config.cli_timeout())
    }

    pub fn for_proxy(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.clone(), config.proxy_timeout())
    }

    /// POSTs the wallet and returns the raw upstream body on any 2xx, whatever its `success` says.
    pub async fn relay_verify(
        &self,
        address: &str,
    ) -> std::result::Result<Value, VerifyError> {
        let address = validate_wallet_address(address)?;
        let response = self.post_verify(address).await?;
        response.json::<Value>().await.map_err(VerifyError::from_transport)
    }

    async fn post_verify(
        &self,
        address: &str,
    ) -> std::result::Result<Response, VerifyError> {
        let headers = HeaderProfile::generate(&self.config).to_header_map()?;
        debug!("airdrop_client::post_verify::{}", address);

        let response = self
            .http
            .post(self.verify_url.clone())
            .headers(headers)
            .json(&json!({ "walletAddress": address }))
            .send()
            .await
            .map_err(VerifyError::from_transport)?;

        ensure_success(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> std::result::Result<T, VerifyError> {
        let envelope = response.json::<ApiEnvelope<T>>().await.map_err(VerifyError::from_transport)?;
        match envelope {
            ApiEnvelope { success: true, data: Some(data), .. } => Ok(data),
            ApiEnvelope { message, .. } => Err(VerifyError::Rejected(
                message.unwrap_or_else(|| "upstream reported failure".to_string()),
            )),
        }
    }
}

// Non-2xx responses keep their status and the upstream `message`, if the body has one
async fn ensure_success(response: Response) -> std::result::Result<Response, VerifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned));

    warn!("airdrop_client::upstream_status::{}::{:?}", status.as_u16(), message);
    Err(VerifyError::Upstream { status: status.as_u16(), message })
}

#[async_trait]
impl AirdropApi for AirdropClient {
    async fn verify_wallet(
        &self,
        address: &str,
    ) -> std::result::Result<VerificationResult, VerifyError> {
        let address = validate_wallet_address(address)?;
        let response = self.post_verify(address).await?;
        Self::unwrap_envelope(response).await
    }

    async fn tier_stats(&self) -> std::result::Result<TierStats, VerifyError> {
        let headers = HeaderProfile::generate(&self.config).to_header_map()?;
        debug!("airdrop_client::tier_stats");

        let response = self
            .http
            .get(self.tier_stats_url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(VerifyError::from_transport)?;

        let response = ensure_success(response).await?;
        Self::unwrap_envelope(response).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header_exists;
    use wiremock::matchers::method;
    use wiremock::matchers::path;

    use super::*;
    use crate::test_utils::fixtures::TestFixtures;

    fn client_for(server: &MockServer) -> AirdropClient {
        AirdropClient::new(UpstreamConfig::with_base_url(server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn verify_returns_data_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/airdrop/verify"))
            .and(body_json(json!({ "walletAddress": TestFixtures::WALLET })))
            .and(header_exists("user-agent"))
            .and(header_exists("x-forwarded-for"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"eligible": true, "tokenAmount": "100"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).verify_wallet(TestFixtures::WALLET).await.unwrap();
        assert!(result.eligible);
        assert_eq!(result.token_amount, "100");
    }

    #[tokio::test]
    async fn invalid_address_never_hits_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let client = client_for(&server);
        let err = client.verify_wallet("not-a-wallet").await.unwrap_err();
        assert_eq!(err, VerifyError::InvalidAddress("not-a-wallet".into()));

        let err = client.relay_verify("").await.unwrap_err();
        assert_eq!(err, VerifyError::MissingAddress);
    }

    #[tokio::test]
    async fn success_false_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/airdrop/verify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "Not found"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert_eq!(err, VerifyError::Rejected("Not found".into()));

        // relay does not judge the body
        let relayed = client.relay_verify(TestFixtures::WALLET).await.unwrap();
        assert_eq!(relayed, json!({"success": false, "message": "Not found"}));
    }

    #[tokio::test]
    async fn rate_limit_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "Too many requests"})))
            .mount(&server)
            .await;

        let err = client_for(&server).verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert_eq!(err, VerifyError::Upstream { status: 429, message: Some("Too many requests".into()) });
        assert_eq!(err.upstream_status(), Some(crate::error::UpstreamStatus::RateLimited));
    }

    #[tokio::test]
    async fn non_json_error_body_has_no_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert_eq!(err, VerifyError::Upstream { status: 502, message: None });
    }

    #[tokio::test]
    async fn garbage_success_body_is_local() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert!(matches!(err, VerifyError::Local(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_network() {
        let client =
            AirdropClient::new(UpstreamConfig::with_base_url("http://127.0.0.1:1"), Duration::from_secs(2)).unwrap();
        let err = client.verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert!(matches!(err, VerifyError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            AirdropClient::new(UpstreamConfig::with_base_url(server.uri()), Duration::from_millis(100)).unwrap();
        let err = client.verify_wallet(TestFixtures::WALLET).await.unwrap_err();
        assert!(matches!(err, VerifyError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn tier_stats_unwraps_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/airdrop/tier-eligible-counts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"tier1": 10, "tier2": 0, "total": 10}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let stats = client_for(&server).tier_stats().await.unwrap();
        assert_eq!(stats.total, 10.0);
        assert_eq!(stats.rows().len(), 1);
    }
}

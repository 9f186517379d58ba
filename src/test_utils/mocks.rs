use async_trait::async_trait;
use mockall::mock;

use crate::client::AirdropApi;
use crate::error::VerifyError;
use crate::model::TierStats;
use crate::model::VerificationResult;

// Mock for the upstream airdrop service
mock! {
    pub AirdropApi {}

    #[async_trait]
    impl AirdropApi for AirdropApi {
        async fn verify_wallet(&self, address: &str) -> Result<VerificationResult, VerifyError>;
        async fn tier_stats(&self) -> Result<TierStats, VerifyError>;
    }
}

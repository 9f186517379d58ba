pub mod batch;
pub mod tier;
pub mod verification;

pub use batch::BatchOutcome;
pub use batch::BatchReport;
pub use batch::BatchResult;
pub use tier::TierRow;
pub use tier::TierStats;
pub use verification::ApiEnvelope;
pub use verification::PlatformStats;
pub use verification::VerificationResult;

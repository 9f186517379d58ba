use thiserror::Error;

/// Everything that can go wrong while asking the upstream API about a wallet.
///
/// Validation failures never reach the network. `Upstream` keeps the original
/// status code so the proxy can pass it through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Wallet address is required")]
    MissingAddress,

    #[error("Invalid Solana wallet address format: {0}")]
    InvalidAddress(String),

    #[error("Upstream rejected the request: {0}")]
    Rejected(String),

    #[error("Upstream returned status {status}: {}", message.as_deref().unwrap_or("Unknown API error"))]
    Upstream { status: u16, message: Option<String> },

    #[error("Unable to reach API server: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Local(String),
}

impl VerifyError {
    pub fn upstream_status(&self) -> Option<UpstreamStatus> {
        match self {
            VerifyError::Upstream { status, .. } => Some(UpstreamStatus::from_code(*status)),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, VerifyError::MissingAddress | VerifyError::InvalidAddress(_))
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_builder() {
            VerifyError::Local(err.to_string())
        } else if let Some(status) = err.status() {
            VerifyError::Upstream { status: status.as_u16(), message: None }
        } else {
            VerifyError::Network(err.to_string())
        }
    }
}

/// Upstream HTTP failures that get their own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStatus {
    RateLimited,
    NotFound,
    ServerError,
    Other(u16),
}

impl UpstreamStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            429 => UpstreamStatus::RateLimited,
            404 => UpstreamStatus::NotFound,
            500 => UpstreamStatus::ServerError,
            other => UpstreamStatus::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            UpstreamStatus::RateLimited => 429,
            UpstreamStatus::NotFound => 404,
            UpstreamStatus::ServerError => 500,
            UpstreamStatus::Other(code) => *code,
        }
    }

    pub fn headline(&self) -> Option<&'static str> {
        match self {
            UpstreamStatus::RateLimited => Some("Rate Limited"),
            UpstreamStatus::NotFound => Some("Not Found"),
            UpstreamStatus::ServerError => Some("Server Error"),
            UpstreamStatus::Other(_) => None,
        }
    }

    /// Message shown by the CLI. Unclassified statuses fall back to whatever the upstream said.
    pub fn cli_message(&self, upstream_message: Option<&str>) -> String {
        match self {
            UpstreamStatus::RateLimited => "Too many requests. Please wait a moment and try again.".to_string(),
            UpstreamStatus::NotFound => "API endpoint not found.".to_string(),
            UpstreamStatus::ServerError => "Internal server error. Please try again later.".to_string(),
            UpstreamStatus::Other(_) => upstream_message.unwrap_or("Unknown API error").to_string(),
        }
    }

    /// `error` field of the proxy's failure body.
    pub fn proxy_error(&self) -> &'static str {
        match self {
            UpstreamStatus::RateLimited => "Rate limited. Please try again later.",
            UpstreamStatus::NotFound => "API endpoint not found.",
            UpstreamStatus::ServerError => "Internal server error. Please try again later.",
            UpstreamStatus::Other(_) => "API request failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(429, UpstreamStatus::RateLimited)]
    #[case(404, UpstreamStatus::NotFound)]
    #[case(500, UpstreamStatus::ServerError)]
    #[case(502, UpstreamStatus::Other(502))]
    #[case(403, UpstreamStatus::Other(403))]
    fn classifies_upstream_codes(
        #[case] code: u16,
        #[case] expected: UpstreamStatus,
    ) {
        let status = UpstreamStatus::from_code(code);
        assert_eq!(status, expected);
        assert_eq!(status.code(), code);
    }

    #[test]
    fn unclassified_status_uses_upstream_message() {
        let status = UpstreamStatus::from_code(418);
        assert_eq!(status.cli_message(Some("teapot")), "teapot");
        assert_eq!(status.cli_message(None), "Unknown API error");
        assert_eq!(status.proxy_error(), "API request failed");
        assert!(status.headline().is_none());
    }

    #[test]
    fn rate_limit_wording() {
        let err = VerifyError::Upstream { status: 429, message: Some("slow down".into()) };
        let status = err.upstream_status().unwrap();
        assert_eq!(status.headline(), Some("Rate Limited"));
        assert!(status.cli_message(Some("slow down")).starts_with("Too many requests"));
        assert!(status.proxy_error().contains("Rate limited"));
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(VerifyError::MissingAddress.is_validation());
        assert!(VerifyError::InvalidAddress("x".into()).is_validation());
        assert!(!VerifyError::Network("down".into()).is_validation());
        assert!(VerifyError::Network("down".into()).upstream_status().is_none());
    }
}

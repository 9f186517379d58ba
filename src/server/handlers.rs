use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::web;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::client::AirdropClient;
use crate::client::validate_wallet_address;
use crate::error::UpstreamStatus;
use crate::error::VerifyError;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into(), details: None }
    }

    fn with_details(
        error: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self { success: false, error: error.into(), details: Some(details.into()) }
    }
}

/// Status code and body for every way a verify request can fail.
pub fn error_response(err: &VerifyError) -> HttpResponse {
    match err {
        VerifyError::MissingAddress => HttpResponse::BadRequest().json(ErrorBody::new("Wallet address is required")),
        VerifyError::InvalidAddress(_) => {
            HttpResponse::BadRequest().json(ErrorBody::new("Invalid Solana wallet address format"))
        },
        VerifyError::Upstream { status, message } => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).json(ErrorBody::with_details(
                UpstreamStatus::from_code(*status).proxy_error(),
                message.as_deref().unwrap_or("Unknown error"),
            ))
        },
        VerifyError::Network(_) => HttpResponse::ServiceUnavailable().json(ErrorBody::with_details(
            "Unable to reach the airdrop API. Please try again later.",
            "Network error",
        )),
        VerifyError::Rejected(details) | VerifyError::Local(details) => {
            HttpResponse::InternalServerError().json(ErrorBody::with_details("Internal server error", details.as_str()))
        },
    }
}

/// Pull `walletAddress` out of a raw request body and shape-check it.
pub fn extract_wallet_address(body: &[u8]) -> Result<String, VerifyError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| VerifyError::MissingAddress)?;
    match payload.get("walletAddress") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(VerifyError::MissingAddress),
        Some(Value::String(address)) => validate_wallet_address(address).map(str::to_string),
        Some(other) => Err(VerifyError::InvalidAddress(other.to_string())),
    }
}

pub async fn verify_wallet(
    client: web::Data<AirdropClient>,
    body: web::Bytes,
) -> HttpResponse {
    let address = match extract_wallet_address(&body) {
        Ok(address) => address,
        Err(e) => {
            info!("proxy::verify::rejected_input::{}", e);
            return error_response(&e);
        },
    };

    match client.relay_verify(&address).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => {
            match &e {
                VerifyError::Upstream { .. } => warn!("proxy::verify::upstream_error::{}::{}", address, e),
                _ => error!("proxy::verify::api_error::{}::{}", address, e),
            }
            error_response(&e)
        },
    }
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody::new("Method not allowed"))
}

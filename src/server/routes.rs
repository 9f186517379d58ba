use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

use super::handlers::method_not_allowed;
use super::handlers::preflight;
use super::handlers::verify_wallet;

pub const VERIFY_ROUTES: [&str; 2] = ["/airdrop/verify", "/api/airdrop/verify"];

/// Sent on every response, including errors and preflights.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

pub fn airdrop_routes(cfg: &mut web::ServiceConfig) {
    for path in VERIFY_ROUTES {
        cfg.service(
            web::resource(path)
                .route(web::post().to(verify_wallet))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
    }
}

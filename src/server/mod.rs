pub mod handlers;
pub mod routes;

pub use handlers::ErrorBody;
pub use routes::airdrop_routes;
pub use routes::cors_headers;

pub mod client;
pub mod config;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod model;
pub mod server;
pub mod tracing;
pub mod utils;

pub use client::AirdropApi;
pub use client::AirdropClient;
pub use error::VerifyError;

// Test utilities - only compiled during testing
#[cfg(test)]
pub mod test_utils {
    pub mod fixtures;
    pub mod mocks;
}

pub use error::Result;

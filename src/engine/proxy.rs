use std::path::PathBuf;

use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware;
use actix_web::web;
use clap::Parser;
use tracing::info;

use crate::Result;
use crate::client::AirdropClient;
use crate::config::Config;
use crate::err_with_loc;
use crate::server::airdrop_routes;
use crate::server::cors_headers;
use crate::tracing::setup_tracing;

#[derive(Debug, Clone, Parser)]
#[command(name = "proxy", version, about = "HTTP proxy in front of the airdrop verify endpoint")]
pub struct ProxyArgs {
    /// Config file (defaults to ./Config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Proxy {
    pub config: Config,
}

impl Proxy {
    pub async fn run(args: ProxyArgs) -> Result<()> {
        dotenvy::dotenv().ok();

        let config = Config::load(args.config.as_deref())?;
        if let Err(e) = setup_tracing("proxy", &config.logging) {
            eprintln!("{:#}", e);
        }

        Proxy { config }.serve().await
    }

    pub async fn serve(self) -> Result<()> {
        let client = web::Data::new(AirdropClient::for_proxy(&self.config.upstream)?);
        let host = self.config.proxy.host.clone();
        let port = self.config.proxy.port;

        info!("proxy::upstream::{}", self.config.upstream.base_url);
        info!("proxy::listening::{}:{}", host, port);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors_headers())
                .app_data(client.clone())
                .configure(airdrop_routes)
        })
        .bind((host.as_str(), port))
        .map_err(|e| err_with_loc!(format!("Failed to bind {}:{}: {}", host, port, e)))?
        .run()
        .await
        .map_err(|e| err_with_loc!(format!("Proxy server error: {}", e)))?;

        info!("proxy::shutdown");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  proxy: POST /airdrop/verify relay with CORS for browser clients
// ─────────────────────────────────────────────────────────────────────────────
use airdrop_checker::engine::Proxy;
use airdrop_checker::engine::ProxyArgs;
use airdrop_checker::error::Result;
use clap::Parser;

#[actix_web::main]
async fn main() -> Result<()> {
    Proxy::run(ProxyArgs::parse()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
//  checker: airdrop eligibility from the command line
//
//  checker <wallet>             single wallet, full status card
//  checker <wallet> <wallet>..  sequential batch with adaptive delay
//  checker --file wallets.txt   batch from a newline-separated list
//  checker --stats              eligible-wallet counts per tier
// ─────────────────────────────────────────────────────────────────────────────
use airdrop_checker::engine::Checker;
use airdrop_checker::engine::CheckerArgs;
use airdrop_checker::error::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    Checker::run(CheckerArgs::parse()).await?;
    Ok(())
}

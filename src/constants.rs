/// ======================= Upstream API =======================
/// Airdrop API base URL - public endpoint, not a secret
pub const DEFAULT_API_BASE_URL: &str = "https://api.trade.fun";

/// Site the upstream frontend is served from, used for Origin / Referer
pub const DEFAULT_SITE_ORIGIN: &str = "https://trade.fun";

pub const VERIFY_PATH: &str = "api/airdrop/verify";

pub const TIER_STATS_PATH: &str = "api/airdrop/tier-eligible-counts";

pub const CLI_TIMEOUT_MS: u64 = 10_000;

pub const PROXY_TIMEOUT_MS: u64 = 15_000;

/// ======================= Batch delay =======================
pub const BATCH_INITIAL_DELAY_MS: u64 = 1_000;

pub const BATCH_BACKOFF_FACTOR: f64 = 1.5;

pub const BATCH_MAX_DELAY_MS: u64 = 5_000;

/// ======================= Proxy server =======================
pub const PROXY_HOST: &str = "0.0.0.0";

pub const PROXY_PORT: u16 = 8081;

/// ======================= Wallets =======================
/// Base58 alphabet without 0, O, I and l; 32 to 44 characters
pub const SOLANA_ADDRESS_PATTERN: &str = r"^[1-9A-HJ-NP-Za-km-z]{32,44}$";

pub const EXAMPLE_WALLET: &str = "2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN";

/// ======================= Headers =======================
pub const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
];

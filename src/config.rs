use std::env;
use std::time::Duration;

/// Public RPC endpoint used when `RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://rpc.ankr.com/solana";

/// Mango transaction-log service used when `LOG_INDEX_URL` is not set.
pub const DEFAULT_INDEX_URL: &str =
    "https://mango-transaction-log.herokuapp.com/v3/user-data/wallet-mango-accounts";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and request deadline for the two network-facing clients.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub rpc_url: String,
    pub index_url: String,
    pub request_timeout: Duration,
}

impl ResolverConfig {
    /// Read configuration from the environment.
    ///
    /// Missing or unparsable values fall back to the defaults, so
    /// construction never fails.
    pub fn from_env() -> Self {
        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let index_url =
            env::var("LOG_INDEX_URL").unwrap_or_else(|_| DEFAULT_INDEX_URL.to_string());

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Self {
            rpc_url,
            index_url,
            request_timeout,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

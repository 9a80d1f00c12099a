use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::chain::AccountRecord;
use crate::error::Error;

/// Source of on-chain account records.
///
/// `Ok(None)` means no account exists at the address — a valid outcome,
/// distinct from a transport failure.
#[expect(
    async_fn_in_trait,
    reason = "the resolver is generic over its sources; no Send bound or dyn use is needed"
)]
pub trait AccountSource {
    async fn account(&self, address: &Pubkey) -> Result<Option<AccountRecord>, Error>;
}

/// Account source backed by a Solana JSON-RPC node.
///
/// Reads at `confirmed` commitment; a log listing does not need to wait
/// for finalized state. One RPC call per lookup, no retries; callers
/// wanting resilience wrap this themselves.
pub struct RpcAccountSource {
    rpc: RpcClient,
}

impl RpcAccountSource {
    pub fn new(rpc_url: String, request_timeout: Duration) -> Self {
        Self {
            rpc: RpcClient::new_with_timeout_and_commitment(
                rpc_url,
                request_timeout,
                CommitmentConfig::confirmed(),
            ),
        }
    }
}

impl AccountSource for RpcAccountSource {
    async fn account(&self, address: &Pubkey) -> Result<Option<AccountRecord>, Error> {
        let response = self
            .rpc
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .await?;

        Ok(response.value.map(|account| AccountRecord {
            owner: account.owner,
            data: account.data,
        }))
    }
}

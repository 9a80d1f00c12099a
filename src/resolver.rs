use std::sync::Mutex;

use crate::address::parse_address;
use crate::chain::fetch::{AccountSource, RpcAccountSource};
use crate::chain::layout::decode_owner;
use crate::chain::{OwnerClass, classify};
use crate::config::ResolverConfig;
use crate::error::Error;
use crate::index::{HttpLogIndex, LogIndex};

struct Memo {
    address: String,
    accounts: Vec<String>,
}

/// End-to-end address resolution: validate, fetch, classify, decode, look up.
///
/// The only state held across calls is the last completed resolution, kept
/// so that re-submitting the same address does not re-query the network.
/// Dropping the future returned by [`resolve`](Resolver::resolve) cancels an
/// in-flight resolution; the pipeline performs no writes, so a cancelled
/// resolution leaves nothing behind.
pub struct Resolver<S, I> {
    source: S,
    index: I,
    memo: Mutex<Option<Memo>>,
}

impl Resolver<RpcAccountSource, HttpLogIndex> {
    /// Wire the production RPC and index clients from configuration.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, Error> {
        let source = RpcAccountSource::new(config.rpc_url.clone(), config.request_timeout);
        let index = HttpLogIndex::new(config.index_url.clone(), config.request_timeout)?;
        Ok(Self::new(source, index))
    }
}

impl<S: AccountSource, I: LogIndex> Resolver<S, I> {
    pub fn new(source: S, index: I) -> Self {
        Self {
            source,
            index,
            memo: Mutex::new(None),
        }
    }

    /// Resolve an address string to the accounts with downloadable logs.
    ///
    /// Only transport failures are errors. Everything else that can stop
    /// a resolution (invalid address, unrecognized owning program,
    /// undecodable account data) resolves to an empty list, which the
    /// caller reads as "no logs here".
    pub async fn resolve(&self, address: &str) -> Result<Vec<String>, Error> {
        let Some(pubkey) = parse_address(address) else {
            tracing::debug!(address, "not a valid address, nothing to resolve");
            return Ok(Vec::new());
        };

        if let Some(accounts) = self.memoized(address) {
            tracing::debug!(address, "address unchanged, serving last resolution");
            return Ok(accounts);
        }

        let record = self.source.account(&pubkey).await?;
        let owner_class = classify(record.as_ref());
        tracing::debug!(address, owner_class = owner_class.as_ref(), "classified account");

        let wallet = match owner_class {
            // No record, or a plain wallet: the address itself is the wallet.
            OwnerClass::Missing | OwnerClass::SystemOwned => address.to_string(),
            OwnerClass::MangoOwned => {
                // classify only yields MangoOwned for an existing record
                let data = record.map(|record| record.data).unwrap_or_default();
                match decode_owner(&data) {
                    Ok(decoded) => decoded.owner_wallet.to_string(),
                    Err(err) => {
                        tracing::warn!(address, %err, "mango account did not decode");
                        return Ok(self.remember(address, Vec::new()));
                    }
                }
            }
            OwnerClass::OtherOwned => {
                tracing::debug!(address, "account belongs to an unrecognized program");
                return Ok(self.remember(address, Vec::new()));
            }
        };

        let accounts = self.index.wallet_accounts(&wallet).await?;
        Ok(self.remember(address, accounts))
    }

    fn memoized(&self, address: &str) -> Option<Vec<String>> {
        let memo = self.memo.lock().ok()?;
        memo.as_ref()
            .filter(|memo| memo.address == address)
            .map(|memo| memo.accounts.clone())
    }

    fn remember(&self, address: &str, accounts: Vec<String>) -> Vec<String> {
        if let Ok(mut memo) = self.memo.lock() {
            *memo = Some(Memo {
                address: address.to_string(),
                accounts: accounts.clone(),
            });
        }
        accounts
    }
}

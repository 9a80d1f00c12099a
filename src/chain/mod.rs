pub mod fetch;
pub mod layout;

use solana_sdk::pubkey::Pubkey;

/// Owner of plain, non-program-controlled accounts (wallets).
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// The Mango v3 program, owner of on-chain margin accounts.
pub const MANGO_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("mv3ekLzLbnVPNxjSKvqBpU3ZeZXPQdEC3bp5MDEBG68");

/// On-chain state of an existing account, as returned by a node.
///
/// A missing account is modeled as `Option::<AccountRecord>::None` by the
/// fetch layer, distinct from an existing account owned by the system
/// program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum OwnerClass {
    /// No account exists at the address.
    Missing,
    /// A plain wallet account.
    SystemOwned,
    /// A Mango v3 margin account.
    MangoOwned,
    /// An account of some unrelated program.
    OtherOwned,
}

/// Classify an account record by its owning program.
pub fn classify(record: Option<&AccountRecord>) -> OwnerClass {
    match record {
        None => OwnerClass::Missing,
        Some(record) if record.owner == SYSTEM_PROGRAM_ID => OwnerClass::SystemOwned,
        Some(record) if record.owner == MANGO_PROGRAM_ID => OwnerClass::MangoOwned,
        Some(_) => OwnerClass::OtherOwned,
    }
}

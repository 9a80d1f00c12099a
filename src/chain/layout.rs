//! Fixed-offset view of the Mango v3 `MangoAccount` state.
//!
//! The account starts with an 8-byte `MetaData` header (`data_type`,
//! `version`, `is_initialized`, 5 padding bytes), followed by the
//! `mango_group` and `owner` public keys. Only the owner wallet is needed
//! here; the rest of the (much larger) account is ignored.

use solana_sdk::pubkey::Pubkey;

/// Length of the `MetaData` header.
pub const META_DATA_LEN: usize = 8;

/// `data_type` tag of a `MangoAccount` in the v3 state enum.
pub const MANGO_ACCOUNT_DATA_TYPE: u8 = 1;

/// Start of the owner wallet field, after the header and `mango_group`.
pub const OWNER_OFFSET: usize = META_DATA_LEN + 32;

/// End of the owner wallet field; the minimum decodable account length.
pub const OWNER_END: usize = OWNER_OFFSET + 32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("account data too short: {len} bytes, need at least 72")]
    TooShort { len: usize },

    #[error("unexpected data type tag {data_type}, expected a mango account (1)")]
    UnexpectedDataType { data_type: u8 },
}

/// The decoded portion of a Mango v3 account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAccount {
    /// The wallet that opened the margin account.
    pub owner_wallet: Pubkey,
}

/// Extract the owner wallet from raw Mango account data.
///
/// Fails on truncated data or a mismatched `data_type` tag; both occur in
/// the wild (garbage at a reused address, state from another protocol
/// version) and the caller is expected to treat them as "nothing to
/// resolve" rather than fatal.
pub fn decode_owner(data: &[u8]) -> Result<DecodedAccount, DecodeError> {
    if data.len() < OWNER_END {
        return Err(DecodeError::TooShort { len: data.len() });
    }

    let data_type = data[0];
    if data_type != MANGO_ACCOUNT_DATA_TYPE {
        return Err(DecodeError::UnexpectedDataType { data_type });
    }

    let mut owner = [0_u8; 32];
    owner.copy_from_slice(&data[OWNER_OFFSET..OWNER_END]);

    Ok(DecodedAccount {
        owner_wallet: Pubkey::new_from_array(owner),
    })
}

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

/// Parse a base58 address string into a 32-byte public key.
///
/// Returns `None` for anything that does not decode to exactly 32 bytes,
/// including the empty string and characters outside the base58 alphabet.
pub fn parse_address(address: &str) -> Option<Pubkey> {
    Pubkey::from_str(address).ok()
}

/// Whether a string is a structurally valid address.
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_some()
}

/// Shorten an address for display: first five and last five characters.
pub fn abbreviate_address(address: &str) -> String {
    let len = address.chars().count();
    if len <= 10 {
        return address.to_string();
    }
    let head: String = address.chars().take(5).collect();
    let tail: String = address.chars().skip(len - 5).collect();
    format!("{head}...{tail}")
}

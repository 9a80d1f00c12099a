#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod address;
pub mod chain;
pub mod config;
pub mod error;
pub mod index;
pub mod resolver;

pub use address::{abbreviate_address, is_valid_address, parse_address};
pub use chain::fetch::{AccountSource, RpcAccountSource};
pub use chain::layout::{DecodeError, DecodedAccount, decode_owner};
pub use chain::{AccountRecord, MANGO_PROGRAM_ID, OwnerClass, SYSTEM_PROGRAM_ID, classify};
pub use config::ResolverConfig;
pub use error::Error;
pub use index::{HttpLogIndex, LogIndex, parse_index_body};
pub use resolver::Resolver;

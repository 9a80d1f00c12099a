#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("rpc transport failure: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("log index transport failure: {0}")]
    Index(#[from] reqwest::Error),
}

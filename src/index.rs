use std::time::Duration;

use crate::error::Error;

/// One row of the transaction-log service response.
#[derive(serde::Deserialize)]
struct IndexRow {
    mango_account: String,
}

/// Index of wallets to accounts with downloadable log archives.
#[expect(
    async_fn_in_trait,
    reason = "the resolver is generic over its sources; no Send bound or dyn use is needed"
)]
pub trait LogIndex {
    async fn wallet_accounts(&self, wallet: &str) -> Result<Vec<String>, Error>;
}

/// Client for the mango-transaction-log HTTP service.
pub struct HttpLogIndex {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLogIndex {
    pub fn new(base_url: String, request_timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { http, base_url })
    }
}

impl LogIndex for HttpLogIndex {
    async fn wallet_accounts(&self, wallet: &str) -> Result<Vec<String>, Error> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("wallet-pk", wallet)])
            .send()
            .await?;
        let body = response.bytes().await?;

        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => Ok(parse_index_body(&value)),
            Err(err) => {
                tracing::warn!(wallet, %err, "index response is not JSON, treating as no results");
                Ok(Vec::new())
            }
        }
    }
}

/// Extract account identifiers from an index response body, preserving
/// response order.
///
/// Anything other than an array yields no results; the service reports
/// errors as JSON objects, which are not worth distinguishing from "no
/// logs". Rows without a string `mango_account` field are skipped.
pub fn parse_index_body(body: &serde_json::Value) -> Vec<String> {
    let Some(rows) = body.as_array() else {
        tracing::warn!("index response is not an array, treating as no results");
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| serde_json::from_value::<IndexRow>(row.clone()).ok())
        .map(|row| row.mango_account)
        .collect()
}

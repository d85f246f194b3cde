//! `LedgerClient` over the node's REST interface.

use crate::{ClientError, LedgerClient};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;
use tenderkit_core::types::{AccountState, ChainInfo};
use tracing::debug;
use url::Url;

/// A [`LedgerClient`] backed by the ledger node's HTTP query endpoints:
/// `auth/accounts/{address}` for account state and `node_info` for the
/// chain identifier.
///
/// # Example
///
/// ```no_run
/// use tenderkit_providers::{HttpClient, LedgerClient};
/// use std::str::FromStr;
///
/// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::from_str("http://localhost:1317")?;
/// let info = client.chain_info().await?;
/// println!("connected to {}", info.chain_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    url: Url,
}

impl HttpClient {
    /// Creates a client for the node at `url` with a default `reqwest`
    /// client.
    pub fn new(url: Url) -> Self {
        Self::new_with_client(url, Client::new())
    }

    /// Creates a client reusing an existing `reqwest` client, e.g. one
    /// configured with timeouts or proxies.
    pub fn new_with_client(url: Url, client: Client) -> Self {
        Self { client, url }
    }

    /// The node URL this client queries.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.url.join(path).map_err(|err| ClientError::Custom(err.to_string()))
    }
}

impl FromStr for HttpClient {
    type Err = url::ParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        // a trailing slash keeps Url::join from eating the last path segment
        let url = if src.ends_with('/') {
            Url::parse(src)?
        } else {
            Url::parse(&format!("{src}/"))?
        };
        Ok(Self::new(url))
    }
}

#[async_trait]
impl LedgerClient for HttpClient {
    async fn account_state(&self, address: &str) -> Result<AccountState, ClientError> {
        let url = self.endpoint(&format!("auth/accounts/{address}"))?;
        let res = self.client.get(url).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::AccountNotFound(address.to_owned()));
        }
        let body = res.error_for_status()?.bytes().await?;
        let account: AccountResponse = serde_json::from_slice(&body)?;
        let state = account.result.value;
        debug!(
            address,
            account_number = state.account_number,
            sequence = state.sequence,
            "fetched account state"
        );
        Ok(AccountState::new(state.account_number, state.sequence))
    }

    async fn chain_info(&self) -> Result<ChainInfo, ClientError> {
        let url = self.endpoint("node_info")?;
        let body = self.client.get(url).send().await?.error_for_status()?.bytes().await?;
        let info: NodeInfoResponse = serde_json::from_slice(&body)?;
        debug!(chain_id = %info.node_info.network, "fetched chain info");
        Ok(ChainInfo::new(info.node_info.network))
    }
}

#[derive(Deserialize)]
struct AccountResponse {
    result: AccountResult,
}

#[derive(Deserialize)]
struct AccountResult {
    value: AccountValue,
}

#[derive(Deserialize)]
struct AccountValue {
    #[serde(default, deserialize_with = "stringified_u64")]
    account_number: u64,
    #[serde(default, deserialize_with = "stringified_u64")]
    sequence: u64,
}

#[derive(Deserialize)]
struct NodeInfoResponse {
    node_info: NodeInfo,
}

#[derive(Deserialize)]
struct NodeInfo {
    network: String,
}

/// The REST interface renders 64-bit integers as JSON strings; older nodes
/// emit bare numbers. Accept both.
fn stringified_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(num) => Ok(num),
        Raw::Str(src) => src.parse().map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stringified_account_fields() {
        let body = r#"{"result":{"value":{"account_number":"10","sequence":"5"}}}"#;
        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.result.value.account_number, 10);
        assert_eq!(account.result.value.sequence, 5);
    }

    #[test]
    fn parses_numeric_account_fields() {
        let body = r#"{"result":{"value":{"account_number":10,"sequence":5}}}"#;
        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.result.value.account_number, 10);
        assert_eq!(account.result.value.sequence, 5);
    }

    #[test]
    fn missing_sequence_defaults_to_zero() {
        let body = r#"{"result":{"value":{"account_number":"7"}}}"#;
        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.result.value.sequence, 0);
    }

    #[test]
    fn from_str_normalizes_trailing_slash() {
        let client = HttpClient::from_str("http://localhost:1317").unwrap();
        assert_eq!(client.endpoint("node_info").unwrap().path(), "/node_info");
        let client = HttpClient::from_str("http://localhost:1317/lcd/").unwrap();
        assert_eq!(client.endpoint("node_info").unwrap().path(), "/lcd/node_info");
    }
}

//! Read-only clients for the ledger queries that transaction signing
//! depends on: per-account state and the chain identifier.
//!
//! Implement [`LedgerClient`] to back the signing pipeline with a different
//! transport. The trait is deliberately small: both queries are idempotent,
//! independent of each other, and must be answered fresh — implementations
//! must not cache results between calls, because a stale sequence number
//! produces a signature the chain rejects.

mod http;
pub use http::HttpClient;

mod mock;
pub use mock::{MockClient, MockRequest};

use async_trait::async_trait;
use std::fmt::Debug;
use tenderkit_core::types::{AccountState, ChainInfo};
use thiserror::Error;

#[derive(Error, Debug)]
/// Error thrown when querying the ledger service
pub enum ClientError {
    /// The ledger service was unreachable, timed out, or failed at the
    /// transport level. Not retried here; retry policy belongs to the
    /// caller.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The address has no on-chain account yet. Surfaced distinctly so
    /// callers can trigger an account-creation flow.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The service answered with a body this client cannot interpret
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Custom error from an alternative client implementation
    #[error("custom error: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(Box::new(err))
    }
}

/// Read-only queries against a ledger node.
#[async_trait]
pub trait LedgerClient: Debug + Send + Sync {
    /// Current account number and sequence for `address`.
    ///
    /// Fails with [`ClientError::AccountNotFound`] if the address has never
    /// been seen on chain.
    async fn account_state(&self, address: &str) -> Result<AccountState, ClientError>;

    /// Identifier of the network the node serves.
    async fn chain_info(&self) -> Result<ChainInfo, ClientError>;
}

//! Mock client used in test environments.

use crate::{ClientError, LedgerClient};
use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tenderkit_core::types::{AccountState, ChainInfo};

/// A query received by the [`MockClient`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockRequest {
    AccountState(String),
    ChainInfo,
}

/// Queue-backed [`LedgerClient`] stub: push responses up front, run the
/// code under test, then assert on the recorded requests.
///
/// ```
/// use tenderkit_core::types::{AccountState, ChainInfo};
/// use tenderkit_providers::{LedgerClient, MockClient, MockRequest};
///
/// # async fn foo() {
/// let mock = MockClient::new();
/// mock.push_account_state(AccountState::new(10, 5));
/// mock.push_chain_info(ChainInfo::new("testnet-1"));
///
/// let state = mock.account_state("cosmos1example").await.unwrap();
/// assert_eq!(state.sequence, 5);
/// assert_eq!(mock.requests()[0], MockRequest::AccountState("cosmos1example".to_owned()));
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockClient {
    requests: Arc<Mutex<Vec<MockRequest>>>,
    account_states: Arc<Mutex<VecDeque<Result<AccountState, ClientError>>>>,
    chain_infos: Arc<Mutex<VecDeque<Result<ChainInfo, ClientError>>>>,
}

impl MockClient {
    /// Instantiates a mock client with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful account-state response.
    pub fn push_account_state(&self, state: AccountState) {
        self.account_states.lock().unwrap().push_back(Ok(state));
    }

    /// Queues an account-state failure.
    pub fn push_account_error(&self, err: ClientError) {
        self.account_states.lock().unwrap().push_back(Err(err));
    }

    /// Queues a successful chain-info response.
    pub fn push_chain_info(&self, info: ChainInfo) {
        self.chain_infos.lock().unwrap().push_back(Ok(info));
    }

    /// Queues a chain-info failure.
    pub fn push_chain_error(&self, err: ClientError) {
        self.chain_infos.lock().unwrap().push_back(Err(err));
    }

    /// All queries received so far.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for MockClient {
    async fn account_state(&self, address: &str) -> Result<AccountState, ClientError> {
        self.requests.lock().unwrap().push(MockRequest::AccountState(address.to_owned()));
        self.account_states
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Custom("no account state queued".to_owned())))
    }

    async fn chain_info(&self) -> Result<ChainInfo, ClientError> {
        self.requests.lock().unwrap().push(MockRequest::ChainInfo);
        self.chain_infos
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Custom("no chain info queued".to_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_queued_responses_in_order() {
        let mock = MockClient::new();
        mock.push_account_state(AccountState::new(1, 0));
        mock.push_account_state(AccountState::new(1, 1));

        assert_eq!(mock.account_state("addr").await.unwrap().sequence, 0);
        assert_eq!(mock.account_state("addr").await.unwrap().sequence, 1);
        assert!(matches!(
            mock.account_state("addr").await.unwrap_err(),
            ClientError::Custom(_)
        ));
    }

    #[tokio::test]
    async fn records_requests() {
        let mock = MockClient::new();
        mock.push_chain_info(ChainInfo::new("testnet-1"));
        mock.chain_info().await.unwrap();
        let _ = mock.account_state("cosmos1abc").await;

        assert_eq!(
            mock.requests(),
            vec![MockRequest::ChainInfo, MockRequest::AccountState("cosmos1abc".to_owned())]
        );
    }
}

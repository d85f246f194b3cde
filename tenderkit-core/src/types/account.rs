use serde::{Deserialize, Serialize};

/// Mutable per-account state, read fresh from the ledger immediately before
/// every signature.
///
/// The `sequence` is a strictly increasing replay-protection counter; a
/// signature over a stale sequence is rejected by the chain, which is why
/// this value is never cached across signing calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Stable on-chain identifier, assigned once per account
    pub account_number: u64,
    /// Per-account transaction counter
    pub sequence: u64,
}

impl AccountState {
    pub fn new(account_number: u64, sequence: u64) -> Self {
        Self { account_number, sequence }
    }
}

/// Identifies the target network. Included in every signature to prevent
/// cross-chain replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain_id: String,
}

impl ChainInfo {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self { chain_id: chain_id.into() }
    }
}

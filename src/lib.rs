//! # tenderkit
//!
//! A complete library for signing transactions against a Tendermint-style
//! ledger: canonical sign-doc encoding, deterministic secp256k1 wallets and
//! account-state aware transaction assembly.
//!
//! Signing is a one-shot pipeline. The [`middleware::SignerClient`] fetches
//! the wallet's account state and the chain identifier, merges them with
//! the caller's messages, fee and memo into a canonical byte string, signs
//! it and returns the transaction with exactly one signature attached. Any
//! failure along the way aborts the call; a partially signed transaction
//! never exists.
//!
//! ```no_run
//! use tenderkit::prelude::*;
//! use std::str::FromStr;
//!
//! # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::from_str("http://localhost:1317")?;
//! let wallet: LocalWallet = "dcf2cbdd171a21c480aa7f53d77f31bb102282b3ff099c78e3118b37348c72f7"
//!     .parse()?;
//! let client = SignerClient::new(client, wallet);
//!
//! let msg = Msg::new("bank/MsgSend", &serde_json::json!({
//!     "amount": [{ "amount": "100", "denom": "stake" }],
//! }))?;
//! let tx = UnsignedTx::new(vec![msg], Fee::gas_only(200_000u64)).memo("rent");
//!
//! let signed = client.sign_tx(tx).await?;
//! assert_eq!(signed.signatures.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Core transaction types and canonical encoding.
pub use tenderkit_core as core;

/// Account-state aware transaction signing.
pub use tenderkit_middleware as middleware;

/// Ledger query clients.
pub use tenderkit_providers as providers;

/// Wallets and signers.
pub use tenderkit_signers as signers;

/// Easy import of the commonly used types and traits.
pub mod prelude {
    pub use super::core::types::*;
    pub use super::core::{to_canonical_json, SerializationError};
    pub use super::middleware::*;
    pub use super::providers::*;
    pub use super::signers::*;
}

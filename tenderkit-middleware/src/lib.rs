//! One-shot transaction signing: combines a [`LedgerClient`] and a
//! [`Signer`] into the full fetch-encode-sign-assemble pipeline.
//!
//! [`LedgerClient`]: tenderkit_providers::LedgerClient
//! [`Signer`]: tenderkit_signers::Signer

mod signer;
pub use signer::{SignerClient, SignerClientError};

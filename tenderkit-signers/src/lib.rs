//! Provides a unified interface for signing canonical transaction bytes.
//!
//! You can implement the [`Signer`] trait to extend functionality to other
//! signers such as Hardware Security Modules, KMS etc.
//!
//! ```no_run
//! use tenderkit_signers::{LocalWallet, Signer};
//!
//! # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! // instantiate the wallet from a hex private key
//! let wallet = "dcf2cbdd171a21c480aa7f53d77f31bb102282b3ff099c78e3118b37348c72f7"
//!     .parse::<LocalWallet>()?;
//!
//! // sign canonical bytes produced by a sign doc
//! let signature = wallet.sign(b"{\"accountNumber\":\"10\"}").await?;
//! assert_eq!(signature.pub_key.ty, "tendermint/PubKeySecp256k1");
//! # Ok(())
//! # }
//! ```

mod wallet;
pub use wallet::{
    public_key_to_address, Wallet, WalletError, DEFAULT_ADDRESS_PREFIX, PUBLIC_KEY_LENGTH,
    SIGNATURE_LENGTH,
};

/// A wallet instantiated with a locally stored private key
pub type LocalWallet = Wallet<k256::ecdsa::SigningKey>;

use async_trait::async_trait;
use std::error::Error;
use tenderkit_core::types::StdSignature;

/// Trait for signing the canonical bytes of a transaction.
///
/// Implement this trait to support different signing backends. The input is
/// always the full canonical sign-doc byte string; implementations hash it
/// themselves (SHA-256 for secp256k1 signers) and must be deterministic:
/// equal input bytes and key produce an identical signature.
#[async_trait]
pub trait Signer: std::fmt::Debug + Send + Sync {
    type Error: Error + Send + Sync + 'static;

    /// Signs the canonical bytes and returns the complete signature object,
    /// public key included.
    async fn sign(&self, sign_bytes: &[u8]) -> Result<StdSignature, Self::Error>;

    /// Returns the signer's bech32 account address.
    fn address(&self) -> &str;
}

use bech32::{ToBase32, Variant};
use elliptic_curve::sec1::ToEncodedPoint;
use k256::{
    ecdsa::{signature::DigestSigner, Signature as EcdsaSignature, SigningKey},
    FieldBytes,
};
use rand::{CryptoRng, Rng};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};
use tenderkit_core::types::{PubKey, StdSignature};
use thiserror::Error;

use crate::Signer;
use async_trait::async_trait;

/// Raw signature length: 32-byte `r` followed by 32-byte `s`, no recovery
/// byte.
pub const SIGNATURE_LENGTH: usize = 64;

/// SEC1 compressed secp256k1 point length.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Default bech32 human-readable prefix for account addresses.
pub const DEFAULT_ADDRESS_PREFIX: &str = "cosmos";

#[derive(Error, Debug)]
/// Error thrown by the Wallet module
pub enum WalletError {
    /// Error propagated from k256's ECDSA module
    #[error(transparent)]
    EcdsaError(#[from] k256::ecdsa::Error),
    /// Error propagated from the hex crate
    #[error(transparent)]
    HexError(#[from] hex::FromHexError),
    /// Error propagated from the bech32 crate during address derivation
    #[error(transparent)]
    Bech32Error(#[from] bech32::Error),
}

/// A secp256k1 private-public key pair which can be used for signing
/// canonical transaction bytes.
///
/// Signing is deterministic (RFC 6979): equal bytes and key always yield
/// an identical signature, so two assemblies of the same transaction over
/// the same account state are byte-identical. The wallet is read-only
/// during signing and holds no mutable state.
pub struct Wallet<D: DigestSigner<Sha256, EcdsaSignature>> {
    /// The wallet's private key
    pub(crate) signer: D,
    /// SEC1 compressed public key point
    pub(crate) public_key: [u8; PUBLIC_KEY_LENGTH],
    /// bech32 account address derived from the public key
    pub(crate) address: String,
}

impl Wallet<SigningKey> {
    /// Creates a new random keypair seeded with the provided RNG, using the
    /// default address prefix.
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> Result<Self, WalletError> {
        Self::with_prefix(SigningKey::random(rng), DEFAULT_ADDRESS_PREFIX)
    }

    /// Builds a wallet from a signing key, deriving the account address
    /// under the given bech32 prefix.
    pub fn with_prefix(signer: SigningKey, prefix: &str) -> Result<Self, WalletError> {
        let point = signer.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(point.as_bytes());
        let address = public_key_to_address(&public_key, prefix)?;
        Ok(Self { signer, public_key, address })
    }
}

impl FromStr for Wallet<SigningKey> {
    type Err = WalletError;

    /// Parses a hex-encoded private key, with or without a `0x` prefix.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.strip_prefix("0x").unwrap_or(src);
        let signer = SigningKey::from_bytes(&hex::decode(src)?)?;
        Self::with_prefix(signer, DEFAULT_ADDRESS_PREFIX)
    }
}

impl<D: DigestSigner<Sha256, EcdsaSignature>> Wallet<D> {
    /// Signs the SHA-256 digest of `bytes`.
    ///
    /// The signature is low-S normalized, as the chain's verifier requires,
    /// and always exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn sign_bytes(&self, bytes: &[u8]) -> Result<[u8; SIGNATURE_LENGTH], WalletError> {
        let signature: EcdsaSignature = self.signer.try_sign_digest(Sha256::new_with_prefix(bytes))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        let r: FieldBytes = signature.r().into();
        let s: FieldBytes = signature.s().into();
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(r.as_slice());
        out[32..].copy_from_slice(s.as_slice());
        Ok(out)
    }

    /// The wallet's SEC1 compressed public key, always 33 bytes.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// The wallet's bech32 account address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Gets the wallet's signer
    pub fn signer(&self) -> &D {
        &self.signer
    }
}

#[async_trait]
impl<D: Sync + Send + DigestSigner<Sha256, EcdsaSignature>> Signer for Wallet<D> {
    type Error = WalletError;

    async fn sign(&self, sign_bytes: &[u8]) -> Result<StdSignature, WalletError> {
        let signature = self.sign_bytes(sign_bytes)?;
        Ok(StdSignature::new(&signature, PubKey::secp256k1(&self.public_key)))
    }

    fn address(&self) -> &str {
        &self.address
    }
}

// do not log the signer
impl<D: DigestSigner<Sha256, EcdsaSignature>> fmt::Debug for Wallet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet").field("address", &self.address).finish()
    }
}

/// Derives the bech32 account address of a compressed public key:
/// `bech32(prefix, ripemd160(sha256(public_key)))`.
pub fn public_key_to_address(public_key: &[u8], prefix: &str) -> Result<String, WalletError> {
    let digest = Ripemd160::digest(Sha256::digest(public_key));
    Ok(bech32::encode(prefix, digest.to_base32(), Variant::Bech32)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalWallet;
    use base64::{engine::general_purpose, Engine};
    use k256::ecdsa::{signature::DigestVerifier, VerifyingKey};
    use tenderkit_core::types::SECP256K1_PUBKEY_TYPE;

    const TEST_KEY: &str = "dcf2cbdd171a21c480aa7f53d77f31bb102282b3ff099c78e3118b37348c72f7";

    #[test]
    fn signature_is_deterministic_and_fixed_length() {
        let wallet: LocalWallet = TEST_KEY.parse().unwrap();
        let first = wallet.sign_bytes(b"payload").unwrap();
        let second = wallet.sign_bytes(b"payload").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn signature_verifies_against_the_compressed_public_key() {
        let wallet: LocalWallet = TEST_KEY.parse().unwrap();
        let bytes = b"{\"accountNumber\":\"10\",\"sequence\":\"5\"}";
        let raw = wallet.sign_bytes(bytes).unwrap();

        let verifying_key = VerifyingKey::from_sec1_bytes(wallet.public_key()).unwrap();
        let signature = EcdsaSignature::try_from(&raw[..]).unwrap();
        verifying_key.verify_digest(Sha256::new_with_prefix(bytes), &signature).unwrap();
    }

    #[test]
    fn public_key_is_a_compressed_point() {
        let wallet: LocalWallet = TEST_KEY.parse().unwrap();
        let public_key = wallet.public_key();
        assert_eq!(public_key.len(), PUBLIC_KEY_LENGTH);
        assert!(matches!(public_key[0], 0x02 | 0x03));
    }

    #[test]
    fn address_uses_the_requested_prefix() {
        let wallet: LocalWallet = TEST_KEY.parse().unwrap();
        assert!(wallet.address().starts_with("cosmos1"));

        let signer = SigningKey::from_bytes(&hex::decode(TEST_KEY).unwrap()).unwrap();
        let wallet = Wallet::with_prefix(signer, "test").unwrap();
        assert!(wallet.address().starts_with("test1"));
    }

    #[test]
    fn parses_keys_with_0x_prefix() {
        let plain: LocalWallet = TEST_KEY.parse().unwrap();
        let prefixed: LocalWallet = format!("0x{TEST_KEY}").parse().unwrap();
        assert_eq!(plain.address(), prefixed.address());
    }

    #[tokio::test]
    async fn signer_attaches_the_protocol_pubkey_type() {
        let wallet: LocalWallet = TEST_KEY.parse().unwrap();
        let signature = Signer::sign(&wallet, b"payload").await.unwrap();
        assert_eq!(signature.pub_key.ty, SECP256K1_PUBKEY_TYPE);

        let raw = general_purpose::STANDARD.decode(&signature.value).unwrap();
        assert_eq!(raw.len(), SIGNATURE_LENGTH);
        let public_key = general_purpose::STANDARD.decode(&signature.pub_key.value).unwrap();
        assert_eq!(public_key.len(), PUBLIC_KEY_LENGTH);
    }
}

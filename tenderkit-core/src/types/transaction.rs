use super::{Fee, Msg};
use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};

/// Protocol constant identifying a secp256k1 public key in a signature
/// object. Fixed by the chain's amino registry, not configurable.
pub const SECP256K1_PUBKEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// A transaction as handed to the signing pipeline: what to execute, what
/// to pay, and an optional memo. This library never decides the contents,
/// only how to encode and sign them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTx {
    pub msgs: Vec<Msg>,
    pub fee: Fee,
    pub memo: String,
}

impl UnsignedTx {
    pub fn new(msgs: Vec<Msg>, fee: Fee) -> Self {
        Self { msgs, fee, memo: String::new() }
    }

    /// Sets the transaction memo.
    #[must_use]
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Attaches the signature, consuming the unsigned form.
    pub fn into_signed(self, signature: StdSignature) -> SignedTx {
        SignedTx { msgs: self.msgs, fee: self.fee, memo: self.memo, signatures: vec![signature] }
    }
}

/// A public key as it appears inside a signature object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub ty: String,
    /// base64 of the SEC1 compressed point
    pub value: String,
}

impl PubKey {
    /// Wraps a 33-byte compressed secp256k1 point.
    pub fn secp256k1(compressed: &[u8]) -> Self {
        Self {
            ty: SECP256K1_PUBKEY_TYPE.to_owned(),
            value: general_purpose::STANDARD.encode(compressed),
        }
    }
}

/// A single signature over a transaction's canonical sign bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    #[serde(rename = "pubKey")]
    pub pub_key: PubKey,
    /// base64 of the raw `r || s` signature
    pub value: String,
}

impl StdSignature {
    pub fn new(raw: &[u8], pub_key: PubKey) -> Self {
        Self { pub_key, value: general_purpose::STANDARD.encode(raw) }
    }
}

/// A fully signed transaction, ready for broadcast.
///
/// `signatures` is a sequence for wire compatibility with multi-signature
/// formats; this library always populates exactly one element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTx {
    pub msgs: Vec<Msg>,
    pub fee: Fee,
    pub memo: String,
    pub signatures: Vec<StdSignature>,
}

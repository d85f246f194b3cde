use super::{AccountState, Fee, Msg, UnsignedTx};
use crate::canonical::{to_canonical_json, SerializationError};
use serde::Serialize;

/// The exact structure whose canonical bytes get signed.
///
/// Ephemeral: built per signing call from an [`UnsignedTx`] and freshly
/// fetched account state, then discarded. `account_number` and `sequence`
/// are held as decimal strings because the chain's verifier expects JSON
/// string literals there, never bare numbers — serializing them as numbers
/// changes the signed bytes and invalidates the signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignDoc {
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    pub fee: Fee,
    pub memo: String,
    pub msgs: Vec<Msg>,
    pub sequence: String,
}

impl SignDoc {
    pub fn new(tx: &UnsignedTx, state: &AccountState, chain_id: impl Into<String>) -> Self {
        Self {
            account_number: state.account_number.to_string(),
            chain_id: chain_id.into(),
            fee: tx.fee.clone(),
            memo: tx.memo.clone(),
            msgs: tx.msgs.clone(),
            sequence: state.sequence.to_string(),
        }
    }

    /// The canonical bytes the wallet signs and the chain recomputes.
    ///
    /// Fails without partial output if any message has no resolvable type.
    pub fn sign_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        if self.msgs.iter().any(|msg| msg.ty.is_empty()) {
            return Err(SerializationError::UnresolvableMessage);
        }
        to_canonical_json(self)
    }
}

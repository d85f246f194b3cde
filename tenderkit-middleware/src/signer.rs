use futures_util::try_join;
use tenderkit_core::{
    types::{SignDoc, SignedTx, UnsignedTx},
    SerializationError,
};
use tenderkit_providers::{ClientError, LedgerClient};
use tenderkit_signers::Signer;
use thiserror::Error;
use tracing::debug;

/// Client used for locally signing transactions, compatible with any
/// implementer of the [`Signer`] trait.
///
/// Each [`sign_tx`] call is an independent unit of work: account state and
/// chain info are fetched fresh from the ledger, merged into a sign doc,
/// canonically encoded and signed. Nothing is cached between calls and no
/// lock is held, so concurrent calls do not interact.
///
/// # Example
///
/// ```no_run
/// use tenderkit_core::types::{Fee, Msg, UnsignedTx};
/// use tenderkit_middleware::SignerClient;
/// use tenderkit_providers::HttpClient;
/// use tenderkit_signers::LocalWallet;
/// use std::str::FromStr;
///
/// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::from_str("http://localhost:1317")?;
/// let wallet: LocalWallet = "dcf2cbdd171a21c480aa7f53d77f31bb102282b3ff099c78e3118b37348c72f7"
///     .parse()?;
/// let client = SignerClient::new(client, wallet);
///
/// let msg = Msg::new("bank/MsgSend", &serde_json::json!({ "amount": "100" }))?;
/// let tx = UnsignedTx::new(vec![msg], Fee::gas_only(200_000u64));
/// let signed = client.sign_tx(tx).await?;
/// assert_eq!(signed.signatures.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// [`Signer`]: tenderkit_signers::Signer
/// [`sign_tx`]: SignerClient::sign_tx
#[derive(Clone, Debug)]
pub struct SignerClient<C, S> {
    pub(crate) inner: C,
    pub(crate) signer: S,
}

#[derive(Error, Debug)]
/// Error thrown when signing a transaction against the ledger
pub enum SignerClientError<S: Signer> {
    /// Thrown when the internal call to the signer fails
    #[error("{0}")]
    SignerError(S::Error),

    /// Thrown when a ledger query fails before a signature was attempted
    #[error(transparent)]
    ClientError(#[from] ClientError),

    /// Thrown when the transaction cannot be canonically encoded
    #[error(transparent)]
    SerializationError(#[from] SerializationError),
}

impl<C, S> SignerClient<C, S>
where
    C: LedgerClient,
    S: Signer,
{
    /// Creates a new client from a ledger query client and a signer.
    pub fn new(inner: C, signer: S) -> Self {
        Self { inner, signer }
    }

    /// Signs `tx` on behalf of the wallet held by the signer and returns it
    /// with exactly one signature attached.
    ///
    /// Account state for the signer's address and the chain identifier are
    /// fetched concurrently; both must arrive before any byte is signed, and
    /// either failure aborts the call with no signature. Dropping the
    /// returned future while a fetch is outstanding cancels it — a
    /// signature is either produced over complete, fresh state or not at
    /// all.
    pub async fn sign_tx(&self, tx: UnsignedTx) -> Result<SignedTx, SignerClientError<S>> {
        let (state, info) = try_join!(
            self.inner.account_state(self.signer.address()),
            self.inner.chain_info(),
        )?;
        debug!(
            chain_id = %info.chain_id,
            account_number = state.account_number,
            sequence = state.sequence,
            "assembling sign doc"
        );

        let sign_doc = SignDoc::new(&tx, &state, info.chain_id);
        let sign_bytes = sign_doc.sign_bytes()?;
        let signature =
            self.signer.sign(&sign_bytes).await.map_err(SignerClientError::SignerError)?;

        Ok(tx.into_signed(signature))
    }

    /// The underlying ledger client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// The wallet this client signs with.
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Consumes the client, returning its parts.
    pub fn split(self) -> (C, S) {
        (self.inner, self.signer)
    }
}

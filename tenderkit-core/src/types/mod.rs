//! Transaction, account and signature types.

mod account;
pub use account::{AccountState, ChainInfo};

mod fee;
pub use fee::{Coin, Fee};

mod msg;
pub use msg::Msg;

mod signdoc;
pub use signdoc::SignDoc;

mod transaction;
pub use transaction::{PubKey, SignedTx, StdSignature, UnsignedTx, SECP256K1_PUBKEY_TYPE};

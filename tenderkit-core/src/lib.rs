//! Core data types and canonical encoding for Tendermint-style transaction
//! signing.
//!
//! Signatures on these ledgers are computed over exact bytes, not over an
//! abstract data structure: the verifier re-serializes the sign doc on its
//! side and compares byte-for-byte. The [`canonical`] module produces that
//! byte form; the [`types`] module holds the structures it operates on.

pub mod canonical;
pub mod types;

pub use canonical::{to_canonical_json, SerializationError};

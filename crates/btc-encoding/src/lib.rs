//! Bitcoin byte-layout primitives.
//!
//! Provides the varint encoder, SHA-256 / RIPEMD-160 digest composition,
//! Base58Check, the native SegWit script templates (P2WPKH, P2WSH) and legacy
//! P2PKH address derivation from compressed public keys.

pub mod address;
pub mod base58check;
pub mod error;
pub mod hash;
pub mod network;
pub mod pubkey;
pub mod script;
pub mod varint;

pub use error::EncodingError;

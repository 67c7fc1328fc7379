//! Bitcoin signed-message support.
//!
//! Builds the `"Bitcoin Signed Message:\n"` digest, decodes 65-byte compact
//! signatures, and verifies them over secp256k1 against a supplied public key
//! or P2PKH address.

pub mod error;
pub mod message;
pub mod signature;
pub mod verify;

pub use error::MessageError;
pub use signature::CompactSignature;
pub use verify::{try_verify_message, verify_message};

//! # btcutil-core
//!
//! String-level entry points for deriving Bitcoin addresses and output
//! scripts from public keys, and for verifying signed messages. Callers pass
//! hex, base64 or plain text exactly as a user typed it.

pub mod amount;
pub mod error;

use btc_encoding::network::NETWORK_NAME;
use error::BtcUtilError;

pub use amount::{random_amount, random_amount_with_rng};

/// Compute a mainnet P2PKH address from a hex-encoded compressed public key.
pub fn pub_key_to_p2pkh_address(pubkey_hex: &str) -> Result<String, BtcUtilError> {
    tracing::debug!(
        network = NETWORK_NAME,
        input_len = pubkey_hex.len(),
        "deriving P2PKH address"
    );
    Ok(btc_encoding::address::pubkey_hex_to_p2pkh_address(pubkey_hex)?)
}

/// Compute the P2WPKH scriptPubKey (hex) for a hex-encoded compressed public key.
pub fn p2wpkh_script_pubkey(pubkey_hex: &str) -> Result<String, BtcUtilError> {
    tracing::debug!(
        network = NETWORK_NAME,
        input_len = pubkey_hex.len(),
        "building P2WPKH scriptPubKey"
    );
    Ok(btc_encoding::script::p2wpkh_script_pubkey_hex(pubkey_hex)?)
}

/// Compute the P2WSH scriptPubKey (hex) for a witness script given as
/// whitespace-separated hex parts.
pub fn p2wsh_script_pubkey(witness_script: &str) -> Result<String, BtcUtilError> {
    tracing::debug!(
        network = NETWORK_NAME,
        input_len = witness_script.len(),
        "building P2WSH scriptPubKey"
    );
    Ok(btc_encoding::script::p2wsh_script_pubkey_hex(witness_script)?)
}

/// Same as [`p2wsh_script_pubkey`].
pub fn create_script_pubkey(witness_script: &str) -> Result<String, BtcUtilError> {
    p2wsh_script_pubkey(witness_script)
}

/// Verify a Bitcoin-style message signature. Malformed input yields `false`.
pub fn verify_message(message: &str, pubkey_hex: &str, signature_b64: &str) -> bool {
    tracing::debug!(
        message_len = message.len(),
        signature_len = signature_b64.len(),
        "verifying signed message"
    );
    btc_message::verify_message(message, pubkey_hex, signature_b64)
}

/// Verify a Bitcoin-style message signature, reporting malformed input as an error.
pub fn try_verify_message(
    message: &str,
    pubkey_hex: &str,
    signature_b64: &str,
) -> Result<bool, BtcUtilError> {
    tracing::debug!(
        message_len = message.len(),
        signature_len = signature_b64.len(),
        "verifying signed message"
    );
    Ok(btc_message::try_verify_message(message, pubkey_hex, signature_b64)?)
}

/// Verify a Bitcoin-style message signature against a mainnet P2PKH address.
pub fn verify_message_with_address(
    message: &str,
    address: &str,
    signature_b64: &str,
) -> Result<bool, BtcUtilError> {
    tracing::debug!(
        network = NETWORK_NAME,
        message_len = message.len(),
        "verifying signed message against address"
    );
    Ok(btc_message::verify::verify_message_with_address(
        message,
        address,
        signature_b64,
    )?)
}

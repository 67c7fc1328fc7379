use crate::base58check;
use crate::error::EncodingError;
use crate::hash::hash160;
use crate::network::P2PKH_MAINNET_VERSION;
use crate::pubkey::{parse_compressed_pubkey_hex, COMPRESSED_PUBKEY_LEN};

/// Derive a legacy P2PKH address from a compressed public key.
///
/// Steps:
/// 1. Hash160(pubkey) -> 20-byte key hash
/// 2. Prepend the mainnet version byte
/// 3. Base58Check encode
pub fn pubkey_to_p2pkh_address(pubkey: &[u8; COMPRESSED_PUBKEY_LEN]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = P2PKH_MAINNET_VERSION;
    payload[1..].copy_from_slice(&hash160(pubkey));
    base58check::encode(&payload)
}

/// Hex-level P2PKH address derivation for a hex-encoded compressed public key.
pub fn pubkey_hex_to_p2pkh_address(pubkey_hex: &str) -> Result<String, EncodingError> {
    let pubkey = parse_compressed_pubkey_hex(pubkey_hex)?;
    Ok(pubkey_to_p2pkh_address(&pubkey))
}

/// Extract the 20-byte key hash from a mainnet P2PKH address.
pub fn address_to_pubkey_hash(address: &str) -> Result<[u8; 20], EncodingError> {
    let payload = base58check::decode(address)?;

    if payload.len() != 21 {
        return Err(EncodingError::InvalidAddress(format!(
            "expected 21-byte payload, got {}",
            payload.len()
        )));
    }
    if payload[0] != P2PKH_MAINNET_VERSION {
        return Err(EncodingError::InvalidAddress(format!(
            "unsupported version byte {:#04x}",
            payload[0]
        )));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(hash)
}

/// Whether `address` is a well-formed mainnet P2PKH address.
pub fn validate_address(address: &str) -> bool {
    address_to_pubkey_hash(address).is_ok()
}

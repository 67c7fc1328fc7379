use crate::error::EncodingError;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Decode a hex-encoded compressed secp256k1 public key.
///
/// Fails fast on anything that is not 33 bytes with a `0x02`/`0x03` prefix.
/// The point is not checked against the curve: derivations only hash the
/// encoding.
pub fn parse_compressed_pubkey_hex(
    pubkey_hex: &str,
) -> Result<[u8; COMPRESSED_PUBKEY_LEN], EncodingError> {
    let bytes = hex::decode(pubkey_hex.trim()).map_err(|e| EncodingError::InvalidHex {
        token_index: 0,
        reason: e.to_string(),
    })?;

    let key: [u8; COMPRESSED_PUBKEY_LEN] =
        bytes.as_slice().try_into().map_err(|_| EncodingError::InvalidKeyLength {
            expected: COMPRESSED_PUBKEY_LEN,
            actual: bytes.len(),
        })?;

    if key[0] != 0x02 && key[0] != 0x03 {
        return Err(EncodingError::InvalidPublicKey(format!(
            "compressed key must start with 0x02 or 0x03, got {:#04x}",
            key[0]
        )));
    }

    Ok(key)
}

use crate::error::EncodingError;
use crate::hash::{hash160, sha256};
use crate::pubkey::{parse_compressed_pubkey_hex, COMPRESSED_PUBKEY_LEN};

/// `OP_0`, the SegWit v0 witness version.
pub const OP_0: u8 = 0x00;

/// Push-20 opcode preceding a P2WPKH key hash.
pub const OP_PUSHBYTES_20: u8 = 0x14;

/// Push-32 opcode preceding a P2WSH script hash.
pub const OP_PUSHBYTES_32: u8 = 0x20;

/// Length of a P2WPKH scriptPubKey: `OP_0 <20 bytes>`.
pub const P2WPKH_SCRIPT_LEN: usize = 22;

/// Length of a P2WSH scriptPubKey: `OP_0 <32 bytes>`.
pub const P2WSH_SCRIPT_LEN: usize = 34;

/// Build the P2WPKH scriptPubKey `OP_0 0x14 <hash160(pubkey)>`.
pub fn p2wpkh_script_pubkey(pubkey: &[u8; COMPRESSED_PUBKEY_LEN]) -> [u8; P2WPKH_SCRIPT_LEN] {
    let mut script = [0u8; P2WPKH_SCRIPT_LEN];
    script[0] = OP_0;
    script[1] = OP_PUSHBYTES_20;
    script[2..].copy_from_slice(&hash160(pubkey));
    script
}

/// Hex-level P2WPKH scriptPubKey for a hex-encoded compressed public key.
pub fn p2wpkh_script_pubkey_hex(pubkey_hex: &str) -> Result<String, EncodingError> {
    let pubkey = parse_compressed_pubkey_hex(pubkey_hex)?;
    Ok(hex::encode(p2wpkh_script_pubkey(&pubkey)))
}

/// Parse a witness script given as whitespace-separated hex tokens.
///
/// Tokens are decoded and concatenated in the order given, e.g.
/// `"52 21 <pubkey> 21 <pubkey> 52 ae"`. Input without tokens is the empty
/// script.
pub fn parse_witness_script(witness_script: &str) -> Result<Vec<u8>, EncodingError> {
    let mut script = Vec::new();
    let mut tokens = 0usize;

    for (token_index, token) in witness_script.split_whitespace().enumerate() {
        let bytes = hex::decode(token).map_err(|e| EncodingError::InvalidHex {
            token_index,
            reason: e.to_string(),
        })?;
        script.extend_from_slice(&bytes);
        tokens += 1;
    }

    tracing::trace!(tokens, script_len = script.len(), "parsed witness script");
    Ok(script)
}

/// Build the P2WSH scriptPubKey `OP_0 0x20 <sha256(script)>`.
pub fn p2wsh_script_pubkey(witness_script: &[u8]) -> [u8; P2WSH_SCRIPT_LEN] {
    let mut script = [0u8; P2WSH_SCRIPT_LEN];
    script[0] = OP_0;
    script[1] = OP_PUSHBYTES_32;
    script[2..].copy_from_slice(&sha256(witness_script));
    script
}

/// Hex-level P2WSH scriptPubKey for a whitespace-separated hex witness script.
pub fn p2wsh_script_pubkey_hex(witness_script: &str) -> Result<String, EncodingError> {
    let script = parse_witness_script(witness_script)?;
    Ok(hex::encode(p2wsh_script_pubkey(&script)))
}

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use btc_encoding::address::address_to_pubkey_hash;
use btc_encoding::hash::hash160;
use btc_encoding::pubkey::COMPRESSED_PUBKEY_LEN;

use crate::error::MessageError;
use crate::message::hash_message;
use crate::signature::{decode_signature, CompactSignature};

/// Parse a hex-encoded SEC1 public key (compressed or uncompressed).
fn parse_verifying_key(pubkey_hex: &str) -> Result<(VerifyingKey, usize), MessageError> {
    let bytes = hex::decode(pubkey_hex.trim())
        .map_err(|e| MessageError::InvalidPublicKey(format!("invalid hex: {e}")))?;
    let key = VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| {
        MessageError::InvalidPublicKey("not a valid secp256k1 point".into())
    })?;
    Ok((key, bytes.len()))
}

/// `r || s` as a low-S ECDSA signature, plus the recovery id adjusted for
/// the normalisation. `None` if either scalar is zero or not below the group
/// order.
fn normalized_signature(sig: &CompactSignature) -> Option<(Signature, RecoveryId)> {
    let parsed = Signature::from_slice(&sig.rs_bytes()).ok()?;
    let recid = RecoveryId::from_byte(sig.recovery_id())?;

    match parsed.normalize_s() {
        // Negating s mirrors R, flipping the parity of its y coordinate.
        Some(low) => Some((low, RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()))),
        None => Some((parsed, recid)),
    }
}

fn verify_with_key(message_hash: &[u8; 32], key: &VerifyingKey, sig: &CompactSignature) -> bool {
    match normalized_signature(sig) {
        Some((signature, _)) => key.verify_prehash(message_hash, &signature).is_ok(),
        None => false,
    }
}

/// ECDSA-verify `(r, s)` against `message_hash` under the hex-encoded public key.
///
/// Returns `Ok(false)` for a signature that does not verify, including one
/// whose scalars are out of range. Only a malformed public key is an error.
/// The header byte is ignored.
pub fn verify_signature(
    message_hash: &[u8; 32],
    pubkey_hex: &str,
    sig: &CompactSignature,
) -> Result<bool, MessageError> {
    let (key, _) = parse_verifying_key(pubkey_hex)?;
    Ok(verify_with_key(message_hash, &key, sig))
}

fn recover_verifying_key(
    message_hash: &[u8; 32],
    sig: &CompactSignature,
) -> Result<VerifyingKey, MessageError> {
    let (signature, recid) = normalized_signature(sig)
        .ok_or_else(|| MessageError::RecoveryFailed("signature scalars out of range".into()))?;
    VerifyingKey::recover_from_prehash(message_hash, &signature, recid)
        .map_err(|e| MessageError::RecoveryFailed(e.to_string()))
}

/// Recover the signing public key from a compact signature.
///
/// The key is serialized compressed (33 bytes) or uncompressed (65 bytes)
/// according to the header's compression flag.
pub fn recover_pubkey(
    message_hash: &[u8; 32],
    sig: &CompactSignature,
) -> Result<Vec<u8>, MessageError> {
    let key = recover_verifying_key(message_hash, sig)?;
    Ok(key
        .to_encoded_point(sig.is_compressed())
        .as_bytes()
        .to_vec())
}

/// Verify a signed message, distinguishing bad input from a bad signature.
///
/// `Ok(true)` requires the ECDSA check to pass under `pubkey_hex`, the key
/// recovered from the header's recovery id to be that same key, and the
/// header's compression flag to match the encoding of `pubkey_hex`.
pub fn try_verify_message(
    message: &str,
    pubkey_hex: &str,
    signature_b64: &str,
) -> Result<bool, MessageError> {
    let sig = decode_signature(signature_b64)?;
    let message_hash = hash_message(message);
    let (key, key_len) = parse_verifying_key(pubkey_hex)?;

    if !verify_with_key(&message_hash, &key, &sig) {
        return Ok(false);
    }
    if sig.is_compressed() != (key_len == COMPRESSED_PUBKEY_LEN) {
        tracing::debug!(header = sig.header, key_len, "compression flag does not match key");
        return Ok(false);
    }

    Ok(match recover_verifying_key(&message_hash, &sig) {
        Ok(recovered) => recovered == key,
        Err(_) => false,
    })
}

/// Verify a signed message against a hex-encoded public key.
///
/// Every decoding failure (bad base64, wrong length, bad header, malformed
/// key) is reported as `false`, just like a signature that does not verify.
pub fn verify_message(message: &str, pubkey_hex: &str, signature_b64: &str) -> bool {
    match try_verify_message(message, pubkey_hex, signature_b64) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::debug!(error = %e, "message verification failed to decode input");
            false
        }
    }
}

/// Verify a signed message against a mainnet P2PKH address.
///
/// Recovers the signing key and compares its Hash160 with the one the
/// address commits to.
pub fn verify_message_with_address(
    message: &str,
    address: &str,
    signature_b64: &str,
) -> Result<bool, MessageError> {
    let expected_hash = address_to_pubkey_hash(address)?;
    let sig = decode_signature(signature_b64)?;
    let message_hash = hash_message(message);

    match recover_pubkey(&message_hash, &sig) {
        Ok(pubkey) => Ok(hash160(&pubkey) == expected_hash),
        Err(e) => {
            tracing::debug!(error = %e, "could not recover key from signature");
            Ok(false)
        }
    }
}

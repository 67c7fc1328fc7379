use crate::error::EncodingError;

/// Base58Check-encode `payload`.
///
/// Appends the first 4 bytes of `SHA256d(payload)` and encodes the result in
/// Base58; each leading zero byte becomes a leading `1`.
pub fn encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decode a Base58Check string and return the payload without its checksum.
pub fn decode(encoded: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => EncodingError::InvalidChecksum,
            bs58::decode::Error::NoChecksum => EncodingError::TooShort,
            other => EncodingError::InvalidBase58(other.to_string()),
        })
}

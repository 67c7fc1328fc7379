use thiserror::Error;

/// Byte-layout encoding and decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid hex in token {token_index}: {reason}")]
    InvalidHex { token_index: usize, reason: String },

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("base58check input too short to carry a checksum")]
    TooShort,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("truncated varint: need {needed} bytes, have {available}")]
    TruncatedVarint { needed: usize, available: usize },
}

use btc_encoding::EncodingError;
use thiserror::Error;

/// Signed-message decoding and verification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("invalid signature length: expected 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("invalid signature header byte: {0}")]
    InvalidHeader(u8),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("public key recovery failed: {0}")]
    RecoveryFailed(String),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

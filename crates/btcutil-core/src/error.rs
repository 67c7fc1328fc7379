use thiserror::Error;

#[derive(Debug, Error)]
pub enum BtcUtilError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Signature check failed: {0}")]
    SignatureFailed(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<btc_encoding::EncodingError> for BtcUtilError {
    fn from(e: btc_encoding::EncodingError) -> Self {
        BtcUtilError::EncodingFailed(e.to_string())
    }
}

impl From<btc_message::MessageError> for BtcUtilError {
    fn from(e: btc_message::MessageError) -> Self {
        BtcUtilError::SignatureFailed(e.to_string())
    }
}

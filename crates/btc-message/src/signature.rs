use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::MessageError;

/// Length of a compact message signature: header byte + `r` + `s`.
pub const COMPACT_SIGNATURE_LEN: usize = 65;

/// Lowest legacy header byte (recovery id 0, uncompressed key).
pub const HEADER_BASE: u8 = 27;

/// Header offset marking a signature made with a compressed key.
pub const COMPRESSED_FLAG: u8 = 4;

/// Highest legacy header byte (recovery id 3, compressed key).
pub const LEGACY_HEADER_MAX: u8 = HEADER_BASE + COMPRESSED_FLAG + 3;

/// First BIP137 segwit header (P2SH-P2WPKH, recovery id 0). 39..=42 mark
/// native P2WPKH. Both ranges imply a compressed key.
pub const SEGWIT_HEADER_BASE: u8 = LEGACY_HEADER_MAX + 1;

/// Highest accepted header byte (native P2WPKH, recovery id 3).
pub const HEADER_MAX: u8 = SEGWIT_HEADER_BASE + 7;

const SIGNATURE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A 65-byte compact Bitcoin message signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactSignature {
    /// Header byte: `27 + recovery_id (+ 4 if compressed)`, or a BIP137
    /// segwit header `35 + recovery_id (+ 4 if native P2WPKH)`.
    pub header: u8,
    /// Big-endian `r` scalar.
    pub r: [u8; 32],
    /// Big-endian `s` scalar.
    pub s: [u8; 32],
}

impl CompactSignature {
    /// Parse a 65-byte compact signature.
    ///
    /// The length is checked before anything else reads the buffer. Legacy
    /// (27..=34) and BIP137 segwit (35..=42) headers are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MessageError> {
        if bytes.len() != COMPACT_SIGNATURE_LEN {
            return Err(MessageError::InvalidSignatureLength(bytes.len()));
        }

        let header = bytes[0];
        if !(HEADER_BASE..=HEADER_MAX).contains(&header) {
            return Err(MessageError::InvalidHeader(header));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..65]);

        Ok(Self { header, r, s })
    }

    /// Recovery id encoded in the header.
    pub fn recovery_id(&self) -> u8 {
        if self.is_segwit() {
            self.header.wrapping_sub(SEGWIT_HEADER_BASE) & 0x03
        } else {
            self.header.wrapping_sub(HEADER_BASE) & 0x03
        }
    }

    /// Whether the header marks a compressed signing key.
    pub fn is_compressed(&self) -> bool {
        self.is_segwit() || self.header.wrapping_sub(HEADER_BASE) & COMPRESSED_FLAG != 0
    }

    /// Whether the header is one of the BIP137 segwit headers (35..=42).
    pub fn is_segwit(&self) -> bool {
        (SEGWIT_HEADER_BASE..=HEADER_MAX).contains(&self.header)
    }

    /// `r || s`, the 64-byte form consumed by ECDSA.
    pub fn rs_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    pub fn to_bytes(&self) -> [u8; COMPACT_SIGNATURE_LEN] {
        let mut out = [0u8; COMPACT_SIGNATURE_LEN];
        out[0] = self.header;
        out[1..].copy_from_slice(&self.rs_bytes());
        out
    }

    /// Standard (padded) base64 of the 65-byte form.
    pub fn to_base64(&self) -> String {
        SIGNATURE_ENGINE.encode(self.to_bytes())
    }
}

/// Decode a base64 compact signature. Trailing `=` padding is optional.
pub fn decode_signature(signature_b64: &str) -> Result<CompactSignature, MessageError> {
    let bytes = SIGNATURE_ENGINE
        .decode(signature_b64.trim())
        .map_err(|e| MessageError::InvalidBase64(e.to_string()))?;
    CompactSignature::from_bytes(&bytes)
}

use crate::error::EncodingError;

/// Encode `n` as a Bitcoin variable-length integer (CompactSize).
///
/// - `n < 0xfd`: the single byte `n`
/// - `n <= 0xffff`: `0xfd` followed by 2 bytes little-endian
/// - `n <= 0xffff_ffff`: `0xfe` followed by 4 bytes little-endian
/// - otherwise: `0xff` followed by 8 bytes little-endian
pub fn encode_varint(n: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(varint_len(n));
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
    buf
}

/// Number of bytes [`encode_varint`] produces for `n`.
pub fn varint_len(n: u64) -> usize {
    match n {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Decode a varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. Non-minimal encodings
/// are accepted.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), EncodingError> {
    let first = *bytes.first().ok_or(EncodingError::TruncatedVarint {
        needed: 1,
        available: 0,
    })?;

    let width = match first {
        0xfd => 2,
        0xfe => 4,
        0xff => 8,
        _ => return Ok((first as u64, 1)),
    };

    let body = bytes
        .get(1..1 + width)
        .ok_or(EncodingError::TruncatedVarint {
            needed: 1 + width,
            available: bytes.len(),
        })?;

    let mut le = [0u8; 8];
    le[..width].copy_from_slice(body);
    Ok((u64::from_le_bytes(le), 1 + width))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARIES: [u64; 7] = [0, 0xfc, 0xfd, 0xffff, 0x1_0000, 0xffff_ffff, 0x1_0000_0000];

    #[test]
    fn single_byte_below_fd() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(24), vec![0x18]);
        assert_eq!(encode_varint(0xfc), vec![0xfc]);
    }

    #[test]
    fn fd_prefix_for_u16_range() {
        assert_eq!(encode_varint(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode_varint(0x0100), vec![0xfd, 0x00, 0x01]);
        assert_eq!(encode_varint(0xffff), vec![0xfd, 0xff, 0xff]);
    }

    #[test]
    fn fe_prefix_for_u32_range() {
        assert_eq!(encode_varint(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode_varint(0xffff_ffff), vec![0xfe, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn ff_prefix_above_u32() {
        assert_eq!(
            encode_varint(0x1_0000_0000),
            vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!(encode_varint(u64::MAX), {
            let mut v = vec![0xff];
            v.extend_from_slice(&[0xff; 8]);
            v
        });
    }

    #[test]
    fn boundary_values_roundtrip() {
        for n in BOUNDARIES {
            let encoded = encode_varint(n);
            assert_eq!(encoded.len(), varint_len(n), "length mismatch for {n:#x}");
            let (decoded, used) = decode_varint(&encoded).unwrap();
            assert_eq!(decoded, n);
            assert_eq!(used, encoded.len());
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let (value, used) = decode_varint(&[0xfd, 0x34, 0x12, 0xaa, 0xbb]).unwrap();
        assert_eq!(value, 0x1234);
        assert_eq!(used, 3);
    }

    #[test]
    fn decode_accepts_non_minimal() {
        assert_eq!(decode_varint(&[0xfd, 0x01, 0x00]).unwrap(), (1, 3));
    }

    #[test]
    fn decode_empty_is_truncated() {
        assert_eq!(
            decode_varint(&[]),
            Err(EncodingError::TruncatedVarint {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn decode_short_body_is_truncated() {
        assert_eq!(
            decode_varint(&[0xff, 0x01, 0x02, 0x03]),
            Err(EncodingError::TruncatedVarint {
                needed: 9,
                available: 4
            })
        );
    }

    #[test]
    fn matches_bitcoin_crate_encoding() {
        use bitcoin::consensus::encode::{serialize, VarInt};

        for n in BOUNDARIES {
            assert_eq!(encode_varint(n), serialize(&VarInt(n)), "mismatch for {n:#x}");
        }
    }
}

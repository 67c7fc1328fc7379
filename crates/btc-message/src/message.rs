use btc_encoding::hash::sha256d;
use btc_encoding::varint::{encode_varint, varint_len};

/// Magic prefix of Bitcoin's signed-message format (without its length byte).
pub const BITCOIN_SIGNED_MSG_PREFIX: &str = "Bitcoin Signed Message:\n";

/// Hash a text message using Bitcoin's signed-message format.
///
/// The message is measured and hashed as UTF-8 bytes.
pub fn hash_message(message: &str) -> [u8; 32] {
    hash_message_bytes(message.as_bytes())
}

/// Hash a raw message: `SHA256d(varint(len(prefix)) || prefix || varint(len(msg)) || msg)`.
pub fn hash_message_bytes(message: &[u8]) -> [u8; 32] {
    let prefix = BITCOIN_SIGNED_MSG_PREFIX.as_bytes();
    let len = message.len() as u64;

    let mut preimage = Vec::with_capacity(
        1 + prefix.len() + varint_len(len) + message.len(),
    );
    preimage.extend_from_slice(&encode_varint(prefix.len() as u64));
    preimage.extend_from_slice(prefix);
    preimage.extend_from_slice(&encode_varint(len));
    preimage.extend_from_slice(message);

    let digest = sha256d(&preimage);
    tracing::trace!(message_len = message.len(), digest = %hex::encode(digest), "hashed signed message");
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed_hex(digest: [u8; 32]) -> String {
        let mut d = digest;
        d.reverse();
        hex::encode(d)
    }

    #[test]
    fn prefix_length_is_24() {
        assert_eq!(BITCOIN_SIGNED_MSG_PREFIX.len(), 0x18);
    }

    #[test]
    fn known_vector_test() {
        // sha256d values are conventionally displayed byte-reversed.
        assert_eq!(
            reversed_hex(hash_message("test")),
            "a6f87fe6d58a032c320ff8d1541656f0282c2c7bfcc69d61af4c8e8ed528e49c"
        );
    }

    #[test]
    fn fixture_message_digest() {
        assert_eq!(
            hex::encode(hash_message("This is a test message for Bitcoin signature.")),
            "9af269e5f3f895ec8ada6f27b6a614d0da72d8959985ebf4091c74f89318a8a2"
        );
    }

    #[test]
    fn empty_message() {
        assert_eq!(
            hex::encode(hash_message("")),
            "80e795d4a4caadd7047af389d9f7f220562feb6196032e2131e10563352c4bcc"
        );
    }

    #[test]
    fn length_counts_utf8_bytes() {
        // 7 code points, 10 UTF-8 bytes.
        assert_eq!(
            hex::encode(hash_message("héllo €")),
            "fa2cc5e13bb8dc536033c09b34f9b7ca1769b7adf2df0285a40a936880b82f44"
        );
    }

    #[test]
    fn long_message_uses_fd_length_prefix() {
        let message = "a".repeat(300);
        assert_eq!(
            hex::encode(hash_message(&message)),
            "3ec158a43b80359df647352dac1d37dbf26a94e5f06e5790760290c75cd11dc0"
        );
    }

    #[test]
    fn text_and_bytes_agree() {
        let message = "rust signed message";
        assert_eq!(hash_message(message), hash_message_bytes(message.as_bytes()));
    }

    #[test]
    fn matches_bitcoin_crate() {
        use bitcoin::hashes::Hash;

        let messages = vec![
            String::new(),
            "test".to_string(),
            "héllo €".to_string(),
            "x".repeat(253),
            "y".repeat(70_000),
        ];
        for message in &messages {
            let expected = bitcoin::sign_message::signed_msg_hash(message);
            assert_eq!(hash_message(message), expected.to_byte_array());
        }
    }
}

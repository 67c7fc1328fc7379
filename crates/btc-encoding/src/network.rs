//! Network constants.
//!
//! Only Bitcoin mainnet is supported; there is no network selection.

/// Version byte prefixed to a P2PKH key hash on mainnet (addresses start with `1`).
pub const P2PKH_MAINNET_VERSION: u8 = 0x00;

/// Network name attached to the facade's derivation log events.
pub const NETWORK_NAME: &str = "mainnet";

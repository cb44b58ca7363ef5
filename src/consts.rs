// src/consts.rs
//! Shared constants — envelope geometry and security parameters

/// Symmetric key length in bytes (XChaCha20-Poly1305)
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (XChaCha20 extended nonce)
pub const NONCE_LEN: usize = 24;

/// Poly1305 authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Version marker — first byte of every envelope
pub const ENVELOPE_VERSION: u8 = 0x8B;

/// Envelope header: version marker + big-endian unix timestamp + nonce
pub const HEADER_LEN: usize = 1 + 8 + NONCE_LEN;

/// Smallest parseable envelope: header plus the tag of an empty payload
pub const MIN_ENVELOPE_LEN: usize = HEADER_LEN + TAG_LEN;

/// Suffix appended to ciphertext filenames in recursive mode
pub const ENCRYPTED_SUFFIX: &str = "rex";

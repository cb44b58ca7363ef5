// src/key_ops.rs
//! Key generation, parsing and transport encoding
//!
//! Keys are 256-bit random secrets. Their textual transport form is
//! URL-safe unpadded base64 — safe to paste into a shell.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use zeroize::Zeroize;

use crate::consts::KEY_LEN;
use crate::error::{CoreError, Result};

/// A 256-bit symmetric key. Zeroized on drop.
#[derive(Clone)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("bytes", &"[REDACTED]").finish()
    }
}

/// Generate a new random 256-bit key from the thread CSPRNG.
pub fn generate_key() -> Key {
    let mut bytes = [0u8; KEY_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    Key::from_bytes(bytes)
}

/// Decode a caller-supplied textual key.
///
/// Fails with `InvalidKeyFormat` when the text is not valid URL-safe
/// unpadded base64 or does not decode to exactly 32 bytes.
pub fn parse_key(text: &str) -> Result<Key> {
    let mut decoded = URL_SAFE_NO_PAD
        .decode(text.trim())
        .map_err(|e| CoreError::InvalidKeyFormat(e.to_string()))?;

    if decoded.len() != KEY_LEN {
        decoded.zeroize();
        return Err(CoreError::InvalidKeyFormat(format!(
            "expected {KEY_LEN} key bytes, got {}",
            decoded.len()
        )));
    }

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&decoded);
    decoded.zeroize();
    Ok(Key::from_bytes(bytes))
}

/// Encode a key in its textual transport form.
pub fn encode_key(key: &Key) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_parse_roundtrip() {
        let key = generate_key();
        let text = encode_key(&key);
        let parsed = parse_key(&text).unwrap();
        assert_eq!(key.as_bytes(), parsed.as_bytes());
    }

    #[test]
    fn parse_rejects_bad_base64() {
        let err = parse_key("not!!valid@@base64").unwrap_err();
        assert!(matches!(err, CoreError::InvalidKeyFormat(_)));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = parse_key("c2hvcnQ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidKeyFormat(_)));
    }
}

// src/crypto/decrypt.rs
use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::envelope;
use crate::error::{CoreError, Result};
use crate::key_ops::Key;

/// Decrypt a ciphertext envelope → plaintext (in-memory)
///
/// Fails with `MalformedEnvelope` when the input does not even parse as
/// an envelope, and with `AuthenticationFailure` when the tag does not
/// verify (wrong key, tampering anywhere in the envelope, truncation).
/// Never returns partial plaintext.
pub fn decrypt_to_vec(key: &Key, data: &[u8]) -> Result<Vec<u8>> {
    let env = envelope::parse(data)?;

    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = XNonce::from_slice(&env.nonce);

    cipher
        .decrypt(
            nonce,
            Payload {
                msg: env.payload,
                aad: env.header,
            },
        )
        .map_err(|_| CoreError::AuthenticationFailure)
}

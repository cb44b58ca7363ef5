// src/crypto/encrypt.rs
use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::RngCore;

use crate::consts::NONCE_LEN;
use crate::envelope;
use crate::error::{CoreError, Result};
use crate::key_ops::Key;

/// Encrypt plaintext → ciphertext envelope (in-memory)
///
/// A fresh random nonce is drawn per call, so encrypting identical
/// plaintext twice under the same key yields different envelopes.
/// The envelope header is bound as associated data, so a flipped
/// header bit fails authentication just like a flipped payload bit.
/// Any byte buffer, including an empty one, is valid plaintext.
pub fn encrypt_to_vec(key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = XNonce::from_slice(&nonce_bytes);

    let header = envelope::header(chrono::Utc::now().timestamp(), &nonce_bytes);
    let sealed = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(CoreError::Crypto)?;

    Ok(envelope::seal(header, &sealed))
}

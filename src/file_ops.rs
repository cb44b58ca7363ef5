// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! This module handles encryption and decryption with file I/O,
//! building on the pure crypto primitives from crypto/.
//! Also includes envelope detection utilities.
//!
//! Both operations silently overwrite an existing file at the output
//! path — a deliberately destructive default.

use std::path::Path;

use crate::consts::ENVELOPE_VERSION;
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::error::Result;
use crate::key_ops::{generate_key, Key};

/// Encrypt a file on disk under a freshly generated key.
///
/// Reads the plaintext file, encrypts it in-memory, writes the envelope.
/// Returns the generated key — the caller decides how to display or
/// store it; this function never writes it to disk.
pub fn encrypt_file<P: AsRef<Path>>(input_path: P, output_path: P) -> Result<Key> {
    let key = generate_key();
    let plaintext = std::fs::read(input_path.as_ref())?;
    let ciphertext = encrypt_to_vec(&key, &plaintext)?;
    std::fs::write(output_path.as_ref(), ciphertext)?;
    Ok(key)
}

/// Decrypt an envelope file on disk with a caller-supplied key.
pub fn decrypt_file<P: AsRef<Path>>(input_path: P, output_path: P, key: &Key) -> Result<()> {
    let ciphertext = std::fs::read(input_path.as_ref())?;
    let plaintext = decrypt_to_vec(key, &ciphertext)?;
    std::fs::write(output_path.as_ref(), &plaintext)?;
    Ok(())
}

/// Check if data starts like a ciphertext envelope.
pub fn is_envelope(data: &[u8]) -> bool {
    data.first() == Some(&ENVELOPE_VERSION)
}

/// Get the envelope version marker, if the data carries one.
pub fn envelope_version(data: &[u8]) -> Option<u8> {
    if is_envelope(data) {
        data.first().copied()
    } else {
        None
    }
}

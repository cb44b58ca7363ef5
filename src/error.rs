// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("authentication failed: wrong key or tampered ciphertext")]
    AuthenticationFailure,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("traversal error: {0}")]
    Traversal(String),

    #[error("crypto operation failed: {0}")]
    Crypto(chacha20poly1305::aead::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O
//!
//! All functions work exclusively on in-memory buffers.
mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;

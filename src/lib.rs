// src/lib.rs
//! rexcrypt — authenticated file encryption, single files or whole trees
//!
//! Features:
//! - XChaCha20-Poly1305 envelopes (version marker + timestamp + nonce + tag)
//! - Fresh random 256-bit key per encryption, zeroized on drop
//! - Recursive tree mode with per-file keys and per-file failure reporting

pub mod consts;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod tree_ops;

// Re-export everything users need at the crate root
pub use crypto::{decrypt_to_vec, encrypt_to_vec};
pub use error::{CoreError, Result};
pub use file_ops::{decrypt_file, encrypt_file, envelope_version, is_envelope};
pub use key_ops::{encode_key, generate_key, parse_key, Key};
pub use tree_ops::{decrypt_tree, encrypt_tree, DecryptReport, EncryptReport, TreeFailure};

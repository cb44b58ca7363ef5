// src/tree_ops.rs
//! Recursive encryption/decryption over a directory tree
//!
//! Suffix convention: ciphertext files carry a `.rex` suffix appended to
//! the original filename (`notes.txt` → `notes.txt.rex`). Encryption
//! writes the envelope beside the plaintext and removes the plaintext on
//! success; decryption does the reverse. On any per-file failure both
//! files are left untouched and the walk continues.
//!
//! Symbolic links are never followed, so link cycles cannot trap the
//! walk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::consts::ENCRYPTED_SUFFIX;
use crate::error::{CoreError, Result};
use crate::file_ops::{decrypt_file, encrypt_file};
use crate::key_ops::Key;

/// One file the walk could not process.
#[derive(Debug)]
pub struct TreeFailure {
    /// Path relative to the walk root.
    pub path: PathBuf,
    pub error: CoreError,
}

/// Outcome of `encrypt_tree`: per-file keys plus per-file failures.
#[derive(Debug, Default)]
pub struct EncryptReport {
    /// Relative plaintext path → the key that file was encrypted under.
    pub keys: BTreeMap<PathBuf, Key>,
    pub failures: Vec<TreeFailure>,
}

/// Outcome of `decrypt_tree`: restored files plus per-file failures.
#[derive(Debug, Default)]
pub struct DecryptReport {
    /// Relative paths of the restored plaintext files.
    pub restored: Vec<PathBuf>,
    pub failures: Vec<TreeFailure>,
}

impl EncryptReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

impl DecryptReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

fn check_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(CoreError::Traversal(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(())
}

fn relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn has_encrypted_suffix(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(ENCRYPTED_SUFFIX))
        .unwrap_or(false)
}

fn encrypted_name(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ENCRYPTED_SUFFIX);
    PathBuf::from(name)
}

/// Encrypt every regular file under `root`, each under its own fresh key.
///
/// Files already carrying the `.rex` suffix are skipped. Per-file
/// failures are recorded and never abort the walk; only an invalid root
/// is fatal.
pub fn encrypt_tree<P: AsRef<Path>>(root: P) -> Result<EncryptReport> {
    let root = root.as_ref();
    check_root(root)?;

    let mut report = EncryptReport::default();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                report.failures.push(TreeFailure {
                    path: relative(&path, root),
                    error: CoreError::Traversal(e.to_string()),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() || has_encrypted_suffix(entry.path()) {
            continue;
        }

        let path = entry.path();
        let output = encrypted_name(path);
        match encrypt_file(path, output.as_path()) {
            Ok(key) => {
                // The envelope is safely on disk; drop the plaintext.
                if let Err(e) = std::fs::remove_file(path) {
                    report.failures.push(TreeFailure {
                        path: relative(path, root),
                        error: e.into(),
                    });
                    continue;
                }
                info!("encrypted {} -> {}", path.display(), output.display());
                report.keys.insert(relative(path, root), key);
            }
            Err(e) => {
                warn!("failed to encrypt {}: {e}", path.display());
                report.failures.push(TreeFailure {
                    path: relative(path, root),
                    error: e,
                });
            }
        }
    }
    Ok(report)
}

/// Decrypt every `.rex` file under `root` with the single supplied key.
///
/// Asymmetric on purpose with `encrypt_tree`: each file was encrypted
/// under its own key, so only files whose key matches `key` are
/// restored; the rest fail authentication and are reported, never fatal.
pub fn decrypt_tree<P: AsRef<Path>>(root: P, key: &Key) -> Result<DecryptReport> {
    let root = root.as_ref();
    check_root(root)?;

    let mut report = DecryptReport::default();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                report.failures.push(TreeFailure {
                    path: relative(&path, root),
                    error: CoreError::Traversal(e.to_string()),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_encrypted_suffix(entry.path()) {
            continue;
        }

        let path = entry.path();
        let output = path.with_extension("");
        match decrypt_file(path, output.as_path(), key) {
            Ok(()) => {
                if let Err(e) = std::fs::remove_file(path) {
                    report.failures.push(TreeFailure {
                        path: relative(path, root),
                        error: e.into(),
                    });
                    continue;
                }
                info!("decrypted {} -> {}", path.display(), output.display());
                report.restored.push(relative(&output, root));
            }
            Err(e) => {
                warn!("failed to decrypt {}: {e}", path.display());
                report.failures.push(TreeFailure {
                    path: relative(path, root),
                    error: e,
                });
            }
        }
    }
    Ok(report)
}

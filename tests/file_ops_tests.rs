// tests/file_ops_tests.rs
use rexcrypt::consts::ENVELOPE_VERSION;
use rexcrypt::error::CoreError;
use rexcrypt::{
    decrypt_file, encrypt_file, envelope_version, generate_key, is_envelope, parse_key,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_encrypt_file_and_decrypt_file_roundtrip() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let enc = dir.path().join("secret.rex");
    let dec = dir.path().join("out.txt");

    fs::write(&plain, b"The quick brown fox jumps over the lazy dog").unwrap();

    let key = encrypt_file(&plain, &enc).unwrap();
    decrypt_file(&enc, &dec, &key).unwrap();

    assert_eq!(fs::read(&dec).unwrap(), fs::read(&plain).unwrap());
}

#[test]
fn test_empty_file_roundtrip() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("empty");
    let enc = dir.path().join("empty.rex");
    let dec = dir.path().join("empty.out");

    fs::write(&plain, b"").unwrap();

    let key = encrypt_file(&plain, &enc).unwrap();
    decrypt_file(&enc, &dec, &key).unwrap();

    assert_eq!(fs::read(&dec).unwrap().len(), 0);
}

#[test]
fn test_is_envelope_and_version() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let enc = dir.path().join("a.rex");

    fs::write(&plain, b"test").unwrap();
    encrypt_file(&plain, &enc).unwrap();

    let data = fs::read(&enc).unwrap();
    assert!(is_envelope(&data));
    assert!(!is_envelope(b"not an envelope"));
    assert_eq!(envelope_version(&data), Some(ENVELOPE_VERSION));
    assert_eq!(envelope_version(b"nope"), None);
}

#[test]
fn test_encrypt_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let result = encrypt_file(dir.path().join("nope.txt"), dir.path().join("out.rex"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_decrypt_to_missing_parent_is_io_error() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let enc = dir.path().join("a.rex");
    fs::write(&plain, b"data").unwrap();
    let key = encrypt_file(&plain, &enc).unwrap();

    let result = decrypt_file(&enc, &dir.path().join("missing/dir/out.txt"), &key);
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_decrypt_with_wrong_key_leaves_no_output() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let enc = dir.path().join("a.rex");
    let dec = dir.path().join("a.out");
    fs::write(&plain, b"data").unwrap();
    encrypt_file(&plain, &enc).unwrap();

    let other = generate_key();
    let result = decrypt_file(&enc, &dec, &other);

    assert!(matches!(result, Err(CoreError::AuthenticationFailure)));
    // Reject-then-discard: no partial plaintext on disk.
    assert!(!dec.exists());
}

#[test]
fn test_output_is_silently_overwritten() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let enc = dir.path().join("a.rex");
    fs::write(&plain, b"new content").unwrap();
    fs::write(&enc, b"stale bytes that will be replaced").unwrap();

    let key = encrypt_file(&plain, &enc).unwrap();

    let dec = dir.path().join("a.out");
    decrypt_file(&enc, &dec, &key).unwrap();
    assert_eq!(fs::read(&dec).unwrap(), b"new content");
}

#[test]
fn test_key_survives_text_transport() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("a.txt");
    let enc = dir.path().join("a.rex");
    let dec = dir.path().join("a.out");
    fs::write(&plain, b"transported").unwrap();

    let key = encrypt_file(&plain, &enc).unwrap();
    let reparsed = parse_key(&rexcrypt::encode_key(&key)).unwrap();
    decrypt_file(&enc, &dec, &reparsed).unwrap();

    assert_eq!(fs::read(&dec).unwrap(), b"transported");
}

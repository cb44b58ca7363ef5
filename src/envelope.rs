// src/envelope.rs
//! The self-describing ciphertext envelope
//!
//! Binary layout:
//! ```text
//! [1 byte: version marker][8 bytes: unix timestamp, big-endian]
//! [24 bytes: random nonce][N bytes: ciphertext][16 bytes: Poly1305 tag]
//! ```
//!
//! The envelope carries everything decryption needs besides the key.
//! Structural problems surface as `MalformedEnvelope` here, before any
//! authentication is attempted.

use crate::consts::{ENVELOPE_VERSION, HEADER_LEN, MIN_ENVELOPE_LEN, NONCE_LEN};
use crate::error::{CoreError, Result};

/// A parsed (but not yet authenticated) envelope, borrowing the input.
#[derive(Debug)]
pub struct Envelope<'a> {
    pub version: u8,
    pub timestamp: i64,
    pub nonce: [u8; NONCE_LEN],
    /// The raw header bytes — fed to the AEAD as associated data so a
    /// flipped header bit fails authentication like any payload bit.
    pub header: &'a [u8],
    /// Ciphertext with the trailing authentication tag.
    pub payload: &'a [u8],
}

/// Build the header: version marker + big-endian timestamp + nonce.
pub fn header(timestamp: i64, nonce: &[u8; NONCE_LEN]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN);
    out.push(ENVELOPE_VERSION);
    out.extend_from_slice(&timestamp.to_be_bytes());
    out.extend_from_slice(nonce);
    out
}

/// Assemble an envelope from its header and an already-sealed payload.
pub fn seal(header: Vec<u8>, payload: &[u8]) -> Vec<u8> {
    let mut out = header;
    out.extend_from_slice(payload);
    out
}

/// Split raw bytes into envelope fields.
pub fn parse(data: &[u8]) -> Result<Envelope<'_>> {
    if data.len() < MIN_ENVELOPE_LEN {
        return Err(CoreError::MalformedEnvelope(format!(
            "{} bytes is shorter than the minimum envelope of {MIN_ENVELOPE_LEN}",
            data.len()
        )));
    }

    let version = data[0];
    if version != ENVELOPE_VERSION {
        return Err(CoreError::MalformedEnvelope(format!(
            "unknown version marker 0x{version:02x}"
        )));
    }

    let mut ts_bytes = [0u8; 8];
    ts_bytes.copy_from_slice(&data[1..9]);
    let timestamp = i64::from_be_bytes(ts_bytes);

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&data[9..HEADER_LEN]);

    Ok(Envelope {
        version,
        timestamp,
        nonce,
        header: &data[..HEADER_LEN],
        payload: &data[HEADER_LEN..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TAG_LEN;

    #[test]
    fn seal_parse_roundtrip() {
        let nonce = [7u8; NONCE_LEN];
        let payload = vec![0xAB; TAG_LEN + 5];
        let raw = seal(header(1_700_000_000, &nonce), &payload);

        let env = parse(&raw).unwrap();
        assert_eq!(env.version, ENVELOPE_VERSION);
        assert_eq!(env.timestamp, 1_700_000_000);
        assert_eq!(env.nonce, nonce);
        assert_eq!(env.header, &raw[..HEADER_LEN]);
        assert_eq!(env.payload, &payload[..]);
    }

    #[test]
    fn parse_rejects_short_input() {
        let err = parse(&[ENVELOPE_VERSION; 10]).unwrap_err();
        assert!(matches!(err, CoreError::MalformedEnvelope(_)));
    }

    #[test]
    fn parse_rejects_unknown_version() {
        let mut raw = seal(header(0, &[0u8; NONCE_LEN]), &[0u8; TAG_LEN]);
        raw[0] = 0x01;
        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, CoreError::MalformedEnvelope(_)));
    }
}

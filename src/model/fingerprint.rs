//! Content-addressed request identity.
//!
//! A fingerprint is the SHA-256 digest of a request's canonical encoding.
//! Two requests match iff their fingerprints are bit-equal, so lookup is a
//! single hash-map probe and collision resistance removes match ambiguity.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::model::Request;

/// Width of the digest in bytes.
pub const FINGERPRINT_LEN: usize = 32;

/// Stable 256-bit identifier derived from a request's canonical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Computes the fingerprint of a request.
    #[must_use]
    pub fn from_request(request: &Request) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canonical_encoding(request));
        Self(hasher.finalize().into())
    }

    /// Returns the raw 32-byte digest.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(FINGERPRINT_LEN * 2);
        for byte in self.0 {
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
        out
    }

    /// Parses a fingerprint from 64 hex characters (either case).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the input is not exactly 64 hex digits.
    pub fn parse_hex(hex: &str) -> Result<Self, Error> {
        let bytes = hex.as_bytes();
        if bytes.len() != FINGERPRINT_LEN * 2 {
            return Err(Error::validation(format!(
                "fingerprint must be {} hex characters, got {}",
                FINGERPRINT_LEN * 2,
                bytes.len()
            )));
        }
        let mut digest = [0u8; FINGERPRINT_LEN];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            digest[i] = (hi << 4) | lo;
        }
        Ok(Self(digest))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

const HEX: &[u8; 16] = b"0123456789abcdef";

fn hex_value(byte: u8) -> Result<u8, Error> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        other => {
            Err(Error::validation(format!("invalid hex character {:?} in fingerprint", char::from(other))))
        }
    }
}

/// Deterministic byte encoding of a request.
///
/// Fields are emitted in fixed order (protocol, action, target, headers,
/// body), each length-prefixed so the encoding is injective: no two distinct
/// requests share an encoding. Header order is preserved as given, since
/// order is part of request identity.
fn canonical_encoding(request: &Request) -> Vec<u8> {
    let mut buf = Vec::new();
    put_field(&mut buf, request.protocol().as_bytes());
    put_field(&mut buf, request.action().as_bytes());
    put_field(&mut buf, request.target().as_bytes());
    put_len(&mut buf, request.headers().len());
    for (name, value) in request.headers() {
        put_field(&mut buf, name.as_bytes());
        put_field(&mut buf, value.as_bytes());
    }
    put_field(&mut buf, request.body());
    buf
}

fn put_len(buf: &mut Vec<u8>, len: usize) {
    buf.extend_from_slice(&(len as u64).to_be_bytes());
}

fn put_field(buf: &mut Vec<u8>, bytes: &[u8]) {
    put_len(buf, bytes.len());
    buf.extend_from_slice(bytes);
}

// src/key_ops.rs
//! Key construction, generation and representation
//!
//! A [`SecretKey`] always holds a valid AES key length. The raw bytes
//! live in a zeroizing container and never reach `Debug`
//! output or logs; use [`SecretKey::fingerprint`] to identify a key.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::aliases::KeyBytes;
use crate::consts::FINGERPRINT_LENGTH_HEX;
use crate::enums::KeySize;
use crate::error::{CryptoError, Result};

/// Raw AES key material (128, 192 or 256 bits)
pub struct SecretKey {
    bytes: KeyBytes,
    size: KeySize,
}

impl SecretKey {
    /// Use the given bytes as the key
    ///
    /// Fails with [`CryptoError::InvalidKeyLength`] unless the input is
    /// 16, 24 or 32 bytes long.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = KeyBytes::new(bytes.into());
        let len = bytes.len();
        let size = KeySize::from_len(len).ok_or(CryptoError::InvalidKeyLength(len))?;
        Ok(Self { bytes, size })
    }

    /// Use the UTF-8 bytes of `secret` as the key
    ///
    /// `"1234567890123456"` is therefore an AES-128 key.
    pub fn from_str_utf8(secret: &str) -> Result<Self> {
        Self::from_bytes(secret.as_bytes())
    }

    pub fn from_hex(hex_key: &str) -> Result<Self> {
        Self::from_bytes(hex::decode(hex_key.trim())?)
    }

    pub fn from_base64(b64_key: &str) -> Result<Self> {
        Self::from_bytes(STANDARD.decode(b64_key.trim())?)
    }

    /// Derive an AES-256 key from a passphrase of any length (SHA-256)
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        Self {
            bytes: KeyBytes::new(digest.to_vec()),
            size: KeySize::Aes256,
        }
    }

    /// Fresh random key from the thread-local CSPRNG
    pub fn generate(size: KeySize) -> Self {
        let mut buf = vec![0u8; size.bytes()];
        rand::rng().fill_bytes(&mut buf);
        Self {
            bytes: KeyBytes::new(buf),
            size,
        }
    }

    pub fn size(&self) -> KeySize {
        self.size
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Short BLAKE3 fingerprint — safe to log
    pub fn fingerprint(&self) -> String {
        let hash = blake3::hash(self.expose_secret()).to_hex();
        hash.as_str()[..FINGERPRINT_LENGTH_HEX].to_string()
    }
}

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self {
            bytes: KeyBytes::new(self.expose_secret().to_vec()),
            size: self.size,
        }
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("size", &self.size)
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}

impl FromStr for SecretKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_utf8(s)
    }
}

/// Generate a new random 256-bit key
#[inline]
pub fn generate_key() -> SecretKey {
    SecretKey::generate(KeySize::Aes256)
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone, Serialize)]
pub struct KeyRepr {
    pub size: KeySize,
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &SecretKey) -> KeyRepr {
    KeyRepr {
        size: key.size(),
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}

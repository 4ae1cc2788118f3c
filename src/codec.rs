// src/codec.rs
//! Advanced Encryption Standard (short: AES) text codec
//!
//! [`Aes`] turns text or bytes into Base64 ciphertext and back. The wire
//! format is AES/ECB/PKCS#7 encoded with the standard padded Base64
//! alphabet, so values round-trip with `javax.crypto.Cipher.getInstance("AES")`
//! plus `java.util.Base64`.

use std::fmt;

use base64::Engine;
use tracing::{debug, trace};

use crate::crypto::{decrypt_with, encrypt_with, BlockCipher};
use crate::enums::Base64Alphabet;
use crate::error::Result;
use crate::key_ops::SecretKey;

pub struct Aes {
    key: SecretKey,
    cipher: BlockCipher,
    alphabet: Base64Alphabet,
}

impl Aes {
    /// Build a codec around an existing key
    pub fn new(key: SecretKey) -> Self {
        let cipher = BlockCipher::new(&key);
        debug!(
            size = ?key.size(),
            fingerprint = %key.fingerprint(),
            "AES codec ready"
        );
        Self {
            key,
            cipher,
            alphabet: Base64Alphabet::default(),
        }
    }

    /// Key from raw bytes (16, 24 or 32 of them)
    pub fn from_bytes(secret: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::new(SecretKey::from_bytes(secret)?))
    }

    /// Key from the UTF-8 bytes of a string
    pub fn from_secret(secret: &str) -> Result<Self> {
        Ok(Self::new(SecretKey::from_str_utf8(secret)?))
    }

    pub fn with_alphabet(mut self, alphabet: Base64Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn alphabet(&self) -> Base64Alphabet {
        self.alphabet
    }

    /// Encrypt `value` and return it as Base64 text
    pub fn encode(&self, value: impl AsRef<[u8]>) -> String {
        let value = value.as_ref();
        let ciphertext = encrypt_with(&self.cipher, value);
        trace!(
            plaintext_len = value.len(),
            ciphertext_len = ciphertext.len(),
            "encoded"
        );
        self.alphabet.engine().encode(ciphertext)
    }

    /// Decode Base64 text produced by [`Aes::encode`] with the same key
    ///
    /// Fails with `Base64` for malformed text, `InvalidBlockLength` or
    /// `BadPadding` for ciphertext that does not belong to this key, and
    /// `Utf8` when the plaintext is binary (use [`Aes::decode_to_vec`]).
    pub fn decode(&self, value: impl AsRef<[u8]>) -> Result<String> {
        let plaintext = self.decode_to_vec(value)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Like [`Aes::decode`], but invalid UTF-8 becomes U+FFFD instead of
    /// an error — the behavior of Java's `new String(bytes)`
    pub fn decode_lossy(&self, value: impl AsRef<[u8]>) -> Result<String> {
        let plaintext = self.decode_to_vec(value)?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// Like [`Aes::decode`], but returns the raw plaintext bytes
    pub fn decode_to_vec(&self, value: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let ciphertext = self.alphabet.engine().decode(value.as_ref())?;
        let plaintext = decrypt_with(&self.cipher, &ciphertext)?;
        trace!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "decoded"
        );
        Ok(plaintext)
    }
}

impl Clone for Aes {
    fn clone(&self) -> Self {
        Self::new(self.key.clone()).with_alphabet(self.alphabet)
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("key", &self.key)
            .field("alphabet", &self.alphabet)
            .finish()
    }
}

impl From<SecretKey> for Aes {
    fn from(key: SecretKey) -> Self {
        Self::new(key)
    }
}

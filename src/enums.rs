// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: key sizes and the
//! Base64 alphabet used for ciphertext text.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

/// Encoders always pad; decoders accept input with or without `=` and
/// ignore stray bits in the final symbol, like `java.util.Base64.getDecoder()`
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

static STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
static URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Supported AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeySize {
    Aes128,
    Aes192,
    #[default]
    Aes256,
}

impl KeySize {
    /// Key size for a raw key length, if AES supports it
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes
    pub fn bytes(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    pub fn bits(self) -> usize {
        self.bytes() * 8
    }
}

/// Alphabet of the Base64 text that carries ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Base64Alphabet {
    /// `+` and `/`, padded — what `java.util.Base64.getEncoder()` emits
    #[default]
    Standard,
    /// `-` and `_`, padded
    UrlSafe,
}

impl Base64Alphabet {
    pub(crate) fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD_LENIENT,
            Self::UrlSafe => &URL_SAFE_LENIENT,
        }
    }
}

// src/lib.rs
//! thenextlvl-crypto — AES text codec
//!
//! Features:
//! - AES-128/192/256 in ECB mode with PKCS#7 padding
//! - Base64 text output, compatible with the JCA `"AES"` transformation
//! - Zeroizing secret keys
//! - File helpers and a TOML config layer for the `aes-codec` CLI

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod key_source;

// Re-export everything users need at the crate root
pub use codec::Aes;
pub use config::load as load_config;
pub use crypto::{decrypt_to_vec, encrypt_to_vec};
pub use enums::{Base64Alphabet, KeySize};
pub use error::{CryptoError, Result};
pub use file_ops::{decode_file, encode_file};
pub use key_ops::{generate_key, key_representations, KeyRepr, SecretKey};
pub use key_source::{resolve_key, KeyOrigin, KeyOverrides};

// src/key_source.rs
//! Where the CLI's secret key comes from
//!
//! Precedence: explicit overrides (hex, UTF-8 string, passphrase), then
//! the config's `[key] hex`, then the environment variable named by
//! `[key] env_var`. Anything past that (an interactive prompt) is up to
//! the caller.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::key_ops::SecretKey;

/// Key material given on the command line
#[derive(Debug, Clone, Default)]
pub struct KeyOverrides {
    pub hex: Option<String>,
    pub utf8: Option<String>,
    pub passphrase: Option<String>,
}

/// Which source produced a resolved key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOrigin {
    HexOverride,
    Utf8Override,
    Passphrase,
    ConfigHex,
    EnvVar(String),
}

/// Resolve a key from overrides, config and environment
///
/// `Ok(None)` means no source is set. An invalid key in the winning
/// source is an error; later sources are not consulted.
pub fn resolve_key(
    overrides: &KeyOverrides,
    config: &Config,
) -> Result<Option<(SecretKey, KeyOrigin)>> {
    if let Some(hex_key) = &overrides.hex {
        return Ok(Some((SecretKey::from_hex(hex_key)?, KeyOrigin::HexOverride)));
    }
    if let Some(key) = &overrides.utf8 {
        return Ok(Some((SecretKey::from_str_utf8(key)?, KeyOrigin::Utf8Override)));
    }
    if let Some(passphrase) = &overrides.passphrase {
        return Ok(Some((
            SecretKey::from_passphrase(passphrase),
            KeyOrigin::Passphrase,
        )));
    }
    if let Some(hex_key) = &config.key.hex {
        return Ok(Some((SecretKey::from_hex(hex_key)?, KeyOrigin::ConfigHex)));
    }
    if let Ok(secret) = std::env::var(&config.key.env_var) {
        debug!(env_var = %config.key.env_var, "using key from environment");
        let key = SecretKey::from_str_utf8(&secret)?;
        return Ok(Some((key, KeyOrigin::EnvVar(config.key.env_var.clone()))));
    }
    Ok(None)
}

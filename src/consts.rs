// src/consts.rs
//! Shared constants — cipher parameters and defaults

/// AES block size in bytes; every ciphertext is a multiple of this
pub const BLOCK_SIZE: usize = 16;

/// Hex characters of the BLAKE3 key fingerprint shown in logs and `Debug`
pub const FINGERPRINT_LENGTH_HEX: usize = 16;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "NLC_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "crypto-config.toml";

/// Sub-directory of the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "thenextlvl-crypto";

/// Default environment variable the CLI reads the secret key from
pub const DEFAULT_SECRET_ENV_VAR: &str = "NLC_SECRET";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

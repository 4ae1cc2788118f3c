// src/config/app.rs
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;

use super::defaults::*;
use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::enums::{Base64Alphabet, KeySize};
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_key")]
    pub key: KeySection,
    #[serde(default = "default_codec")]
    pub codec: CodecSection,
    #[serde(default = "default_keygen")]
    pub keygen: KeygenSection,
    #[serde(default = "default_logging")]
    pub logging: LoggingSection,
    /// Where this config came from; not part of the TOML
    #[serde(skip)]
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySection {
    /// Environment variable holding the secret (UTF-8 string key)
    #[serde(default = "default_secret_env_var")]
    pub env_var: String,
    /// Hex key; takes precedence over `env_var`
    #[serde(default)]
    pub hex: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecSection {
    #[serde(default)]
    pub alphabet: Base64Alphabet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeygenSection {
    #[serde(default)]
    pub size: KeySize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Defaults,
    File(PathBuf),
    Inline,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: default_key(),
            codec: default_codec(),
            keygen: default_keygen(),
            logging: default_logging(),
            source: ConfigSource::Defaults,
        }
    }
}

impl Config {
    /// Parse a config from TOML text; missing sections take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut conf: Config = toml::from_str(content)?;
        conf.source = ConfigSource::Inline;
        Ok(conf)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut conf = Self::from_toml_str(&content)?;
        conf.source = ConfigSource::File(path.to_path_buf());
        Ok(conf)
    }

    /// Resolve the config file: `NLC_CONFIG`, then the working directory,
    /// then the platform config dir. `None` means built-in defaults.
    pub fn locate() -> Result<Option<PathBuf>> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                return Err(CryptoError::Config(format!(
                    "{CONFIG_ENV_VAR} points to missing file {}",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
            .filter(|path| path.exists()))
    }

    /// Locate and read the config without caching it
    ///
    /// Callers log `source` once their subscriber is installed.
    pub fn discover() -> Result<Self> {
        match Self::locate()? {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load config once — later calls return the cached value
pub fn load() -> Result<&'static Config> {
    CONFIG.get_or_try_init(Config::discover)
}

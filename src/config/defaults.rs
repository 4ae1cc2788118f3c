// src/config/defaults.rs
use crate::config::app::{CodecSection, KeySection, KeygenSection, LoggingSection};
use crate::consts::{DEFAULT_LOG_FILTER, DEFAULT_SECRET_ENV_VAR};
use crate::enums::{Base64Alphabet, KeySize};

pub fn default_secret_env_var() -> String {
    DEFAULT_SECRET_ENV_VAR.into()
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_key() -> KeySection {
    KeySection {
        env_var: default_secret_env_var(),
        hex: None,
    }
}

pub fn default_codec() -> CodecSection {
    CodecSection {
        alphabet: Base64Alphabet::Standard,
    }
}

pub fn default_keygen() -> KeygenSection {
    KeygenSection {
        size: KeySize::Aes256,
    }
}

pub fn default_logging() -> LoggingSection {
    LoggingSection {
        filter: default_log_filter(),
    }
}

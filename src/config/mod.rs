// src/config/mod.rs
//! Configuration system for thenextlvl-crypto
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{
    load, CodecSection, Config, ConfigSource, KeySection, KeygenSection, LoggingSection,
};

mod app;
mod defaults;

// tests/config_lookup_tests.rs
//! Config file discovery — these tests change env vars and the working
//! directory, so each one holds `ENV_LOCK` for its whole run.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::{tempdir, TempDir};
use thenextlvl_crypto::config::{Config, ConfigSource};
use thenextlvl_crypto::{Base64Alphabet, CryptoError, KeySize};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Isolated process state: empty cwd, no `NLC_CONFIG`, private
/// `XDG_CONFIG_HOME`. Restores everything on drop.
struct Sandbox {
    old_cwd: PathBuf,
    old_nlc_config: Option<String>,
    old_xdg: Option<String>,
    cwd: TempDir,
    xdg: TempDir,
    // released last, after the temp dirs are gone
    _lock: MutexGuard<'static, ()>,
}

impl Sandbox {
    fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let old_cwd = env::current_dir().unwrap();
        let old_nlc_config = env::var("NLC_CONFIG").ok();
        let old_xdg = env::var("XDG_CONFIG_HOME").ok();

        let cwd = tempdir().unwrap();
        let xdg = tempdir().unwrap();
        env::set_current_dir(cwd.path()).unwrap();
        env::remove_var("NLC_CONFIG");
        env::set_var("XDG_CONFIG_HOME", xdg.path());

        Self {
            old_cwd,
            old_nlc_config,
            old_xdg,
            cwd,
            xdg,
            _lock: lock,
        }
    }

    fn cwd(&self) -> &Path {
        self.cwd.path()
    }

    fn platform_config(&self) -> PathBuf {
        let dir = self.xdg.path().join("thenextlvl-crypto");
        fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.old_cwd);
        match &self.old_nlc_config {
            Some(v) => env::set_var("NLC_CONFIG", v),
            None => env::remove_var("NLC_CONFIG"),
        }
        match &self.old_xdg {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

fn write_config(path: &Path, size: &str) {
    fs::write(path, format!("[keygen]\nsize = \"{size}\"\n")).unwrap();
}

#[test]
fn test_env_var_config_wins() {
    let sandbox = Sandbox::new();
    let explicit = sandbox.cwd().join("explicit.toml");
    write_config(&explicit, "aes128");
    write_config(&sandbox.cwd().join("crypto-config.toml"), "aes192");
    write_config(&sandbox.platform_config(), "aes256");
    env::set_var("NLC_CONFIG", &explicit);

    assert_eq!(Config::locate().unwrap(), Some(explicit.clone()));
    let conf = Config::discover().unwrap();
    assert_eq!(conf.source, ConfigSource::File(explicit));
    assert_eq!(conf.keygen.size, KeySize::Aes128);
}

#[test]
fn test_env_var_pointing_at_missing_file_is_an_error() {
    let sandbox = Sandbox::new();
    write_config(&sandbox.cwd().join("crypto-config.toml"), "aes192");
    env::set_var("NLC_CONFIG", sandbox.cwd().join("missing.toml"));

    assert!(matches!(Config::locate(), Err(CryptoError::Config(_))));
    assert!(matches!(Config::discover(), Err(CryptoError::Config(_))));
}

#[test]
fn test_working_directory_config_beats_platform_dir() {
    let sandbox = Sandbox::new();
    write_config(&sandbox.cwd().join("crypto-config.toml"), "aes192");
    write_config(&sandbox.platform_config(), "aes128");

    assert_eq!(
        Config::locate().unwrap(),
        Some(PathBuf::from("crypto-config.toml"))
    );
    let conf = Config::discover().unwrap();
    assert_eq!(conf.keygen.size, KeySize::Aes192);
}

#[cfg(target_os = "linux")]
#[test]
fn test_platform_config_dir_is_last_file_checked() {
    let sandbox = Sandbox::new();
    let platform = sandbox.platform_config();
    fs::write(&platform, "[codec]\nalphabet = \"url_safe\"\n").unwrap();

    assert_eq!(Config::locate().unwrap(), Some(platform.clone()));
    let conf = Config::discover().unwrap();
    assert_eq!(conf.source, ConfigSource::File(platform));
    assert_eq!(conf.codec.alphabet, Base64Alphabet::UrlSafe);
}

#[cfg(target_os = "linux")]
#[test]
fn test_no_config_anywhere_uses_defaults() {
    let _sandbox = Sandbox::new();

    assert_eq!(Config::locate().unwrap(), None);
    let conf = Config::discover().unwrap();
    assert_eq!(conf.source, ConfigSource::Defaults);
    assert_eq!(conf.keygen.size, KeySize::Aes256);
}

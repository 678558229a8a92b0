pub mod config_validator;
pub mod raw_config;

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use hebrew_switcher_core::EngineOptions;
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

const APP_DIR: &str = "HebrewSwitcher";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Keyboard stays blocked this long after a fix.
    pub block_delay_ms: u32,
    pub settle_delay_ms: u32,
    /// Undo and force-fix wait this long so the hotkey is released first.
    pub hotkey_release_delay_ms: u32,
    /// Ask the statistical detector about English words when no word list is installed.
    #[serde(default)]
    pub use_language_detector: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_delay_ms: 2000,
            settle_delay_ms: 50,
            hotkey_release_delay_ms: 300,
            use_language_detector: false,
        }
    }
}

pub fn config_path() -> io::Result<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA is not set"))?;

    Ok(PathBuf::from(appdata).join(APP_DIR).join(CONFIG_FILE))
}

/// Directory holding the config and the word lists.
pub fn data_dir() -> io::Result<PathBuf> {
    let path = config_path()?;
    Ok(path
        .parent()
        .map_or_else(PathBuf::new, Path::to_path_buf))
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

pub fn load() -> io::Result<Config> {
    let path = config_path()?;
    ensure_parent_dir(&path)?;

    confy::load_path(&path).map_err(confy_err)
}

pub fn save(cfg: &Config) -> io::Result<()> {
    cfg.validate()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let path = config_path()?;
    ensure_parent_dir(&path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let cfg = Self {
            block_delay_ms: raw.block_delay_ms,
            settle_delay_ms: raw.settle_delay_ms,
            hotkey_release_delay_ms: raw.hotkey_release_delay_ms,
            use_language_detector: raw.use_language_detector,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            block_delay: Duration::from_millis(u64::from(self.block_delay_ms)),
            settle_delay: Duration::from_millis(u64::from(self.settle_delay_ms)),
            hotkey_release_delay: Duration::from_millis(u64::from(self.hotkey_release_delay_ms)),
        }
    }
}

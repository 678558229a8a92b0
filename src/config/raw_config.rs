use serde::Deserialize;

/// On-disk shape of [`super::Config`]; missing fields take the shipped defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub block_delay_ms: u32,
    pub settle_delay_ms: u32,
    pub hotkey_release_delay_ms: u32,
    pub use_language_detector: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        let cfg = super::Config::default();
        Self {
            block_delay_ms: cfg.block_delay_ms,
            settle_delay_ms: cfg.settle_delay_ms,
            hotkey_release_delay_ms: cfg.hotkey_release_delay_ms,
            use_language_detector: cfg.use_language_detector,
        }
    }
}

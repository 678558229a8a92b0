use std::fmt::Write as _;

use crate::config::Config;

pub const MAX_DELAY_MS: u32 = 10_000;

pub fn find_invalid_delays(config: &Config) -> Option<String> {
    let delays = [
        ("block_delay_ms", config.block_delay_ms),
        ("settle_delay_ms", config.settle_delay_ms),
        ("hotkey_release_delay_ms", config.hotkey_release_delay_ms),
    ];

    let invalid: Vec<_> = delays
        .iter()
        .filter(|(_, value)| *value > MAX_DELAY_MS)
        .collect();

    if invalid.is_empty() {
        return None;
    }

    let mut error = String::from("Invalid delays found:\n\n");
    for (name, value) in invalid {
        // `String` implements `fmt::Write` infallibly.
        let _ = writeln!(error, "- '{name}' is {value} ms");
    }
    let _ = write!(error, "\nDelays must not exceed {MAX_DELAY_MS} ms.");
    Some(error)
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(error) = find_invalid_delays(self) {
            Err(error)
        } else {
            Ok(())
        }
    }
}

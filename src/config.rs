//! Runtime configuration.
//!
//! Values resolve from the process environment first (a local `.env` is loaded into it on
//! desktop), then from the `config.env` bundled into the binary for mobile builds, then
//! from built-in defaults.

use crate::assistant::DEFAULT_REPLY_DELAY;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const REPLY_DELAY_KEY: &str = "MAMAS_KITCHEN_REPLY_DELAY_MS";
pub const PREFER_DARK_KEY: &str = "MAMAS_KITCHEN_PREFER_DARK";
pub const DATA_DIR_KEY: &str = "MAMAS_KITCHEN_DATA_DIR";
pub const LOG_LEVEL_KEY: &str = "MAMAS_KITCHEN_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub reply_delay: Duration,
    pub prefer_dark: bool,
    /// Root for persisted preferences; `None` means the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            prefer_dark: false,
            data_dir: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (when present), then resolves every key against the process
    /// environment and the bundled defaults.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            // A missing .env is the normal case on mobile.
            let _ = dotenvy::dotenv();
        }

        let bundled = parse_env_lines(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| {
                bundled
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
            })
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(REPLY_DELAY_KEY) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: REPLY_DELAY_KEY,
                value: raw.clone(),
            })?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(PREFER_DARK_KEY) {
            config.prefer_dark = parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: PREFER_DARK_KEY,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(DATA_DIR_KEY) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.data_dir = Some(PathBuf::from(trimmed));
            }
        }

        if let Some(raw) = lookup(LOG_LEVEL_KEY) {
            config.log_level = Level::from_str(raw.trim()).map_err(|_| ConfigError::Invalid {
                key: LOG_LEVEL_KEY,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (REPLY_DELAY_KEY, "250"),
            (PREFER_DARK_KEY, "Yes"),
            (DATA_DIR_KEY, "/tmp/kitchen"),
            (LOG_LEVEL_KEY, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert!(config.prefer_dark);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/kitchen")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(REPLY_DELAY_KEY, "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: REPLY_DELAY_KEY,
                ..
            }
        ));

        assert!(AppConfig::from_lookup(lookup_from(&[(PREFER_DARK_KEY, "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(LOG_LEVEL_KEY, "loud")])).is_err());
    }

    #[test]
    fn test_parse_env_lines() {
        let parsed = parse_env_lines("# comment\n\nA = 1\nB=two=2\nnot a pair\n");
        assert_eq!(
            parsed,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "two=2".to_string()),
            ]
        );
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        let config = AppConfig::from_lookup(|key| {
            bundled
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap();
        assert_eq!(config.reply_delay, DEFAULT_REPLY_DELAY);
        assert!(!config.prefer_dark);
    }
}

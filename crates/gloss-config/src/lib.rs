use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,

    /// Capacity of the input -> event loop channel
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: 64,
        }
    }
}

impl Config {
    /// Defaults overridden by `GLOSS_*` environment variables
    pub fn new() -> Self {
        let channel_capacity = env::var("GLOSS_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            dictionary: DictionaryConfig::new(),
            ui: UiConfig::new(),
            channel_capacity,
        }
    }

    /// Load a JSON config file, missing fields fall back to defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.dictionary.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en/"
        );
        assert_eq!(config.dictionary.depth, 5);
        assert_eq!(config.dictionary.request_timeout_secs, None);
        assert_eq!(config.ui.max_selection_len, 50);
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "dictionary": { "depth": 3 } }"#).unwrap();
        assert_eq!(config.dictionary.depth, 3);
        assert_eq!(
            config.dictionary.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en/"
        );
        assert_eq!(config.ui.max_selection_len, 50);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::from_file(Path::new("/nonexistent/gloss.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open config file"));
    }
}

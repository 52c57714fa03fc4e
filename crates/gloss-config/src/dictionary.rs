use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

fn default_depth() -> usize {
    5
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL, the word is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Max definitions taken per part of speech
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// None keeps the HTTP client's default (no timeout)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            depth: default_depth(),
            request_timeout_secs: None,
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("GLOSS_API_URL").unwrap_or_else(|_| default_api_url());

        let depth = env::var("GLOSS_DICTIONARY_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_depth);

        let request_timeout_secs = env::var("GLOSS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            api_url,
            depth,
            request_timeout_secs,
        }
    }
}

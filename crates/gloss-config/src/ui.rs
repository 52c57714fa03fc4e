use std::env;

use serde::{Deserialize, Serialize};

fn default_max_selection_len() -> usize {
    50
}

fn default_popup_width() -> usize {
    60
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Selections this long (in chars, after trimming) or longer are ignored
    #[serde(default = "default_max_selection_len")]
    pub max_selection_len: usize,
    /// Terminal columns used to center unlabeled definitions
    #[serde(default = "default_popup_width")]
    pub popup_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_selection_len: default_max_selection_len(),
            popup_width: default_popup_width(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let max_selection_len = env::var("GLOSS_MAX_SELECTION_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_selection_len);

        let popup_width = env::var("GLOSS_POPUP_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_popup_width);

        Self {
            max_selection_len,
            popup_width,
        }
    }
}

mod client;
mod fetcher;
mod response;

pub use client::HttpEntrySource;
pub use fetcher::DefinitionFetcher;
pub use response::{ValidatedEntry, decode_entry};

use gloss_types::DefinitionList;

/// Where raw dictionary entries come from
#[async_trait::async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch the raw response body for `word`
    async fn fetch_entry(&self, word: &str) -> Result<String, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("No definition found: {0}")]
    NotFound(String),
}

impl LookupError {
    /// The one-element list shown to the user instead of this error
    pub fn placeholder(&self) -> DefinitionList {
        match self {
            LookupError::NotFound(_) => DefinitionList::not_found(),
            LookupError::Network(_) | LookupError::Parse(_) | LookupError::Api(_) => {
                DefinitionList::error()
            }
        }
    }
}

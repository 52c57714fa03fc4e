use std::time::Duration;

use async_trait::async_trait;
use gloss_config::dictionary::DictionaryConfig;
use reqwest::Url;

use crate::{EntrySource, LookupError};

/// Entry source backed by the public dictionary HTTP API
#[derive(Clone)]
pub struct HttpEntrySource {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpEntrySource {
    pub fn new(config: &DictionaryConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| LookupError::Api(format!("Invalid API URL {}: {}", config.api_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    /// `word` becomes a single percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Api(format!("API URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

#[async_trait]
impl EntrySource for HttpEntrySource {
    async fn fetch_entry(&self, word: &str) -> Result<String, LookupError> {
        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        // Unknown words come back as 404 with a JSON body, so the status
        // is not an error here; decoding decides.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Dictionary API answered HTTP {} for '{}'", status, word);
        }

        Ok(response.text().await?)
    }
}

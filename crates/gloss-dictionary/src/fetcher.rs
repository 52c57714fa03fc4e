use gloss_config::dictionary::DictionaryConfig;
use gloss_types::DefinitionList;

use crate::response::decode_entry;
use crate::{EntrySource, HttpEntrySource, LookupError};

/// Looks words up and turns every outcome into a displayable list
pub struct DefinitionFetcher<S = HttpEntrySource> {
    source: S,
    depth: usize,
}

impl DefinitionFetcher<HttpEntrySource> {
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, LookupError> {
        Ok(Self::new(HttpEntrySource::new(config)?, config.depth))
    }
}

impl<S: EntrySource> DefinitionFetcher<S> {
    pub fn new(source: S, depth: usize) -> Self {
        Self { source, depth }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Never fails: errors become a one-element placeholder list
    pub async fn fetch_definitions(&self, word: &str) -> DefinitionList {
        match self.lookup(word).await {
            Ok(list) => {
                tracing::debug!("'{}': {} definitions", word, list.len());
                list
            }
            Err(e @ LookupError::NotFound(_)) => {
                tracing::info!("Lookup of '{}': {}", word, e);
                e.placeholder()
            }
            Err(e) => {
                tracing::error!("Lookup of '{}' failed: {}", word, e);
                e.placeholder()
            }
        }
    }

    pub async fn lookup(&self, word: &str) -> Result<DefinitionList, LookupError> {
        let body = self.source.fetch_entry(word).await?;
        let entry = decode_entry(&body)?;

        DefinitionList::new(entry.definitions(self.depth))
            .map_err(|_| LookupError::NotFound(format!("no definitions within depth {}", self.depth)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use gloss_types::Definition;
    use serde_json::json;

    use super::*;

    /// Replays one canned outcome and records the words asked for
    struct MockSource {
        outcome: fn() -> Result<String, LookupError>,
        requests: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn new(outcome: fn() -> Result<String, LookupError>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EntrySource for MockSource {
        async fn fetch_entry(&self, word: &str) -> Result<String, LookupError> {
            self.requests.lock().unwrap().push(word.to_string());
            (self.outcome)()
        }
    }

    fn run_body() -> Result<String, LookupError> {
        Ok(json!([{
            "word": "run",
            "meanings": [
                { "partOfSpeech": "verb", "definitions": [
                    { "definition": "move fast" },
                    { "definition": "operate" }
                ]},
                { "partOfSpeech": "noun", "definitions": [
                    { "definition": "an act of running" }
                ]}
            ]
        }])
        .to_string())
    }

    #[tokio::test]
    async fn test_run_scenario() {
        let fetcher = DefinitionFetcher::new(MockSource::new(run_body), 5);
        let list = fetcher.fetch_definitions("run").await;

        assert_eq!(
            list.as_slice(),
            [
                Definition::new(Some("verb".into()), "move fast"),
                Definition::new(Some("noun".into()), "an act of running"),
                Definition::new(Some("verb".into()), "operate"),
            ]
        );
        assert_eq!(*fetcher.source.requests.lock().unwrap(), ["run"]);
    }

    #[tokio::test]
    async fn test_unknown_word_is_not_found_placeholder() {
        let fetcher = DefinitionFetcher::new(
            MockSource::new(|| Ok(json!({ "title": "No Definitions Found" }).to_string())),
            5,
        );
        let list = fetcher.fetch_definitions("zzzzznotaword").await;

        assert_eq!(list, DefinitionList::not_found());
        assert_eq!(list.first().part_of_speech(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_placeholder() {
        let fetcher = DefinitionFetcher::new(
            MockSource::new(|| Err(LookupError::Api("connection refused".to_string()))),
            5,
        );
        assert_eq!(fetcher.fetch_definitions("run").await, DefinitionList::error());
    }

    #[tokio::test]
    async fn test_unreadable_body_is_error_placeholder() {
        let fetcher = DefinitionFetcher::new(MockSource::new(|| Ok("<html>".to_string())), 5);
        assert_eq!(fetcher.fetch_definitions("run").await, DefinitionList::error());
    }

    #[tokio::test]
    async fn test_zero_depth_is_not_found() {
        let fetcher = DefinitionFetcher::new(MockSource::new(run_body), 0);
        assert!(matches!(
            fetcher.lookup("run").await,
            Err(LookupError::NotFound(_))
        ));
        assert_eq!(fetcher.fetch_definitions("run").await, DefinitionList::not_found());
    }
}

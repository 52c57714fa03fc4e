use gloss_config::Config;
use gloss_dictionary::{DefinitionFetcher, EntrySource, HttpEntrySource, LookupError};

use crate::host::{ActionRegistry, MenuItem, Modal, SelectionSource};
use crate::selection::validate_selection;
use crate::viewer::DefinitionViewer;

/// The context-menu entry that opens the definition popup
pub const GET_DEFINITION: MenuItem = MenuItem {
    id: "get-definition",
    title: "Get Definition",
    icon: "search",
};

/// Selection -> lookup -> popup, with no state shared between invocations
pub struct GlossPlugin<S = HttpEntrySource> {
    fetcher: DefinitionFetcher<S>,
    max_selection_len: usize,
}

impl GlossPlugin<HttpEntrySource> {
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Ok(Self::new(
            DefinitionFetcher::from_config(&config.dictionary)?,
            config.ui.max_selection_len,
        ))
    }
}

impl<S: EntrySource> GlossPlugin<S> {
    pub fn new(fetcher: DefinitionFetcher<S>, max_selection_len: usize) -> Self {
        Self {
            fetcher,
            max_selection_len,
        }
    }

    pub fn on_load(&self, registry: &mut impl ActionRegistry) {
        registry.add_item(GET_DEFINITION);
    }

    /// Run the registered action against the host's current selection
    pub async fn on_action<M: Modal>(
        &self,
        selection: &impl SelectionSource,
        new_modal: impl FnOnce() -> M,
    ) -> Option<DefinitionViewer<M>> {
        let selection = selection.selection();
        self.on_get_definition(&selection, new_modal).await
    }

    /// Look up `selection` and open a popup with the result.
    ///
    /// Invalid selections are ignored: no request is made and `new_modal`
    /// is never called.
    pub async fn on_get_definition<M: Modal>(
        &self,
        selection: &str,
        new_modal: impl FnOnce() -> M,
    ) -> Option<DefinitionViewer<M>> {
        let word = match validate_selection(selection, self.max_selection_len) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("Ignoring selection: {}", e);
                return None;
            }
        };

        let definitions = self.fetcher.fetch_definitions(word).await;
        Some(DefinitionViewer::open(word, definitions, new_modal()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use gloss_types::UiEvent;
    use serde_json::json;

    use super::*;
    use crate::viewer::Layout;
    use crate::viewer::tests::RecordingModal;

    struct MockSource {
        body: String,
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EntrySource for MockSource {
        async fn fetch_entry(&self, word: &str) -> Result<String, LookupError> {
            self.requests.lock().unwrap().push(word.to_string());
            Ok(self.body.clone())
        }
    }

    fn plugin(body: serde_json::Value) -> GlossPlugin<MockSource> {
        let source = MockSource {
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        };
        GlossPlugin::new(DefinitionFetcher::new(source, 5), 50)
    }

    fn run_body() -> serde_json::Value {
        json!([{
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
    }

    struct Editor(&'static str);

    impl SelectionSource for Editor {
        fn selection(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Default)]
    struct Menu(Vec<MenuItem>);

    impl ActionRegistry for Menu {
        fn add_item(&mut self, item: MenuItem) {
            self.0.push(item);
        }
    }

    #[test]
    fn test_on_load_registers_action() {
        let mut menu = Menu::default();
        plugin(run_body()).on_load(&mut menu);

        assert_eq!(menu.0.len(), 1);
        assert_eq!(menu.0[0].title, "Get Definition");
        assert_eq!(menu.0[0].icon, "search");
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let plugin = plugin(run_body());
        let mut viewer = plugin
            .on_action(&Editor("  run "), RecordingModal::default)
            .await
            .unwrap();

        assert_eq!(viewer.word(), "run");
        assert_eq!(viewer.modal().title.as_deref(), Some("run"));
        assert_eq!(*plugin.fetcher_requests(), ["run"]);

        let mut seen = vec![viewer.page().definition.to_string()];
        while viewer.handle(UiEvent::Next) && seen.len() < 3 {
            seen.push(viewer.page().definition.to_string());
        }
        assert_eq!(seen, ["move fast", "an act of running", "operate"]);
        assert_eq!(viewer.page().navigation.unwrap().indicator(), "3/3");
        assert_eq!(viewer.page().part_of_speech, Some("verb"));
    }

    #[tokio::test]
    async fn test_unknown_word_end_to_end() {
        let plugin = plugin(json!({ "title": "No Definitions Found" }));
        let viewer = plugin
            .on_get_definition("zzzzznotaword", RecordingModal::default)
            .await
            .unwrap();

        let page = viewer.page();
        assert_eq!(page.definition, "No definition found");
        assert_eq!(page.part_of_speech, None);
        assert_eq!(page.layout(), Layout::Centered);
        assert_eq!(page.navigation, None);
    }

    #[tokio::test]
    async fn test_invalid_selection_is_silent() {
        let plugin = plugin(run_body());

        let long = "x".repeat(50);
        for selection in ["", "   ", long.as_str()] {
            let viewer = plugin
                .on_get_definition(selection, || -> RecordingModal {
                    panic!("no popup for an invalid selection")
                })
                .await;
            assert!(viewer.is_none());
        }
        assert!(plugin.fetcher_requests().is_empty());
    }

    impl GlossPlugin<MockSource> {
        fn fetcher_requests(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
            self.fetcher.source().requests.lock().unwrap()
        }
    }
}

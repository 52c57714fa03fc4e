use gloss_types::{DefinitionList, UiEvent};

use crate::host::{Control, Modal};

/// Position of the popup within its definition list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    index: usize,
    total: usize,
}

impl ViewerState {
    /// Starts at the first definition. `total` must be at least 1.
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "viewer needs a non-empty list");
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Step back, stopping at the first definition. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        let before = self.index;
        self.index = self.index.saturating_sub(1);
        before != self.index
    }

    /// Step forward, stopping at the last definition. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        let before = self.index;
        self.index = (self.index + 1).min(self.total.saturating_sub(1));
        before != self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Part of speech shown next to the definition
    Labeled,
    /// Definition alone, centered
    Centered,
}

/// Position indicator and controls, present only for multi-entry lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub index: usize,
    pub total: usize,
}

impl Navigation {
    /// 1-based `"{index}/{total}"`
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }

    pub fn controls(&self) -> [Control; 2] {
        [Control::Previous, Control::Next]
    }
}

/// Everything a host needs to draw one page of the popup.
///
/// Built from a single index so the text, label and indicator always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub definition: &'a str,
    pub part_of_speech: Option<&'a str>,
    pub navigation: Option<Navigation>,
}

impl PageView<'_> {
    pub fn layout(&self) -> Layout {
        match self.part_of_speech {
            Some(_) => Layout::Labeled,
            None => Layout::Centered,
        }
    }
}

/// Paginated definition popup bound to one host modal
pub struct DefinitionViewer<M: Modal> {
    word: String,
    definitions: DefinitionList,
    state: ViewerState,
    modal: M,
    open: bool,
}

impl<M: Modal> DefinitionViewer<M> {
    /// Show the first definition of `definitions` in `modal`
    pub fn open(word: impl Into<String>, definitions: DefinitionList, modal: M) -> Self {
        let state = ViewerState::new(definitions.len());
        let mut viewer = Self {
            word: word.into(),
            definitions,
            state,
            modal,
            open: true,
        };

        viewer.modal.set_title(&viewer.word);
        viewer.render();
        viewer.modal.open();
        tracing::debug!(
            "Opened popup for '{}' with {} definitions",
            viewer.word,
            viewer.state.total()
        );

        viewer
    }

    pub fn page(&self) -> PageView<'_> {
        page_at(&self.word, &self.definitions, self.state)
    }

    /// Apply a click. Returns false once the popup has been closed.
    pub fn handle(&mut self, event: UiEvent) -> bool {
        if !self.open {
            return false;
        }

        let moved = match event {
            UiEvent::Previous => self.state.previous(),
            UiEvent::Next => self.state.next(),
            UiEvent::Close => {
                self.close();
                return false;
            }
        };

        if moved {
            self.render();
        }
        true
    }

    /// Close the popup and drop its state
    pub fn dismiss(mut self) {
        self.close();
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    fn render(&mut self) {
        let page = page_at(&self.word, &self.definitions, self.state);
        self.modal.render(&page);
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.modal.close();
            tracing::debug!("Closed popup for '{}'", self.word);
        }
    }
}

fn page_at<'a>(word: &'a str, definitions: &'a DefinitionList, state: ViewerState) -> PageView<'a> {
    let index = state.index();
    let current = definitions.get_clamped(index);
    let total = state.total();

    PageView {
        title: word,
        definition: current.text(),
        part_of_speech: current.part_of_speech(),
        navigation: (total > 1).then_some(Navigation { index, total }),
    }
}

//! What the embedding application has to provide.
//!
//! Any host that can hand over the current selection, register a menu
//! action and show a modal with text and two buttons can drive the viewer.

use gloss_types::UiEvent;

use crate::viewer::PageView;

/// Current text selection in the host editor
pub trait SelectionSource {
    fn selection(&self) -> String;
}

/// Context-menu / command registration
pub trait ActionRegistry {
    fn add_item(&mut self, item: MenuItem);
}

/// Modal dialog with a title region and a content region
pub trait Modal {
    fn set_title(&mut self, title: &str);

    /// Replace the whole content region with `page`
    fn render(&mut self, page: &PageView<'_>);

    fn open(&mut self);

    fn close(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Clickable navigation controls inside the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

impl Control {
    pub fn icon(self) -> &'static str {
        match self {
            Control::Previous => "chevron-left",
            Control::Next => "chevron-right",
        }
    }

    /// Event the host reports when this control is clicked
    pub fn event(self) -> UiEvent {
        match self {
            Control::Previous => UiEvent::Previous,
            Control::Next => UiEvent::Next,
        }
    }
}

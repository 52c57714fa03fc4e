use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A registered menu action was triggered with the current selection
    Invoke { action: String, selection: String },
    UiEvent(UiEvent),
    /// Input closed or Ctrl+C, stop the event loop
    Shutdown,
}

/// Clicks coming from an open definition popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    Previous,
    Next,
    Close,
}

pub mod definition;
pub mod types;

pub use definition::{Definition, DefinitionList, ListError, ERROR_PLACEHOLDER, NOT_FOUND_PLACEHOLDER};
pub use types::{AppEvent, UiEvent};

pub mod host;
pub mod plugin;
pub mod selection;
pub mod viewer;

pub use plugin::GlossPlugin;
pub use viewer::{DefinitionViewer, PageView, ViewerState};

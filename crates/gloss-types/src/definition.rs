use serde::{Deserialize, Serialize};

/// Shown when the lookup itself failed (transport error or unreadable body)
pub const ERROR_PLACEHOLDER: &str = "An error has occurred";
/// Shown when the service answered but not with a usable entry
pub const NOT_FOUND_PLACEHOLDER: &str = "No definition found";

/// One dictionary sense, optionally tagged with its part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    part_of_speech: Option<String>,
    definition: String,
}

impl Definition {
    pub fn new(part_of_speech: Option<String>, definition: impl Into<String>) -> Self {
        Self {
            part_of_speech,
            definition: definition.into(),
        }
    }

    /// A definition with no part of speech, used for placeholders
    pub fn bare(definition: impl Into<String>) -> Self {
        Self::new(None, definition)
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.definition
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ListError {
    #[error("definition list must not be empty")]
    Empty,
}

/// Ordered, never-empty list of definitions in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionList(Vec<Definition>);

impl DefinitionList {
    pub fn new(definitions: Vec<Definition>) -> Result<Self, ListError> {
        if definitions.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(Self(definitions))
    }

    /// Single-element list substituted for a failed or empty lookup
    pub fn placeholder(text: &str) -> Self {
        Self(vec![Definition::bare(text)])
    }

    pub fn error() -> Self {
        Self::placeholder(ERROR_PLACEHOLDER)
    }

    pub fn not_found() -> Self {
        Self::placeholder(NOT_FOUND_PLACEHOLDER)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Definition> {
        self.0.get(index)
    }

    // `new` rejects empty vectors, so indexing the ends cannot fail
    pub fn first(&self) -> &Definition {
        &self.0[0]
    }

    /// Definition at `index`, or the last one when `index` is past the end
    pub fn get_clamped(&self, index: usize) -> &Definition {
        self.get(index).unwrap_or_else(|| self.last())
    }

    pub fn last(&self) -> &Definition {
        &self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Definition] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DefinitionList {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Definition>> for DefinitionList {
    type Error = ListError;

    fn try_from(definitions: Vec<Definition>) -> Result<Self, Self::Error> {
        Self::new(definitions)
    }
}

use gloss_types::Definition;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::LookupError;

#[derive(Debug, Clone, Deserialize)]
struct ApiWord {
    #[serde(default, deserialize_with = "lenient_seq")]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    #[serde(default, deserialize_with = "lenient")]
    part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    definitions: Vec<ApiDefinition>,
}

// Only `definition` is read; synonyms, examples etc. are ignored
#[derive(Debug, Clone, Default, Deserialize)]
struct ApiDefinition {
    #[serde(default, deserialize_with = "lenient")]
    definition: Option<String>,
}

/// A field of the wrong type reads as its default instead of failing the
/// whole entry
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`lenient`], per element, so positions (and depth levels) are kept
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// First word entry of a response that passed the shape check
#[derive(Debug, Clone)]
pub struct ValidatedEntry {
    meanings: Vec<ApiMeaning>,
}

/// Decode a response body into a validated entry.
///
/// A body that is not JSON at all is a [`LookupError::Parse`]; JSON of any
/// other shape than a non-empty list of entries whose first meaning has a
/// first definition is [`LookupError::NotFound`].
pub fn decode_entry(body: &str) -> Result<ValidatedEntry, LookupError> {
    let value: Value = serde_json::from_str(body)?;

    let first = match value {
        Value::Array(items) => items.into_iter().next(),
        other => {
            return Err(LookupError::NotFound(format!(
                "expected a list of entries, got {}",
                kind(&other)
            )));
        }
    }
    .ok_or_else(|| LookupError::NotFound("empty entry list".to_string()))?;

    let word: ApiWord = serde_json::from_value(first)
        .map_err(|e| LookupError::NotFound(format!("unrecognized entry: {}", e)))?;

    let first_definition = word
        .meanings
        .first()
        .ok_or_else(|| LookupError::NotFound("entry has no meanings".to_string()))?
        .definitions
        .first()
        .ok_or_else(|| LookupError::NotFound("first meaning has no definitions".to_string()))?;

    if first_definition.definition.is_none() {
        return Err(LookupError::NotFound(
            "first definition has no text".to_string(),
        ));
    }

    Ok(ValidatedEntry {
        meanings: word.meanings,
    })
}

impl ValidatedEntry {
    /// Up to `depth` definitions per part of speech, depth-major.
    ///
    /// Level 0 of every meaning comes first (in response order), then
    /// level 1 of every meaning that has one, and so on.
    pub fn definitions(&self, depth: usize) -> Vec<Definition> {
        let mut out = Vec::new();

        for level in 0..depth {
            for meaning in &self.meanings {
                let Some(text) = meaning
                    .definitions
                    .get(level)
                    .and_then(|d| d.definition.as_deref())
                else {
                    continue;
                };
                out.push(Definition::new(meaning.part_of_speech.clone(), text));
            }
        }

        out
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

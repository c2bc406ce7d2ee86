//! Translation payload parsing.
//!
//! Payloads arrive as JSON objects whose leaves are strings. Nested objects are
//! flattened into dotted keys so that `{"nav": {"home": "Accueil"}}` is stored
//! as `nav.home`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when a payload is not a key to string mapping.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is not an object.
    #[error("translation payload must be a JSON object, found {kind}")]
    NotAnObject {
        /// JSON type found at the root.
        kind: &'static str,
    },

    /// A leaf value is neither a string nor a nested object.
    #[error("translation `{key}` must be a string, found {kind}")]
    UnsupportedValue {
        /// Dotted key of the offending entry.
        key: String,
        /// JSON type found at that key.
        kind: &'static str,
    },
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flattened translations for a single locale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslationPayload {
    entries: BTreeMap<String, String>,
}

impl TranslationPayload {
    /// Parse a JSON document into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the document is not JSON, its root is not
    /// an object, or any leaf is not a string.
    ///
    /// ```
    /// use localegate_common::TranslationPayload;
    ///
    /// let payload = TranslationPayload::from_json_str(r#"{"nav": {"home": "Accueil"}}"#)?;
    /// assert_eq!(payload.get("nav.home"), Some("Accueil"));
    /// # Ok::<(), localegate_common::PayloadError>(())
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Build a payload from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the root is not an object or any leaf is
    /// not a string.
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(PayloadError::NotAnObject {
                    kind: kind_of(&other),
                });
            }
        };

        let mut payload = Self::default();
        flatten_into(&mut payload.entries, None, map)?;
        Ok(payload)
    }

    /// Insert a single translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a translation by dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload holds no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn flatten_into(
    entries: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    map: Map<String, Value>,
) -> Result<(), PayloadError> {
    for (segment, value) in map {
        let key = match prefix {
            Some(parent) => format!("{parent}.{segment}"),
            None => segment,
        };
        match value {
            Value::String(text) => {
                entries.insert(key, text);
            }
            Value::Object(nested) => flatten_into(entries, Some(key.as_str()), nested)?,
            other => {
                return Err(PayloadError::UnsupportedValue {
                    key,
                    kind: kind_of(&other),
                });
            }
        }
    }
    Ok(())
}

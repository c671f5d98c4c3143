//! Field name mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Translates filter field names into target column expressions.
///
/// Fields arrive lower-cased. Returning `None` or an empty string rejects the
/// field, which aborts transpilation.
pub trait FieldMapper {
    fn map_field(&self, field: &str) -> Option<String>;
}

/// Passes every field through unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityMapper;

impl FieldMapper for IdentityMapper {
    fn map_field(&self, field: &str) -> Option<String> {
        Some(String::from(field))
    }
}

impl<F> FieldMapper for F
where
    F: Fn(&str) -> Option<String>,
{
    fn map_field(&self, field: &str) -> Option<String> {
        self(field)
    }
}

/// An allow-list of fields and the columns they map to.
///
/// Deserializes from a flat JSON object:
///
/// ```
/// use oxide_filter_core::transpiler::{FieldMap, FieldMapper};
///
/// let map = FieldMap::from_json_str(r#"{"type": "t.type", "alias": "t.alias"}"#).unwrap();
/// assert_eq!(map.map_field("type").as_deref(), Some("t.type"));
/// assert_eq!(map.map_field("secret"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: BTreeMap<String, String>,
}

impl FieldMap {
    /// Creates an empty map, which rejects every field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Allows `field`, emitting it as `column`.
    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into(), column.into());
        self
    }

    /// Builder form of [`FieldMap::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(field, column);
        self
    }

    /// Parses a JSON object of `field: column` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The column for `field`, if allowed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Number of allowed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Allowed field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FieldMapper for FieldMap {
    fn map_field(&self, field: &str) -> Option<String> {
        self.get(field).map(String::from)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Data types for the INI store: key/value pairs and their owning groups.

use super::error::IniError;

/// A single key/value pair within a group.
///
/// The text is the raw stored representation; numeric and boolean values
/// are stored as text and parsed on demand by the typed accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// Key, non-empty and unique within its owning group
    pub key: String,

    /// Raw textual representation of the stored scalar
    pub text: String,
}

impl Value {
    /// Create a new key/value pair.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// A named, insertion-ordered collection of values.
///
/// The single anonymous root group (`name() == None`) holds top-level
/// values that appear before any `[header]` in the file. Groups form a
/// flat sequence: a header like `parent::child` is one opaque identifier,
/// not a nested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: Option<String>,
    values: Vec<Value>,
}

impl Group {
    /// Create the anonymous root group.
    pub(crate) fn root() -> Self {
        Self {
            name: None,
            values: Vec::new(),
        }
    }

    /// Create an empty named group.
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            values: Vec::new(),
        }
    }

    /// The group identifier, `None` for the root group.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this is the anonymous root group.
    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// Number of values in this group.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this group holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up the stored text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.text.as_str())
    }

    /// Whether a key exists in this group.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|v| v.key == key)
    }

    /// Iterate over keys in stored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.key.as_str())
    }

    /// Iterate over `(key, text)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|v| (v.key.as_str(), v.text.as_str()))
    }

    /// Overwrite the text for an existing key in place, or append a new
    /// value. New values go to the end so stored order is load order.
    pub(crate) fn set(&mut self, key: &str, text: &str) {
        match self.values.iter_mut().find(|v| v.key == key) {
            Some(existing) => text.clone_into(&mut existing.text),
            None => self.values.push(Value::new(key, text)),
        }
    }

    /// Append a new value, rejecting duplicates instead of overwriting.
    pub(crate) fn insert(&mut self, key: &str, text: &str) -> Result<(), IniError> {
        if self.contains_key(key) {
            return Err(IniError::DuplicateKey(key.to_string()));
        }
        self.values.push(Value::new(key, text));
        Ok(())
    }

    /// Remove a value by key, returning it if present.
    pub(crate) fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.values.iter().position(|v| v.key == key)?;
        Some(self.values.remove(idx))
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Character formatting attached to a text run.
///
/// Held as the raw key/value object the source document supplied. Nothing
/// here is validated; callers only ever ask whether it is empty before
/// passing it through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextStyle(Map<String, Value>);

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a style that only sets `bold`
    pub fn bold() -> Self {
        Self::new().with("bold", true)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for TextStyle {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Paragraph-level formatting (named style, alignment, spacing, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParagraphStyle(Map<String, Value>);

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style that only sets `namedStyleType`, e.g. `HEADING_1`
    pub fn named(style_type: impl Into<String>) -> Self {
        Self::new().with("namedStyleType", style_type.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma separated list of every key present, in key order
    pub fn field_mask(&self) -> String {
        self.0.keys().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ParagraphStyle {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

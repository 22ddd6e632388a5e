#![forbid(unsafe_code)]

//! Opaque pane payload carried by leaf sashes.
//!
//! The tree never inspects a store; it only moves stores between sashes
//! during split, remove, swap and drop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content reference known to the host's renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    /// Plain text shown as-is.
    Text(String),
    /// Markup the host renders into the pane.
    Html(String),
    /// Key of an element the host mounts into the pane.
    Mount(String),
}

/// Value in the open extension map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StoreValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Pane payload: well-known fields plus a forward-compatible extension bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, StoreValue>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        let _ = self.extensions.insert(key.into(), value.into());
        self
    }

    /// Set an extension value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Option<StoreValue> {
        self.extensions.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StoreValue> {
        self.extensions.get(key)
    }

    /// No title, no content and no extensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.extensions.is_empty()
    }
}

//! The open-document ("tab") model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One open, editable unit of source text with an associated language.
///
/// Owned exclusively by the workspace; every other component sees borrowed
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub language: String,
    pub content: String,
}

impl Document {
    /// Create a document with a fresh unique id.
    ///
    /// # Arguments
    /// - `name`: Display name, usually produced by the naming helpers.
    /// - `language`: Catalog language id.
    /// - `content`: Initial text.
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            language: language.into(),
            content: content.into(),
        }
    }
}

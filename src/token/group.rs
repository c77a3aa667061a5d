//! Token groups and collections.

use serde::{Deserialize, Serialize};

/// A named node in the token group hierarchy.
///
/// `path` holds the names of the ancestor groups below the root. Root groups
/// contribute nothing to generated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub is_root: bool,
}

impl TokenGroup {
    /// Creates a non-root group directly below the root.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: Vec::new(),
            is_root: false,
        }
    }

    /// Creates a root group.
    pub fn root(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_root: true,
            ..Self::new(id, name)
        }
    }

    /// Sets the ancestor path, returning the group for chaining.
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Name segments this group contributes to a token name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokencss::TokenGroup;
    ///
    /// let group = TokenGroup::new("g", "Primary").with_path(["Brand"]);
    /// assert_eq!(group.ancestry(), vec!["Brand", "Primary"]);
    ///
    /// assert!(TokenGroup::root("r", "Color").ancestry().is_empty());
    /// ```
    pub fn ancestry(&self) -> Vec<&str> {
        if self.is_root {
            return Vec::new();
        }
        self.path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }
}

/// A named partition of tokens.
///
/// Tokens point at collections through `persistent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub persistent_id: String,
    pub name: String,
}

impl Collection {
    pub fn new(
        id: impl Into<String>,
        persistent_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            persistent_id: persistent_id.into(),
            name: name.into(),
        }
    }

    /// Stand-in for a collection id that matched nothing.
    ///
    /// Every field is the raw id, so the id itself becomes the display name.
    pub fn placeholder(raw_id: &str) -> Self {
        Self::new(raw_id, raw_id, raw_id)
    }
}

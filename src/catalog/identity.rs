//! Identifiers shared by the catalog loader and the taxonomy engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name of the synthetic "all categories" selection.
pub const ALL_CATEGORY: &str = "Tous";

/// Grouping key of a document. Several records may share one id; they are
/// variants of the same logical document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Category selection: either the synthetic "Tous" or one authored category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    #[default]
    All,
    Named(String),
}

impl CategoryKey {
    /// Maps the reserved sentinel to [`CategoryKey::All`]; every other value is
    /// taken as an authored category name.
    pub fn parse(raw: &str) -> Self {
        if is_reserved_category(raw) {
            CategoryKey::All
        } else {
            CategoryKey::Named(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryKey::All => ALL_CATEGORY,
            CategoryKey::Named(name) => name,
        }
    }

    /// True when a record authored under `category` falls in this scope.
    pub fn contains(&self, category: &str) -> bool {
        match self {
            CategoryKey::All => true,
            CategoryKey::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CategoryKey::parse(&raw))
    }
}

/// Authored categories must never collide with the sentinel, whatever the case.
pub fn is_reserved_category(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(ALL_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_case_insensitively() {
        assert_eq!(CategoryKey::parse("Tous"), CategoryKey::All);
        assert_eq!(CategoryKey::parse(" TOUS "), CategoryKey::All);
        assert_eq!(
            CategoryKey::parse("GUIDES OFFICIELS"),
            CategoryKey::Named("GUIDES OFFICIELS".to_string())
        );
    }

    #[test]
    fn all_scope_contains_every_category() {
        assert!(CategoryKey::All.contains("ARTICLES"));
        assert!(CategoryKey::Named("ARTICLES".into()).contains("ARTICLES"));
        assert!(!CategoryKey::Named("ARTICLES".into()).contains("A.R.S"));
    }
}

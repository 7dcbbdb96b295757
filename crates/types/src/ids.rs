//! Newtype wrappers for checkbox identities and storage scope keys
//!
//! These types keep the two kinds of string keys used by the store apart at
//! compile time: an [`Identity`] names one checkbox inside a record, a
//! [`ScopeKey`] names the record itself.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Page name used when the host reports an empty navigation path.
pub const DEFAULT_PAGE: &str = "index";

/// A content-derived identifier for one checkbox item.
///
/// Hashed identities look like `cb-<hash>-<ordinal>`; items without a
/// containing list entry fall back to `checkbox-<ordinal>`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Identity(Arc<str>);

impl Identity {
    /// Creates a new Identity from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Builds the hashed form `cb-<hash>-<ordinal>`.
    pub fn hashed(hash: &str, ordinal: usize) -> Self {
        Self(format!("cb-{}-{}", hash, ordinal).into())
    }

    /// Builds the positional-only form `checkbox-<ordinal>`.
    pub fn positional(ordinal: usize) -> Self {
        Self(format!("checkbox-{}", ordinal).into())
    }

    /// Returns the string representation of this identity
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The storage key holding one page's [`StateRecord`](crate::StateRecord).
///
/// Composed as `prefix + path`, with [`DEFAULT_PAGE`] standing in for an
/// empty path. The prefix length is remembered so the path component can be
/// recovered for change notifications.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ScopeKey {
    key: Arc<str>,
    prefix_len: usize,
}

impl ScopeKey {
    pub fn new(prefix: &str, path: &str) -> Self {
        let path = if path.is_empty() { DEFAULT_PAGE } else { path };
        Self {
            key: format!("{}{}", prefix, path).into(),
            prefix_len: prefix.len(),
        }
    }

    /// The full storage key.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn prefix(&self) -> &str {
        &self.key[..self.prefix_len]
    }

    /// The page path component, after empty-path substitution.
    pub fn path(&self) -> &str {
        &self.key[self.prefix_len..]
    }
}

impl AsRef<str> for ScopeKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_forms() {
        assert_eq!(Identity::hashed("1x9k", 3).as_str(), "cb-1x9k-3");
        assert_eq!(Identity::positional(0).as_str(), "checkbox-0");
    }

    #[test]
    fn test_identity_serializes_as_plain_string() {
        let id = Identity::from("cb-abc-0");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cb-abc-0\"");
    }

    #[test]
    fn test_scope_key_composition() {
        let key = ScopeKey::new("docsify-checkbox-", "/guide/setup");
        assert_eq!(key.as_str(), "docsify-checkbox-/guide/setup");
        assert_eq!(key.prefix(), "docsify-checkbox-");
        assert_eq!(key.path(), "/guide/setup");
    }

    #[test]
    fn test_scope_key_empty_path_uses_index() {
        let key = ScopeKey::new("test-", "");
        assert_eq!(key.as_str(), "test-index");
        assert_eq!(key.path(), DEFAULT_PAGE);
    }

    #[test]
    fn test_scope_key_empty_prefix() {
        let key = ScopeKey::new("", "/a");
        assert_eq!(key.prefix(), "");
        assert_eq!(key.path(), "/a");
    }
}

//! Shared primitive ids and the case-insensitive name key.

use serde::{Deserialize, Serialize};

/// Monotonic contact identifier assigned by the directory.
pub type ContactId = u64;

/// Ordering and identity key for contact names.
///
/// Two names that differ only in case fold to the same key, so the directory
/// treats them as duplicates. Iterating a map keyed by `NameKey` yields
/// ascending case-insensitive name order.
///
/// ```
/// use rolodex::types::NameKey;
///
/// assert_eq!(NameKey::new("Alice"), NameKey::new("ALICE"));
/// assert!(NameKey::new("alice") < NameKey::new("Bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Builds the key by case-folding `name`.
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// Folded text backing the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

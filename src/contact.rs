//! Contact record, draft, and patch types.

use serde::{Deserialize, Serialize};

use crate::types::{ContactId, NameKey};

/// Fully materialized contact owned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable contact identifier.
    pub id: ContactId,
    /// Display name; sole ordering and uniqueness key, compared case-insensitively.
    pub name: String,
    /// Display phone number; not part of the ordering.
    pub phone_number: String,
    /// Call history, most-recent-first. Append-only from the directory's view.
    pub call_log: Vec<String>,
}

impl Contact {
    /// Ordering/identity key derived from the current name.
    pub fn name_key(&self) -> NameKey {
        NameKey::new(&self.name)
    }
}

/// Insert payload used to create a new [`Contact`] with an empty call log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Display name for the new contact.
    pub name: String,
    /// Display phone number for the new contact.
    pub phone_number: String,
}

/// Sparse update where each set, non-blank field overwrites the record value.
///
/// A field that is `None` or whose text is blank after trimming leaves the
/// record untouched, so a UI shell can pass prompt output through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    /// Optional replacement name.
    pub name: Option<String>,
    /// Optional replacement phone number.
    pub phone_number: Option<String>,
}

impl ContactPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Replacement name, if set and non-blank.
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Replacement phone number, if set and non-blank.
    pub fn effective_phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|s| !s.trim().is_empty())
    }
}

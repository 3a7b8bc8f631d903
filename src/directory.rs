//! Ordered, deduplicated contact directory and per-contact call logs.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    contact::{Contact, ContactDraft, ContactPatch},
    types::{ContactId, NameKey},
};

/// Errors returned by failed directory operations. State is never changed on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No contact exists under this id.
    MissingContact(ContactId),
    /// The name collides case-insensitively with an existing contact.
    DuplicateName(NameKey),
}

/// Serializable snapshot of the whole directory, contacts in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshotV1 {
    /// Next id the directory would assign.
    pub next_contact_id: ContactId,
    /// All contacts in ascending case-insensitive name order.
    pub contacts: Vec<Contact>,
}

/// Owns every [`Contact`] and keeps them ordered by case-insensitive name.
///
/// At most one contact may exist per folded name; mutations go through ids
/// handed out by [`ContactDirectory::add`], so no external aliases outlive
/// the directory.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    records: HashMap<ContactId, Contact>,
    by_name: BTreeMap<NameKey, ContactId>,
    next_contact_id: ContactId,
}

impl ContactDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            next_contact_id: 1,
            ..Self::default()
        }
    }

    /// Rebuilds a directory from a snapshot, re-deriving the ordered index.
    pub fn from_snapshot(snapshot: DirectorySnapshotV1) -> Result<Self, DirectoryError> {
        let mut dir = Self {
            next_contact_id: snapshot.next_contact_id.max(1),
            ..Self::default()
        };

        for rec in snapshot.contacts {
            let key = rec.name_key();
            if dir.by_name.contains_key(&key) {
                return Err(DirectoryError::DuplicateName(key));
            }
            dir.next_contact_id = dir.next_contact_id.max(rec.id.saturating_add(1));
            dir.by_name.insert(key, rec.id);
            dir.records.insert(rec.id, rec);
        }

        Ok(dir)
    }

    /// Exports the directory as a snapshot value.
    pub fn export_snapshot(&self) -> DirectorySnapshotV1 {
        DirectorySnapshotV1 {
            next_contact_id: self.next_contact_id,
            contacts: self.contacts().cloned().collect(),
        }
    }

    /// Inserts a new contact with an empty call log.
    ///
    /// The name is the uniqueness key: a draft whose name folds to an already
    /// present key is rejected and the directory is left unchanged.
    pub fn add(&mut self, draft: ContactDraft) -> Result<ContactId, DirectoryError> {
        let key = NameKey::new(&draft.name);
        if self.by_name.contains_key(&key) {
            return Err(DirectoryError::DuplicateName(key));
        }

        let id = self.next_contact_id;
        self.next_contact_id += 1;

        self.by_name.insert(key, id);
        self.records.insert(
            id,
            Contact {
                id,
                name: draft.name,
                phone_number: draft.phone_number,
                call_log: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Removes and returns the contact, or `None` (and no change) when absent.
    pub fn delete(&mut self, id: ContactId) -> Option<Contact> {
        let rec = self.records.remove(&id)?;
        self.by_name.remove(&rec.name_key());
        Some(rec)
    }

    /// Applies a sparse patch to a contact.
    ///
    /// Blank or absent patch fields leave the record untouched. A name change
    /// re-keys the ordered index; renaming onto a different contact's folded
    /// name fails with [`DirectoryError::DuplicateName`] and changes nothing.
    pub fn update(&mut self, id: ContactId, patch: ContactPatch) -> Result<(), DirectoryError> {
        let old_key = self
            .records
            .get(&id)
            .ok_or(DirectoryError::MissingContact(id))?
            .name_key();

        let rename = match patch.effective_name() {
            Some(new_name) => {
                let new_key = NameKey::new(new_name);
                if new_key != old_key && self.by_name.contains_key(&new_key) {
                    return Err(DirectoryError::DuplicateName(new_key));
                }
                Some((new_name.to_string(), new_key))
            }
            None => None,
        };

        let rec = self
            .records
            .get_mut(&id)
            .ok_or(DirectoryError::MissingContact(id))?;

        if let Some((new_name, new_key)) = rename {
            rec.name = new_name;
            if new_key != old_key {
                self.by_name.remove(&old_key);
                self.by_name.insert(new_key, id);
            }
        }

        if let Some(phone) = patch.effective_phone_number() {
            rec.phone_number = phone.to_string();
        }

        Ok(())
    }

    /// Prepends `details` to the contact's call log (most-recent-first).
    pub fn record_call(
        &mut self,
        id: ContactId,
        details: impl Into<String>,
    ) -> Result<(), DirectoryError> {
        let rec = self
            .records
            .get_mut(&id)
            .ok_or(DirectoryError::MissingContact(id))?;
        rec.call_log.insert(0, details.into());
        Ok(())
    }

    /// Looks up a contact by id.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.records.get(&id)
    }

    /// Cloning variant of [`ContactDirectory::get`].
    pub fn get_cloned(&self, id: ContactId) -> Option<Contact> {
        self.get(id).cloned()
    }

    /// All contacts in ascending case-insensitive name order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.by_name.values().filter_map(|id| self.records.get(id))
    }

    /// Cloning variant of [`ContactDirectory::contacts`].
    pub fn contacts_cloned(&self) -> Vec<Contact> {
        self.contacts().cloned().collect()
    }

    /// Every call log entry of every contact, popped off one aggregate stack.
    ///
    /// Entries are pushed in directory order, most-recent-first within each
    /// contact, then popped. The output therefore starts with the *oldest*
    /// entry of the *last* contact in name order; with a single contact this
    /// is oldest-first. There are no timestamps, so this is not a true global
    /// chronology.
    pub fn all_calls_recent_order(&self) -> Vec<String> {
        let mut stack: Vec<String> = self
            .contacts()
            .flat_map(|rec| rec.call_log.iter().cloned())
            .collect();
        stack.reverse();
        stack
    }

    /// Contacts whose name contains `query` case-insensitively, or whose
    /// phone number contains `query` verbatim, in name order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let folded = query.to_lowercase();
        self.contacts()
            .filter(|rec| {
                rec.name.to_lowercase().contains(&folded) || rec.phone_number.contains(query)
            })
            .collect()
    }

    /// Cloning variant of [`ContactDirectory::search`].
    pub fn search_cloned(&self, query: &str) -> Vec<Contact> {
        self.search(query).into_iter().cloned().collect()
    }

    /// Number of contacts in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

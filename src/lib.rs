//! In-memory contact directory with case-insensitive name ordering and
//! per-contact call logs.
//!
//! The directory is the single owner of all contact records: callers hold
//! [`types::ContactId`] handles, never references that outlive it. Names are
//! the sole ordering and uniqueness key, compared case-insensitively; call
//! logs are append-only, most-recent-first. Presentation concerns (grouping
//! headers, rendering, prompting) belong to the caller.
//!
//! # Examples
//!
//! ```
//! use rolodex::{contact::{ContactDraft, ContactPatch}, directory::ContactDirectory};
//!
//! let mut dir = ContactDirectory::new();
//! let bob = dir.add(ContactDraft {
//!     name: "Bob".to_string(),
//!     phone_number: "555-0111".to_string(),
//! }).expect("add");
//! dir.add(ContactDraft {
//!     name: "alice".to_string(),
//!     phone_number: "555-0222".to_string(),
//! }).expect("add");
//!
//! // Ascending case-insensitive name order.
//! let names: Vec<&str> = dir.contacts().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["alice", "Bob"]);
//!
//! dir.record_call(bob, "Call to Bob, Duration: 5 minutes").expect("record");
//! assert_eq!(dir.get(bob).expect("get").call_log.len(), 1);
//!
//! // Blank patch fields keep the existing values.
//! dir.update(bob, ContactPatch {
//!     name: None,
//!     phone_number: Some("555-0999".to_string()),
//! }).expect("update");
//! assert_eq!(dir.get(bob).expect("get").phone_number, "555-0999");
//!
//! assert_eq!(dir.search("55").len(), 2);
//! ```
#![deny(missing_docs)]

/// Contact record, draft, and patch types.
pub mod contact;
/// The ordered directory, its errors, and snapshots.
pub mod directory;
/// Shared primitive ids and the name key.
pub mod types;

//! Contact store and commit capability.
//!
//! # Responsibility
//! - Hold the session's contact list as immutable snapshots.
//! - Replace whole records keyed by `id` and reset to the seed on reload.
//!
//! # Invariants
//! - Snapshots handed out by `list()` are never mutated afterwards.
//! - `replace` never inserts; an unknown `id` leaves the list unchanged.
//! - `revision` grows on every visible change and only then.

use crate::model::contact::{ContactId, ContactRecord};
use crate::seed::SeedDataset;
use log::{debug, warn};
use std::sync::Arc;

/// Immutable ordered view of the store at one point in time.
pub type ContactSnapshot = Arc<[ContactRecord]>;

/// Result of a keyed replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// A record with the same `id` existed and now holds the new values.
    Replaced,
    /// No record has this `id`; the store was left as is.
    NotFound,
}

/// Capability to commit an edited record back to its store.
///
/// Edit sessions receive this at construction instead of a reference to the
/// store's full API.
pub trait ContactCommit {
    fn commit(&mut self, updated: ContactRecord) -> ReplaceOutcome;
}

impl<T: ContactCommit + ?Sized> ContactCommit for &mut T {
    fn commit(&mut self, updated: ContactRecord) -> ReplaceOutcome {
        (**self).commit(updated)
    }
}

/// Session-scoped contact list seeded from a read-only dataset.
#[derive(Debug, Clone)]
pub struct ContactStore {
    seed: SeedDataset,
    contacts: ContactSnapshot,
    revision: u64,
}

impl ContactStore {
    /// Creates a store whose initial contents equal `seed`.
    pub fn new(seed: SeedDataset) -> Self {
        let contacts = seed.shared();
        debug!(
            "event=store_init module=store status=ok records={}",
            contacts.len()
        );
        Self {
            seed,
            contacts,
            revision: 0,
        }
    }

    /// Returns the current snapshot in seed order.
    pub fn list(&self) -> ContactSnapshot {
        Arc::clone(&self.contacts)
    }

    /// Looks up one record by `id`.
    pub fn get(&self, id: &ContactId) -> Option<ContactRecord> {
        self.contacts.iter().find(|contact| &contact.id == id).cloned()
    }

    /// Resets the list to the seed contents, discarding every edit.
    pub fn reload(&mut self) {
        self.contacts = self.seed.shared();
        self.revision += 1;
        debug!(
            "event=store_reload module=store status=ok records={} revision={}",
            self.contacts.len(),
            self.revision
        );
    }

    /// Substitutes the record with `updated.id`; all others pass through.
    ///
    /// Replacing with a value equal to the stored one keeps the snapshot and
    /// revision, so repeated replaces are idempotent.
    pub fn replace(&mut self, updated: ContactRecord) -> ReplaceOutcome {
        let Some(index) = self
            .contacts
            .iter()
            .position(|contact| contact.id == updated.id)
        else {
            warn!(
                "event=store_replace module=store status=not_found id={}",
                updated.id
            );
            return ReplaceOutcome::NotFound;
        };

        if self.contacts[index] == updated {
            debug!(
                "event=store_replace module=store status=unchanged id={}",
                updated.id
            );
            return ReplaceOutcome::Replaced;
        }

        let mut next = self.contacts.to_vec();
        next[index] = updated;
        self.contacts = next.into();
        self.revision += 1;
        debug!(
            "event=store_replace module=store status=ok id={} revision={}",
            self.contacts[index].id, self.revision
        );
        ReplaceOutcome::Replaced
    }

    /// Mutation counter; list views re-render when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactCommit for ContactStore {
    fn commit(&mut self, updated: ContactRecord) -> ReplaceOutcome {
        self.replace(updated)
    }
}

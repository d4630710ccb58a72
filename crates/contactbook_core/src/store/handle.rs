//! Shared store handle.
//!
//! # Responsibility
//! - Let several owners (UI state, open edit session) reach one store.
//! - Keep every store operation infallible behind the lock.
//!
//! # Invariants
//! - All clones of a handle address the same store instance.
//! - A poisoned lock is recovered; store state is always left consistent
//!   because mutations swap whole snapshots.

use crate::model::contact::{ContactId, ContactRecord};
use crate::seed::SeedDataset;
use crate::session::edit_session::EditSession;
use crate::store::contact_store::{ContactCommit, ContactSnapshot, ContactStore, ReplaceOutcome};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one session's `ContactStore`.
#[derive(Debug, Clone)]
pub struct ContactStoreHandle {
    inner: Arc<Mutex<ContactStore>>,
}

impl ContactStoreHandle {
    pub fn new(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Creates a fresh store from `seed` and wraps it.
    pub fn from_seed(seed: SeedDataset) -> Self {
        Self::new(ContactStore::new(seed))
    }

    pub fn list(&self) -> ContactSnapshot {
        self.lock().list()
    }

    pub fn get(&self, id: &ContactId) -> Option<ContactRecord> {
        self.lock().get(id)
    }

    pub fn reload(&self) {
        self.lock().reload();
    }

    pub fn replace(&self, updated: ContactRecord) -> ReplaceOutcome {
        self.lock().replace(updated)
    }

    pub fn revision(&self) -> u64 {
        self.lock().revision()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Opens an edit session on `id`, bound to commit into this store.
    ///
    /// Returns `None` when no record has this `id`.
    pub fn open_session(&self, id: &ContactId) -> Option<EditSession<ContactStoreHandle>> {
        let record = self.get(id)?;
        Some(EditSession::open(record, self.clone()))
    }

    /// Returns whether both handles address the same store.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, ContactStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactCommit for ContactStoreHandle {
    fn commit(&mut self, updated: ContactRecord) -> ReplaceOutcome {
        self.replace(updated)
    }
}

//! Edit session over one contact.
//!
//! # Responsibility
//! - Hold a private working copy of a record's editable fields.
//! - Build the replacement record on save and hand it to the commit target.
//!
//! # Invariants
//! - The committed record always carries the original `id`.
//! - Field edits are local and unvalidated.
//! - Lifecycle is `open -> (save | cancel)`; both close the session.

use crate::model::contact::{ContactField, ContactId, ContactRecord};
use crate::store::contact_store::{ContactCommit, ReplaceOutcome};
use log::debug;

/// How an edit session ended.
///
/// Either variant tells the navigation layer to go back to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The working copy was committed to the store.
    Committed {
        record: ContactRecord,
        outcome: ReplaceOutcome,
    },
    /// The working copy was dropped without touching the store.
    Discarded { id: ContactId },
}

impl SessionOutcome {
    /// Navigation signal: the detail view closes after save and cancel alike.
    pub fn returns_to_list(&self) -> bool {
        true
    }

    pub fn id(&self) -> &ContactId {
        match self {
            Self::Committed { record, .. } => &record.id,
            Self::Discarded { id } => id,
        }
    }
}

/// Working copy of one contact plus the capability to commit it.
#[derive(Debug)]
pub struct EditSession<C: ContactCommit> {
    original: ContactRecord,
    working: ContactRecord,
    commit: C,
}

impl<C: ContactCommit> EditSession<C> {
    /// Starts a session on `record`, committing through `commit` on save.
    pub fn open(record: ContactRecord, commit: C) -> Self {
        debug!("event=session_open module=session status=ok id={}", record.id);
        Self {
            working: record.clone(),
            original: record,
            commit,
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.original.id
    }

    /// Record as it was when the session opened.
    pub fn original(&self) -> &ContactRecord {
        &self.original
    }

    /// Current working value of one field.
    pub fn field(&self, field: ContactField) -> &str {
        self.working.field(field)
    }

    /// Updates one working-copy field. Nothing propagates until `save()`.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.working.set_field(field, value);
    }

    /// Record that `save()` would commit right now.
    pub fn draft(&self) -> ContactRecord {
        self.working.clone()
    }

    /// Whether any field differs from the original.
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    /// Commits `{ id: original.id, ..working fields }` and closes the session.
    pub fn save(mut self) -> SessionOutcome {
        let record = ContactRecord {
            id: self.original.id.clone(),
            ..self.working
        };
        let outcome = self.commit.commit(record.clone());
        debug!(
            "event=session_save module=session status=ok id={} outcome={:?}",
            record.id, outcome
        );
        SessionOutcome::Committed { record, outcome }
    }

    /// Drops the working copy and closes the session.
    pub fn cancel(self) -> SessionOutcome {
        debug!(
            "event=session_cancel module=session status=ok id={} dirty={}",
            self.original.id,
            self.is_dirty()
        );
        SessionOutcome::Discarded {
            id: self.original.id,
        }
    }
}

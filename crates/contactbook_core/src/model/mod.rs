//! Contact book domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by list and detail views.
//! - Name the editable fields so edit paths never touch identity.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Records change only by whole-record replacement keyed by `id`.

pub mod contact;

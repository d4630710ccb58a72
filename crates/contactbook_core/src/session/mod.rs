//! Single-record edit sessions.
//!
//! # Responsibility
//! - Stage edits for one contact without touching the store.
//! - Commit the staged record through an injected capability on save.
//!
//! # Invariants
//! - The store is unaffected until `save()`.
//! - `save()` and `cancel()` consume the session; it cannot be reused.

pub mod edit_session;

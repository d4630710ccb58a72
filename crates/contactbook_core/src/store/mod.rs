//! In-memory contact storage for one app session.
//!
//! # Responsibility
//! - Own the authoritative ordered contact list.
//! - Expose read, reload and keyed-replace operations to presentation code.
//! - Provide the commit capability edit sessions are constructed with.
//!
//! # Invariants
//! - Store operations are infallible and perform no I/O.
//! - Exactly one record per `id`; order is the seed order.

pub mod contact_store;
pub mod handle;

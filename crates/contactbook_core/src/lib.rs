//! Core state management for the contact book app.
//! UI shells render what this crate holds and call back into it on edits.

pub mod logging;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;

pub use logging::init_logging;
pub use model::contact::{ContactField, ContactId, ContactRecord, FieldParseError};
pub use seed::{
    bundled_seed, load_seed_file, parse_seed, SeedDataset, SeedError, SeedResult, SeedSource,
};
pub use session::edit_session::{EditSession, SessionOutcome};
pub use store::contact_store::{ContactCommit, ContactSnapshot, ContactStore, ReplaceOutcome};
pub use store::handle::ContactStoreHandle;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the list and detail screen use-cases to Dart via FRB.
//! - Own the per-process contact store and the single open edit session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - At most one edit session is open at a time.
//! - Failures are reported through `ok=false` envelopes, never errors.

use contactbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ContactField, ContactId, ContactRecord, ContactStoreHandle, EditSession, SeedSource,
    SessionOutcome,
};
use log::info;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static CONTACT_BOOK: OnceLock<Mutex<Option<ContactBook>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the contact list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListItem {
    /// Stable contact ID.
    pub id: String,
    /// `"{first_name} {last_name}"` as rendered by the row.
    pub display_name: String,
}

/// List screen response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    /// Whether the list could be produced.
    pub ok: bool,
    /// Rows in store order.
    pub items: Vec<ContactListItem>,
    /// Store revision; the list re-renders when it changes.
    pub revision: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Editable values shown by the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Detail screen response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetailResponse {
    /// Whether a session is now open on the contact.
    pub ok: bool,
    /// Working-copy values when `ok`.
    pub detail: Option<ContactDetail>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for edit flow calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Contact the action applied to, when known.
    pub contact_id: Option<String>,
    /// Whether the UI should pop back to the list screen.
    pub go_back: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, contact_id: Option<String>, go_back: bool) -> Self {
        Self {
            ok: true,
            contact_id,
            go_back,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            go_back: false,
            message: message.into(),
        }
    }
}

/// Loads the seed dataset and resets session state.
///
/// Input semantics:
/// - `seed_path=None`: bundled dataset.
/// - `seed_path=Some(path)`: JSON file with the bundled schema.
///
/// # FFI contract
/// - Sync call; reads the seed file when a path is given.
/// - Drops any open edit session and prior edits.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_book_init(seed_path: Option<String>) -> ContactActionResponse {
    match reset_contact_book(&mut lock_global(), &seed_source(seed_path)) {
        Ok(count) => {
            ContactActionResponse::success(format!("Loaded {count} contact(s)."), None, false)
        }
        Err(err) => ContactActionResponse::failure(format!("contact_book_init failed: {err}")),
    }
}

/// Returns list screen rows.
///
/// # FFI contract
/// - Sync call, in-memory only after first load.
/// - Lazily loads the bundled dataset when not initialized.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_list() -> ContactListResponse {
    match with_contact_book(|book| Ok(book.list())) {
        Ok(response) => response,
        Err(err) => ContactListResponse::failure(format!("contacts_list failed: {err}")),
    }
}

/// Pull-to-refresh: resets contacts to the seed and returns the fresh list.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Rejected while a contact is open for editing.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_refresh() -> ContactListResponse {
    match with_contact_book(ContactBook::refresh) {
        Ok(response) => response,
        Err(err) => ContactListResponse::failure(format!("contacts_refresh failed: {err}")),
    }
}

/// Opens the detail screen for one contact.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - `id` is matched verbatim, exactly as listed by `contacts_list`.
/// - Fails for unknown IDs and while another contact is open.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_open(id: String) -> ContactDetailResponse {
    match with_contact_book(|book| book.open(&id)) {
        Ok(detail) => ContactDetailResponse {
            ok: true,
            detail: Some(detail),
            message: "Contact opened.".to_string(),
        },
        Err(err) => ContactDetailResponse {
            ok: false,
            detail: None,
            message: format!("contact_open failed: {err}"),
        },
    }
}

/// Applies one text-field change to the open contact.
///
/// Input semantics:
/// - `field`: one of `firstName|lastName|email|phone`.
/// - `value`: stored verbatim; no trimming or validation.
///
/// # FFI contract
/// - Sync call, in-memory only; nothing reaches the list until save.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_set_field(field: String, value: String) -> ContactActionResponse {
    match with_contact_book(|book| book.set_field(&field, value)) {
        Ok(id) => ContactActionResponse::success("Field updated.", Some(id), false),
        Err(err) => ContactActionResponse::failure(format!("contact_set_field failed: {err}")),
    }
}

/// Saves the open contact and closes the detail screen.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Fails only when no contact is open.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_save() -> ContactActionResponse {
    match with_contact_book(ContactBook::save) {
        Ok(outcome) => outcome_response("Contact saved.", &outcome),
        Err(err) => ContactActionResponse::failure(format!("contact_save failed: {err}")),
    }
}

/// Discards edits to the open contact and closes the detail screen.
///
/// # FFI contract
/// - Sync call, in-memory only; the list is never touched.
/// - Fails only when no contact is open.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_cancel() -> ContactActionResponse {
    match with_contact_book(ContactBook::cancel) {
        Ok(outcome) => outcome_response("Edits discarded.", &outcome),
        Err(err) => ContactActionResponse::failure(format!("contact_cancel failed: {err}")),
    }
}

impl ContactListResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            revision: 0,
            message,
        }
    }
}

/// Per-process UI state: the session store and the open detail screen.
struct ContactBook {
    store: ContactStoreHandle,
    session: Option<EditSession<ContactStoreHandle>>,
}

impl ContactBook {
    fn load(source: &SeedSource) -> Result<Self, String> {
        let seed = source.load().map_err(|err| err.to_string())?;
        info!(
            "event=contact_book_init module=ffi status=ok records={}",
            seed.len()
        );
        Ok(Self {
            store: ContactStoreHandle::from_seed(seed),
            session: None,
        })
    }

    fn list(&self) -> ContactListResponse {
        let items = self
            .store
            .list()
            .iter()
            .map(to_list_item)
            .collect::<Vec<_>>();
        let message = if items.is_empty() {
            "No contacts.".to_string()
        } else {
            format!("{} contact(s).", items.len())
        };
        ContactListResponse {
            ok: true,
            items,
            revision: self.store.revision(),
            message,
        }
    }

    fn refresh(&mut self) -> Result<ContactListResponse, String> {
        if let Some(session) = &self.session {
            return Err(format!("contact `{}` is still open", session.id()));
        }
        self.store.reload();
        Ok(self.list())
    }

    fn open(&mut self, id: &str) -> Result<ContactDetail, String> {
        if let Some(session) = &self.session {
            return Err(format!("contact `{}` is already open", session.id()));
        }
        let session = self
            .store
            .open_session(&ContactId::from(id))
            .ok_or_else(|| format!("contact not found: {id}"))?;
        let detail = to_detail(&session.draft());
        self.session = Some(session);
        Ok(detail)
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<String, String> {
        let field = field.parse::<ContactField>().map_err(|err| err.to_string())?;
        let session = self.session.as_mut().ok_or_else(no_open_contact)?;
        session.set_field(field, value);
        Ok(session.id().to_string())
    }

    fn save(&mut self) -> Result<SessionOutcome, String> {
        let session = self.session.take().ok_or_else(no_open_contact)?;
        Ok(session.save())
    }

    fn cancel(&mut self) -> Result<SessionOutcome, String> {
        let session = self.session.take().ok_or_else(no_open_contact)?;
        Ok(session.cancel())
    }
}

fn lock_global() -> MutexGuard<'static, Option<ContactBook>> {
    CONTACT_BOOK
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn with_contact_book<T>(
    f: impl FnOnce(&mut ContactBook) -> Result<T, String>,
) -> Result<T, String> {
    f(loaded_contact_book(&mut lock_global())?)
}

/// Replaces the slot's state, dropping any open session and prior edits.
fn reset_contact_book(
    slot: &mut Option<ContactBook>,
    source: &SeedSource,
) -> Result<usize, String> {
    let book = ContactBook::load(source)?;
    let count = book.store.len();
    *slot = Some(book);
    Ok(count)
}

/// Returns the slot's state, loading the bundled dataset on first use.
fn loaded_contact_book(slot: &mut Option<ContactBook>) -> Result<&mut ContactBook, String> {
    if slot.is_none() {
        *slot = Some(ContactBook::load(&SeedSource::Bundled)?);
    }
    slot.as_mut()
        .ok_or_else(|| "contact book is not initialized".to_string())
}

fn seed_source(seed_path: Option<String>) -> SeedSource {
    match seed_path {
        Some(raw) if !raw.trim().is_empty() => SeedSource::File(PathBuf::from(raw.trim())),
        _ => SeedSource::Bundled,
    }
}

fn no_open_contact() -> String {
    "no contact is open".to_string()
}

fn outcome_response(message: &str, outcome: &SessionOutcome) -> ContactActionResponse {
    ContactActionResponse::success(
        message,
        Some(outcome.id().to_string()),
        outcome.returns_to_list(),
    )
}

fn to_list_item(record: &ContactRecord) -> ContactListItem {
    ContactListItem {
        id: record.id.to_string(),
        display_name: record.display_name(),
    }
}

fn to_detail(record: &ContactRecord) -> ContactDetail {
    ContactDetail {
        id: record.id.to_string(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
    }
}

//! Seed dataset loading.
//!
//! # Responsibility
//! - Parse the bundled contact dataset compiled into the core crate.
//! - Load alternative datasets from a JSON file chosen by the host.
//! - Reject datasets that would break store identity invariants.
//!
//! # Invariants
//! - No two seeded records share an `id`.
//! - Ids are opaque: empty or padded strings are kept verbatim.
//! - A loaded dataset is immutable for the rest of the session.

use crate::model::contact::{ContactId, ContactRecord};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Bundled dataset shipped with the app.
pub const BUNDLED_SEED_JSON: &str = include_str!("../../assets/contacts.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Load-time error for seed datasets.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    DuplicateId(ContactId),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed data: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate contact id in seed: {id}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Where a session's seed dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Dataset compiled into the binary.
    #[default]
    Bundled,
    /// JSON file on disk with the same schema.
    File(PathBuf),
}

impl SeedSource {
    /// Loads and validates the dataset this source points at.
    pub fn load(&self) -> SeedResult<SeedDataset> {
        match self {
            Self::Bundled => bundled_seed(),
            Self::File(path) => load_seed_file(path),
        }
    }
}

/// Read-only, ordered contact dataset.
///
/// Cloning shares the underlying records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    records: Arc<[ContactRecord]>,
}

impl SeedDataset {
    /// Builds a dataset from in-memory records after the uniqueness check.
    pub fn from_records(records: Vec<ContactRecord>) -> SeedResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(SeedError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn shared(&self) -> Arc<[ContactRecord]> {
        Arc::clone(&self.records)
    }
}

/// Parses a JSON array of contact records.
pub fn parse_seed(json: &str) -> SeedResult<SeedDataset> {
    let records: Vec<ContactRecord> = serde_json::from_str(json)?;
    SeedDataset::from_records(records)
}

/// Parses the dataset bundled with the core crate.
pub fn bundled_seed() -> SeedResult<SeedDataset> {
    parse_seed(BUNDLED_SEED_JSON)
}

/// Reads and parses a seed file from disk.
pub fn load_seed_file(path: impl AsRef<Path>) -> SeedResult<SeedDataset> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_seed(&json)?;
    info!(
        "event=seed_load module=seed status=ok source=file records={}",
        dataset.len()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::{bundled_seed, parse_seed, SeedError};

    #[test]
    fn bundled_seed_is_valid_and_non_empty() {
        let dataset = bundled_seed().expect("bundled seed should parse");
        assert!(!dataset.is_empty());
    }

    #[test]
    fn parse_seed_keeps_blank_and_padded_ids() {
        let dataset = parse_seed(
            r#"[
              {"id":"","firstName":"A","lastName":"B","phone":"","email":""},
              {"id":" 7","firstName":"C","lastName":"D","phone":"","email":""}
            ]"#,
        )
        .expect("blank ids are opaque values");
        let ids = dataset
            .records()
            .iter()
            .map(|record| record.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["", " 7"]);
    }

    #[test]
    fn parse_seed_rejects_missing_fields() {
        let err = parse_seed(r#"[{"id":"1","firstName":"A"}]"#).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
        assert!(err.to_string().starts_with("invalid seed data"));
    }
}

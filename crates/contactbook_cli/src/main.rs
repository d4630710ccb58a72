//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Check that a seed dataset (bundled, or the file given as first argument)
//!   loads into a store.

use contactbook_core::{ContactStore, SeedSource};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("contactbook_core ping={}", contactbook_core::ping());
    println!("contactbook_core version={}", contactbook_core::core_version());

    let source = match std::env::args_os().nth(1) {
        Some(path) => SeedSource::File(PathBuf::from(path)),
        None => SeedSource::Bundled,
    };

    match source.load() {
        Ok(seed) => {
            let store = ContactStore::new(seed);
            println!("contactbook_core contacts={}", store.len());
            for contact in store.list().iter() {
                println!("  {} {}", contact.id, contact.display_name());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("contactbook_core seed error: {err}");
            ExitCode::FAILURE
        }
    }
}

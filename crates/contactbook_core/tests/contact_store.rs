use contactbook_core::{
    bundled_seed, parse_seed, ContactId, ContactRecord, ContactStore, ContactStoreHandle,
    ReplaceOutcome, SeedDataset,
};
use std::sync::Arc;

fn three_contacts() -> SeedDataset {
    SeedDataset::from_records(vec![
        ContactRecord::new("1", "Ada", "Lovelace", "555", "a@x.com"),
        ContactRecord::new("2", "Alan", "Turing", "556", "t@x.com"),
        ContactRecord::new("3", "Grace", "Hopper", "557", "g@x.com"),
    ])
    .unwrap()
}

#[test]
fn new_store_lists_seed_in_order() {
    let seed = three_contacts();
    let store = ContactStore::new(seed.clone());

    assert_eq!(&*store.list(), seed.records());
    assert_eq!(store.len(), 3);
    assert_eq!(store.revision(), 0);
}

#[test]
fn reload_right_after_init_yields_seed() {
    let seed = bundled_seed().unwrap();
    let mut store = ContactStore::new(seed.clone());

    store.reload();

    assert_eq!(&*store.list(), seed.records());
}

#[test]
fn reload_discards_prior_edits() {
    let seed = three_contacts();
    let mut store = ContactStore::new(seed.clone());
    store.replace(ContactRecord::new("2", "Alan", "Turing", "000", "t@x.com"));
    assert_ne!(&*store.list(), seed.records());

    store.reload();

    assert_eq!(&*store.list(), seed.records());
}

#[test]
fn replace_substitutes_only_matching_record() {
    let mut store = ContactStore::new(three_contacts());
    let before = store.list();
    let updated = ContactRecord::new("2", "Alan", "Turing", "999", "alan@x.com");

    let outcome = store.replace(updated.clone());

    assert_eq!(outcome, ReplaceOutcome::Replaced);
    let after = store.list();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], updated);
    assert_eq!(after[2], before[2]);
}

#[test]
fn replace_keeps_old_snapshots_valid() {
    let mut store = ContactStore::new(three_contacts());
    let before = store.list();

    store.replace(ContactRecord::new("1", "X", "Lovelace", "555", "a@x.com"));

    assert_eq!(before[0].first_name, "Ada");
    assert_eq!(store.list()[0].first_name, "X");
    assert!(!Arc::ptr_eq(&before, &store.list()));
}

#[test]
fn replace_twice_is_idempotent() {
    let mut once = ContactStore::new(three_contacts());
    let mut twice = ContactStore::new(three_contacts());
    let updated = ContactRecord::new("3", "Grace", "Hopper", "000", "grace@x.com");

    once.replace(updated.clone());
    twice.replace(updated.clone());
    twice.replace(updated);

    assert_eq!(once.list(), twice.list());
    assert_eq!(once.revision(), twice.revision());
}

#[test]
fn replace_with_unknown_id_leaves_store_unchanged() {
    let mut store = ContactStore::new(three_contacts());
    let before = store.list();
    let revision = store.revision();

    let outcome = store.replace(ContactRecord::new("404", "No", "Body", "", ""));

    assert_eq!(outcome, ReplaceOutcome::NotFound);
    assert_eq!(store.list(), before);
    assert_eq!(store.revision(), revision);
    assert!(store.get(&ContactId::from("404")).is_none());
}

#[test]
fn revision_tracks_visible_changes() {
    let mut store = ContactStore::new(three_contacts());

    store.replace(ContactRecord::new("1", "Ada", "Byron", "555", "a@x.com"));
    assert_eq!(store.revision(), 1);

    store.reload();
    assert_eq!(store.revision(), 2);
}

#[test]
fn get_returns_record_by_id() {
    let store = ContactStore::new(three_contacts());

    let contact = store.get(&ContactId::from("3")).unwrap();
    assert_eq!(contact.display_name(), "Grace Hopper");
    assert!(store.get(&ContactId::from("9")).is_none());
}

#[test]
fn empty_seed_gives_empty_store() {
    let mut store = ContactStore::new(parse_seed("[]").unwrap());

    assert!(store.is_empty());
    assert_eq!(
        store.replace(ContactRecord::new("1", "A", "B", "", "")),
        ReplaceOutcome::NotFound
    );
    assert!(store.list().is_empty());
}

#[test]
fn handle_clones_share_one_store() {
    let handle = ContactStoreHandle::from_seed(three_contacts());
    let other = handle.clone();

    other.replace(ContactRecord::new("1", "Ada", "King", "555", "a@x.com"));

    assert!(handle.same_store(&other));
    assert_eq!(handle.list()[0].last_name, "King");
    assert_eq!(handle.revision(), 1);

    handle.reload();
    assert_eq!(other.list()[0].last_name, "Lovelace");
    assert_eq!(other.len(), 3);
}

#[test]
fn separate_handles_are_isolated() {
    let first = ContactStoreHandle::from_seed(three_contacts());
    let second = ContactStoreHandle::from_seed(three_contacts());

    first.replace(ContactRecord::new("2", "Alan", "T.", "556", "t@x.com"));

    assert!(!first.same_store(&second));
    assert_eq!(second.list()[1].last_name, "Turing");
}

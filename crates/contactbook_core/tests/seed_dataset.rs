use contactbook_core::{
    bundled_seed, load_seed_file, parse_seed, ContactId, SeedError, SeedSource,
};
use std::io::Write;

const ADA_JSON: &str = r#"[
  {"id":"1","firstName":"Ada","lastName":"Lovelace","phone":"555","email":"a@x.com"}
]"#;

#[test]
fn bundled_seed_has_unique_non_empty_ids() {
    let dataset = bundled_seed().unwrap();
    let mut ids = dataset
        .records()
        .iter()
        .map(|record| record.id.clone())
        .collect::<Vec<_>>();
    assert!(ids.iter().all(|id| !id.is_empty()));

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), dataset.len());
}

#[test]
fn parse_seed_reads_camel_case_schema() {
    let dataset = parse_seed(ADA_JSON).unwrap();
    let ada = &dataset.records()[0];

    assert_eq!(ada.id, ContactId::from("1"));
    assert_eq!(ada.first_name, "Ada");
    assert_eq!(ada.last_name, "Lovelace");
    assert_eq!(ada.phone, "555");
    assert_eq!(ada.email, "a@x.com");
}

#[test]
fn parse_seed_keeps_free_text_verbatim() {
    let dataset = parse_seed(
        r#"[{"id":"x","firstName":"  ada ","lastName":"","phone":"not a number","email":"nope"}]"#,
    )
    .unwrap();
    let record = &dataset.records()[0];

    assert_eq!(record.first_name, "  ada ");
    assert_eq!(record.phone, "not a number");
    assert_eq!(record.email, "nope");
}

#[test]
fn parse_seed_rejects_duplicate_ids() {
    let err = parse_seed(
        r#"[
          {"id":"1","firstName":"A","lastName":"A","phone":"","email":""},
          {"id":"1","firstName":"B","lastName":"B","phone":"","email":""}
        ]"#,
    )
    .unwrap_err();

    assert!(matches!(err, SeedError::DuplicateId(ref id) if id.as_str() == "1"));
    assert_eq!(err.to_string(), "duplicate contact id in seed: 1");
}

#[test]
fn parse_seed_rejects_non_array_payload() {
    let err = parse_seed(r#"{"id":"1"}"#).unwrap_err();
    assert!(matches!(err, SeedError::Parse(_)));
}

#[test]
fn load_seed_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ADA_JSON.as_bytes()).unwrap();

    let dataset = load_seed_file(file.path()).unwrap();
    assert_eq!(dataset.len(), 1);

    let via_source = SeedSource::File(file.path().to_path_buf()).load().unwrap();
    assert_eq!(via_source, dataset);
}

#[test]
fn load_seed_file_reports_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let err = load_seed_file(&missing).unwrap_err();
    assert!(matches!(err, SeedError::Io { ref path, .. } if path == &missing));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn default_source_is_bundled() {
    assert_eq!(SeedSource::default(), SeedSource::Bundled);
    assert_eq!(SeedSource::Bundled.load().unwrap(), bundled_seed().unwrap());
}

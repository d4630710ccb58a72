use contactbook_core::{ContactField, ContactId, ContactRecord};

#[test]
fn record_serializes_with_seed_wire_names() {
    let record = ContactRecord::new("1", "Ada", "Lovelace", "555", "a@x.com");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "555",
            "email": "a@x.com"
        })
    );
}

#[test]
fn contact_id_is_a_bare_string_on_the_wire() {
    let id: ContactId = serde_json::from_str("\"abc-1\"").unwrap();
    assert_eq!(id.as_str(), "abc-1");
    assert_eq!(id.to_string(), "abc-1");
}

#[test]
fn field_accessors_cover_all_editable_fields() {
    let record = ContactRecord::new("7", "Grace", "Hopper", "555-7", "g@x.com");

    let values = ContactField::ALL
        .iter()
        .map(|field| record.field(*field))
        .collect::<Vec<_>>();
    assert_eq!(values, vec!["Grace", "Hopper", "g@x.com", "555-7"]);
}

//! Payload parsing: the index as it ships on disk.

use std::fs;

use super::common::DOCS_PAYLOAD;
use docdex::{parse_raw_entries, MalformedIndex, SearchIndex};

#[test]
fn generator_js_assignment_parses() {
    let index = SearchIndex::from_json(DOCS_PAYLOAD).unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index.entry(0).location, "index.html#");
}

#[test]
fn plain_array_and_docs_object_are_equivalent() {
    let array = r#"[{"location": "a.html", "page": "A", "title": "T", "category": "page", "text": "body"}]"#;
    let object = r#"{"docs": [{"location": "a.html", "page": "A", "title": "T", "category": "page", "text": "body"}]}"#;

    let from_array = parse_raw_entries(array).unwrap();
    let from_object = parse_raw_entries(object).unwrap();
    assert_eq!(from_array.len(), from_object.len());
    assert_eq!(from_array[0].location, from_object[0].location);
}

#[test]
fn const_and_let_assignments_also_parse() {
    for keyword in ["const", "let"] {
        let payload = format!(
            r#"{} idx = {{"docs": [{{"location": "a.html", "page": "A", "title": "T", "category": "page", "text": ""}}]}};"#,
            keyword
        );
        assert_eq!(parse_raw_entries(&payload).unwrap().len(), 1);
    }
}

#[test]
fn payload_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_index.js");
    fs::write(&path, DOCS_PAYLOAD).unwrap();

    let payload = fs::read_to_string(&path).unwrap();
    let index = SearchIndex::from_json(&payload).unwrap();
    assert_eq!(index.len(), 6);
}

#[test]
fn garbage_payload_is_a_parse_error() {
    for payload in ["", "var x = ;", "not json at all", "{\"docs\": 3}"] {
        assert!(
            matches!(
                SearchIndex::from_json(payload),
                Err(MalformedIndex::Parse { .. })
            ),
            "payload {:?} should fail to parse",
            payload
        );
    }
}

#[test]
fn whitespace_around_the_assignment_is_tolerated() {
    let payload = format!("\n\n  var documenterSearchIndex = {} \n ;\n", "[]");
    let entries = parse_raw_entries(&payload).unwrap();
    assert!(entries.is_empty());
}

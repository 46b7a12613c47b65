//! Document construction, classification, and key/path access tests.

use serde_json::json;
use strata::{Document, Value};

// ===== BASIC OPERATIONS =====

#[test]
fn test_basic_operations() {
    let mut doc = Document::new();

    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);

    let old_val = doc.set("name", "Alice");
    assert!(old_val.is_none());
    assert!(!doc.is_empty());
    assert_eq!(doc.len(), 1);

    let old_val2 = doc.set("age", 30);
    assert!(old_val2.is_none());
    assert_eq!(doc.len(), 2);

    assert!(doc.contains_key("name"));
    assert!(doc.contains_key("age"));
    assert!(!doc.contains_key("nonexistent"));

    assert_eq!(doc.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(doc.get_as::<i64>("age"), Some(30));
    assert!(doc.get("nonexistent").is_none());
}

#[test]
fn test_overwrite_preserves_position() {
    let mut doc = Document::new();

    doc.set("first", 1);
    doc.set("second", 2);
    doc.set("third", 3);

    let old_val = doc.set("second", "modified");
    assert_eq!(old_val.as_ref().and_then(|v| v.as_int()), Some(2));
    assert_eq!(doc.len(), 3);

    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_get_mut() {
    let mut doc = Document::new();
    doc.set("name", "Alice");

    if let Some(Value::Text(name)) = doc.get_mut("name") {
        name.push_str(" Smith");
    }

    assert_eq!(
        doc.get_as::<String>("name"),
        Some("Alice Smith".to_string())
    );
    assert!(doc.get_mut("nonexistent").is_none());
}

// ===== CONSTRUCTION & CLASSIFICATION =====

#[test]
fn test_sequential_input_stays_a_sequence_leaf() {
    let doc = Document::from_json(json!({"a": [1, 2, 3]})).unwrap();

    let list = doc.get("a").unwrap().as_list().unwrap();
    assert_eq!(list, &[Value::Int(1), Value::Int(2), Value::Int(3)][..]);
}

#[test]
fn test_associative_input_becomes_a_nested_document() {
    let doc = Document::from_json(json!({"a": {"x": 1}})).unwrap();

    let nested = doc.get("a").unwrap().as_doc().unwrap();
    assert_eq!(nested.get_as::<i64>("x"), Some(1));
}

#[test]
fn test_contiguous_numeric_keys_classify_as_sequence() {
    // Keys 0..N-1 in any order of appearance form a sequence, ordered by
    // numeric key.
    let doc = Document::from_json(json!({"a": {"1": "b", "0": "a", "2": "c"}})).unwrap();

    let list = doc.get("a").unwrap().as_list().unwrap();
    assert_eq!(
        list,
        &[
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
            Value::Text("c".to_string()),
        ][..]
    );
}

#[test]
fn test_gapped_numeric_keys_classify_as_document() {
    let doc = Document::from_json(json!({"a": {"0": "x", "2": "y"}})).unwrap();

    let nested = doc.get("a").unwrap().as_doc().unwrap();
    assert_eq!(nested.get_as::<&str>("0"), Some("x"));
    assert_eq!(nested.get_as::<&str>("2"), Some("y"));
}

#[test]
fn test_empty_object_is_a_sequence_leaf() {
    let doc = Document::from_json(json!({"a": {}})).unwrap();

    assert_eq!(doc.get("a").unwrap().as_list(), Some(&[] as &[Value]));
}

#[test]
fn test_classification_recurses_through_nested_documents() {
    let doc = Document::from_json(json!({
        "outer": {
            "inner": {"0": 1, "1": 2},
            "deep": {"leaf": true},
        }
    }))
    .unwrap();

    let outer = doc.get("outer").unwrap().as_doc().unwrap();
    assert!(outer.get("inner").unwrap().as_list().is_some());
    assert!(outer.get("deep").unwrap().as_doc().is_some());
}

#[test]
fn test_sequence_contents_are_never_classified() {
    // An object nested inside a sequence keeps its entries verbatim, even
    // when its keys look sequential.
    let doc = Document::from_json(json!({"a": [{"0": "x", "1": "y"}]})).unwrap();

    let list = doc.get("a").unwrap().as_list().unwrap();
    let inner = list[0].as_doc().unwrap();
    assert_eq!(inner.get_as::<&str>("0"), Some("x"));
    assert_eq!(inner.get_as::<&str>("1"), Some("y"));
}

#[test]
fn test_non_object_root_is_rejected() {
    let err = Document::from_json(json!([1, 2, 3])).unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON object at the document root, found array");

    assert!(Document::from_json(json!(42)).is_err());
    assert!(Document::from_json(json!(null)).is_err());
    assert!(Document::from_json(json!({})).is_ok());
}

// ===== SERIALIZATION =====

#[test]
fn test_to_json_round_trips_non_sequential_input() {
    let input = json!({
        "name": "Alice",
        "profile": {
            "bio": "developer",
            "links": {"site": "example.com"},
        },
        "tags": ["a", "b"],
        "active": true,
    });

    let doc = Document::from_json(input.clone()).unwrap();
    assert_eq!(doc.to_json(), input);
}

#[test]
fn test_to_json_preserves_key_order() {
    let doc = Document::from_json(json!({"z": 1, "a": 2, "m": 3})).unwrap();

    let serialized = doc.to_json();
    let keys: Vec<&String> = serialized.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

// ===== PATH READS =====

#[test]
fn test_absent_key_and_path_resolve_to_none() {
    let doc = Document::from_json(json!({"present": 1})).unwrap();

    assert!(doc.get("missing").is_none());
    assert!(doc.get_path("missing.nested.path").is_none());
}

#[test]
fn test_path_reads_never_mutate() {
    let doc = Document::from_json(json!({"present": 1})).unwrap();

    let _ = doc.get_path("missing.nested.path");
    let _ = doc.get_path("missing");

    // No slot materialization: the document is untouched.
    assert_eq!(doc.len(), 1);
    assert!(!doc.contains_key("missing"));
}

#[test]
fn test_path_read_traverses_nesting() {
    let doc = Document::from_json(json!({
        "user": {"profile": {"name": "Alice"}}
    }))
    .unwrap();

    assert_eq!(doc.get_path_as::<&str>("user.profile.name"), Some("Alice"));
    assert!(doc.get_path("user.profile").unwrap().as_doc().is_some());
}

#[test]
fn test_path_read_stops_at_non_document() {
    let doc = Document::from_json(json!({"a": {"b": 5}, "list": [1, 2]})).unwrap();

    // Scalar mid-path: the path does not exist at that depth.
    assert!(doc.get_path("a.b.c").is_none());
    // Sequence leaves are opaque and never traversed.
    assert!(doc.get_path("list.0").is_none());
}

#[test]
fn test_single_segment_path_degenerates_to_key_read() {
    let mut doc = Document::new();
    doc.set("key", "value");

    assert_eq!(doc.get_path_as::<&str>("key"), Some("value"));
    assert_eq!(doc.get_path("key"), doc.get("key"));
}

// ===== PATH WRITES =====

#[test]
fn test_path_write_auto_vivifies_intermediates() {
    let mut doc = Document::new();
    doc.set_path("a.b.c", 5).unwrap();

    assert_eq!(doc.get_path_as::<i64>("a.b.c"), Some(5));

    let a = doc.get("a").unwrap().as_doc().unwrap();
    let b = a.get("b").unwrap().as_doc().unwrap();
    assert_eq!(b.get_as::<i64>("c"), Some(5));
}

#[test]
fn test_path_write_appends_new_intermediates_in_order() {
    let mut doc = Document::new();
    doc.set("existing", 1);
    doc.set_path("a.b", 2).unwrap();

    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["existing", "a"]);
}

#[test]
fn test_path_write_into_existing_document_preserves_siblings() {
    let mut doc = Document::from_json(json!({
        "server": {"host": "localhost", "port": 80}
    }))
    .unwrap();

    doc.set_path("server.port", 8080).unwrap();

    let server = doc.get("server").unwrap().as_doc().unwrap();
    assert_eq!(server.get_as::<&str>("host"), Some("localhost"));
    assert_eq!(server.get_as::<i64>("port"), Some(8080));
    let keys: Vec<&String> = server.keys().collect();
    assert_eq!(keys, vec!["host", "port"]);
}

#[test]
fn test_path_write_replaces_scalar_intermediate() {
    let mut doc = Document::new();
    doc.set("a", "scalar");
    doc.set_path("a.b", 1).unwrap();

    // The scalar is discarded; 'a' is now a document.
    assert_eq!(doc.get_path_as::<i64>("a.b"), Some(1));
    assert!(doc.get("a").unwrap().as_doc().is_some());
}

#[test]
fn test_path_write_returns_previous_value() {
    let mut doc = Document::new();

    assert_eq!(doc.set_path("a.b", 1).unwrap(), None);
    let old = doc.set_path("a.b", 2).unwrap();
    assert_eq!(old.as_ref().and_then(|v| v.as_int()), Some(1));
}

#[test]
fn test_empty_path_write_fails() {
    let mut doc = Document::new();

    assert!(doc.set_path("", 1).is_err());
    assert!(doc.set_path("...", 1).is_err());
    assert!(doc.is_empty());
}

// ===== ITERATION =====

#[test]
fn test_iteration_follows_insertion_order_and_restarts() {
    let mut doc = Document::new();
    doc.set("test", "test");
    doc.set("more", "more");

    let pairs: Vec<(&String, &Value)> = doc.iter().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "test");
    assert_eq!(*pairs[0].1, "test");
    assert_eq!(pairs[1].0, "more");
    assert_eq!(*pairs[1].1, "more");

    // A fresh iteration yields the same ordering.
    let again: Vec<&String> = doc.iter().map(|(k, _)| k).collect();
    assert_eq!(again, vec!["test", "more"]);
}

#[test]
fn test_for_loop_over_reference() {
    let doc = Document::new().with("a", 1).with("b", 2);

    let mut seen = Vec::new();
    for (key, _) in &doc {
        seen.push(key.clone());
    }
    assert_eq!(seen, vec!["a", "b"]);
}

// ===== BUILDERS & CHAINING =====

#[test]
fn test_builder_methods() {
    let doc = Document::new()
        .with("name", "Alice")
        .with_doc("profile", Document::new().with("bio", "dev"))
        .with_list("tags", vec![Value::Text("a".to_string())]);

    assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
    assert_eq!(doc.get_path_as::<&str>("profile.bio"), Some("dev"));
    assert_eq!(doc.get("tags").unwrap().as_list().map(|l| l.len()), Some(1));
}

#[test]
fn test_chained_setters() {
    let mut doc = Document::new();
    doc.set_string("a", "one").set_string("b", "two");

    assert_eq!(doc.get_as::<&str>("a"), Some("one"));
    assert_eq!(doc.get_as::<&str>("b"), Some("two"));
}

//! Integration tests for the configuration registry
//!
//! These tests exercise the public store API: set/get round trips,
//! overwriting, bulk loading, and clearing.

use confstore::{ConfigError, ConfigStore, Value};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
struct DatabaseSettings {
    host: String,
    port: u16,
    tls: bool,
}

#[test]
fn test_round_trip_for_value_kinds() {
    let mut store = ConfigStore::new();

    store.set("string", "testing string");
    store.set("string_empty", "");
    store.set("int", 1);
    store.set("int0", 0);
    store.set("bool_true", true);
    store.set("bool_false", false);
    store.set("array", vec!["a", "b", "c"]);
    store.set("array_empty", Vec::<String>::new());

    assert_eq!(*store.get("string").unwrap(), "testing string");
    assert_eq!(*store.get("string_empty").unwrap(), "");
    assert_eq!(*store.get("int").unwrap(), 1);
    assert_eq!(*store.get("int0").unwrap(), 0);
    assert_eq!(*store.get("bool_true").unwrap(), true);
    assert_eq!(*store.get("bool_false").unwrap(), false);
    assert_eq!(store.get("array").unwrap(), &Value::from(vec!["a", "b", "c"]));
    assert_eq!(store.get("array_empty").unwrap(), &Value::Sequence(Vec::new()));
}

#[test]
fn test_round_trip_for_opaque_object() {
    // Arbitrary application types are stored through their serde form.
    let settings = DatabaseSettings {
        host: "db.internal".to_string(),
        port: 5432,
        tls: true,
    };
    let value = serde_yaml::to_value(&settings).unwrap();

    let mut store = ConfigStore::new();
    store.set("database", value.clone());

    assert_eq!(store.get("database").unwrap(), &value);
    assert_eq!(store.get("database").unwrap()["port"], Value::from(5432));
}

#[test]
fn test_second_set_wins() {
    let mut store = ConfigStore::new();
    store.set("k", 1);
    store.set("k", 2);
    assert_eq!(*store.get("k").unwrap(), 2);
}

#[test]
fn test_missing_key_fails() {
    let store = ConfigStore::new();
    match store.get("7f3a2c9d-never-set") {
        Err(ConfigError::KeyNotFound { key }) => assert_eq!(key, "7f3a2c9d-never-set"),
        other => panic!("Expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_from_hash_map() {
    let mut nested = serde_yaml::Mapping::new();
    nested.insert("one".into(), 1.into());
    nested.insert("two".into(), 2.into());

    let mut mapping: HashMap<String, Value> = HashMap::new();
    mapping.insert("A".to_string(), Value::Mapping(nested.clone()));
    mapping.insert("Test".to_string(), Value::from("test"));

    let mut store = ConfigStore::new();
    store.load(mapping);

    assert_eq!(store.get("A").unwrap(), &Value::Mapping(nested));
    assert_eq!(*store.get("Test").unwrap(), "test");
}

#[test]
fn test_stores_are_independent() {
    let mut first = ConfigStore::new();
    let mut second = ConfigStore::new();

    first.set("shared", "from first");
    second.set("shared", "from second");

    assert_eq!(*first.get("shared").unwrap(), "from first");
    assert_eq!(*second.get("shared").unwrap(), "from second");
}

#[test]
fn test_clear_all_empties_the_store() {
    let mut store = ConfigStore::new();
    store.set("Test", "test");
    store.set("other", 42);

    store.clear_all();

    assert!(matches!(
        store.get("Test"),
        Err(ConfigError::KeyNotFound { .. })
    ));
    assert!(matches!(
        store.get("other"),
        Err(ConfigError::KeyNotFound { .. })
    ));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_null_round_trips_as_a_value() {
    let mut store = ConfigStore::new();
    store.set("optional_feature", Value::Null);

    assert!(store.contains("optional_feature"));
    assert_eq!(store.get("optional_feature").unwrap(), &Value::Null);
}

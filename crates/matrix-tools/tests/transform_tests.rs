/// Contract tests for replacement and removal. All four operations are
/// copy-and-rebuild: the input tree is untouched and the result shares no
/// container structure with it.
use matrix_tools::{
    remove_element_by_key, remove_element_by_value, replace_key, replace_value, search_by_key,
    Key, Value,
};
use serde_json::json;

// ============================================================================
// replace_value
// ============================================================================

#[test]
fn replace_value_hits_every_matching_leaf() {
    let tree = Value::from(json!({"a": "old", "b": {"c": "old", "d": "keep"}}));
    let out = replace_value(&Value::from("old"), &Value::from("new"), &tree).unwrap();
    assert_eq!(out, Value::from(json!({"a": "new", "b": {"c": "new", "d": "keep"}})));
}

#[test]
fn replace_value_is_idempotent_once_exhausted() {
    let tree = Value::from(json!({"a": "old", "b": ["old", 1]}));
    let old = Value::from("old");
    let new = Value::from("new");
    let once = replace_value(&old, &new, &tree).unwrap();
    let twice = replace_value(&old, &new, &once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn replace_value_only_applies_to_scalar_leaves() {
    // A container structurally equal to `old` is descended into, not swapped.
    let old = Value::from(json!({"x": 1}));
    let tree = Value::from(json!({"a": {"x": 1}}));
    let out = replace_value(&old, &Value::Integer(0), &tree).unwrap();
    assert_eq!(out, tree);
}

#[test]
fn replace_value_can_substitute_a_container() {
    let tree = Value::from(json!({"a": "slot"}));
    let new = Value::from(json!({"inner": true}));
    let out = replace_value(&Value::from("slot"), &new, &tree).unwrap();
    assert_eq!(out, Value::from(json!({"a": {"inner": true}})));
}

#[test]
fn replace_value_does_not_mutate_input() {
    let tree = Value::from(json!({"a": "old"}));
    let snapshot = tree.clone();
    let _ = replace_value(&Value::from("old"), &Value::from("new"), &tree).unwrap();
    assert_eq!(tree, snapshot);
}

// ============================================================================
// replace_key
// ============================================================================

#[test]
fn replace_key_renames_at_every_level() {
    let tree = Value::from(json!({"old": 1, "n": {"old": 2, "m": 3}}));
    let out = replace_key(&Key::from("old"), &Key::from("new"), &tree).unwrap();
    assert_eq!(out, Value::from(json!({"new": 1, "n": {"new": 2, "m": 3}})));
}

#[test]
fn replace_key_collision_later_assignment_wins() {
    // Renaming "a" to "b" collides with the existing "b": the entry keeps
    // its first position but takes the later value.
    let tree = Value::from(json!({"a": 1, "b": 2}));
    let out = replace_key(&Key::from("a"), &Key::from("b"), &tree).unwrap();
    assert_eq!(out, Value::Container(vec![(Key::from("b"), Value::Integer(2))]));
}

#[test]
fn replace_key_can_cross_key_kinds() {
    let tree = Value::from(json!([5]));
    let out = replace_key(&Key::Int(0), &Key::from("zero"), &tree).unwrap();
    assert_eq!(
        out,
        Value::Container(vec![(Key::from("zero"), Value::Integer(5))])
    );
}

// ============================================================================
// remove_element_by_value
// ============================================================================

#[test]
fn remove_by_value_filters_matching_leaves_everywhere() {
    let tree = Value::from(json!({"a": "x", "b": {"c": "x", "d": 1}, "e": 2}));
    let out = remove_element_by_value(&Value::from("x"), &tree).unwrap();
    assert_eq!(out, Value::from(json!({"b": {"d": 1}, "e": 2})));
}

#[test]
fn remove_by_value_never_drops_containers() {
    // Even a container structurally equal to the needle is recursed into,
    // not removed.
    let needle = Value::from(json!({"c": "x"}));
    let tree = Value::from(json!({"p": {"c": "x"}}));
    let out = remove_element_by_value(&needle, &tree).unwrap();
    assert_eq!(out, tree);
}

#[test]
fn remove_by_value_strict_equality() {
    let tree = Value::from(json!({"a": 1, "b": "1"}));
    let out = remove_element_by_value(&Value::Integer(1), &tree).unwrap();
    assert_eq!(out, Value::from(json!({"b": "1"})));
}

// ============================================================================
// remove_element_by_key
// ============================================================================

#[test]
fn remove_by_key_drops_entries_at_every_level() {
    let tree = Value::from(json!({"k": 1, "a": {"k": [2], "b": 3}}));
    let out = remove_element_by_key(&Key::from("k"), &tree).unwrap();
    assert_eq!(out, Value::from(json!({"a": {"b": 3}})));
}

#[test]
fn remove_by_key_preserves_sibling_keys_without_shifting() {
    // Removing index 1 keeps keys 0 and 2 as they were — no re-indexing.
    let tree = Value::from(json!([10, 20, 30]));
    let out = remove_element_by_key(&Key::Int(1), &tree).unwrap();
    assert_eq!(
        out,
        Value::Container(vec![
            (Key::Int(0), Value::Integer(10)),
            (Key::Int(2), Value::Integer(30)),
        ])
    );
}

#[test]
fn remove_by_key_then_search_finds_nothing() {
    let tree = Value::from(json!({"k": 1, "a": {"k": 2, "b": {"k": 3}}}));
    let key = Key::from("k");
    let out = remove_element_by_key(&key, &tree).unwrap();
    assert!(search_by_key(&key, &out).unwrap().is_empty());
}

/// Contract tests for structural merge and the dimensionality check.
use matrix_tools::{is_multidimensional, merge_matrices, TreeError, Value};
use serde_json::json;

// ============================================================================
// merge_matrices
// ============================================================================

#[test]
fn merge_unions_keys_and_recurses_into_shared_containers() {
    let a = Value::from(json!({"a": 1, "b": {"x": 1}}));
    let b = Value::from(json!({"b": {"y": 2}, "c": 3}));
    let out = merge_matrices(&a, &b).unwrap();
    assert_eq!(out, Value::from(json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})));
}

#[test]
fn merge_scalar_conflict_left_side_wins() {
    let a = Value::from(json!({"k": 1}));
    let b = Value::from(json!({"k": 2}));
    assert_eq!(merge_matrices(&a, &b).unwrap(), a);
}

#[test]
fn merge_scalar_vs_container_left_side_still_wins() {
    let a = Value::from(json!({"k": 1}));
    let b = Value::from(json!({"k": {"x": 2}}));
    assert_eq!(merge_matrices(&a, &b).unwrap(), a);

    let a = Value::from(json!({"k": {"x": 1}}));
    let b = Value::from(json!({"k": 2}));
    assert_eq!(merge_matrices(&a, &b).unwrap(), a);
}

#[test]
fn merge_key_order_is_a_then_new_b_keys() {
    let a = Value::from(json!({"m": 1, "n": 2}));
    let b = Value::from(json!({"q": 3, "n": 9, "p": 4}));
    let out = merge_matrices(&a, &b).unwrap();
    assert_eq!(out, Value::from(json!({"m": 1, "n": 2, "q": 3, "p": 4})));
}

#[test]
fn merge_with_empty_right_side_is_identity() {
    let a = Value::from(json!({"a": 1, "b": {"c": [1, 2]}}));
    assert_eq!(merge_matrices(&a, &Value::from(json!({}))).unwrap(), a);
}

#[test]
fn merge_with_itself_is_identity() {
    let a = Value::from(json!({"a": 1, "b": {"c": [1, 2], "d": null}}));
    assert_eq!(merge_matrices(&a, &a).unwrap(), a);
}

#[test]
fn merge_requires_container_roots() {
    let container = Value::from(json!({}));
    let scalar = Value::Integer(1);
    assert_eq!(
        merge_matrices(&scalar, &container),
        Err(TreeError::NotAContainer {
            op: "merge_matrices"
        })
    );
    assert_eq!(
        merge_matrices(&container, &scalar),
        Err(TreeError::NotAContainer {
            op: "merge_matrices"
        })
    );
}

// ============================================================================
// is_multidimensional
// ============================================================================

#[test]
fn flat_container_is_not_multidimensional() {
    let tree = Value::from(json!({"a": 1, "b": "x", "c": null}));
    assert!(!is_multidimensional(&tree).unwrap());
}

#[test]
fn any_container_valued_entry_makes_it_multidimensional() {
    let tree = Value::from(json!({"a": 1, "b": {}}));
    assert!(is_multidimensional(&tree).unwrap());
}

#[test]
fn check_is_one_level_only() {
    // Nested containers below the first level do not matter; the direct
    // entries here are all scalars.
    let tree = Value::from(json!({"a": 1}));
    assert!(!is_multidimensional(&tree).unwrap());
}

#[test]
fn empty_container_is_not_multidimensional() {
    assert!(!is_multidimensional(&Value::from(json!({}))).unwrap());
}

#[test]
fn dimensionality_check_requires_container_root() {
    assert_eq!(
        is_multidimensional(&Value::from("scalar")),
        Err(TreeError::NotAContainer {
            op: "is_multidimensional"
        })
    );
}

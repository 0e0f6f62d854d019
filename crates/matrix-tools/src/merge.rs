//! Structural merge and the one-level dimensionality check.

use crate::descend;
use crate::error::{Result, TreeError};
use crate::types::{Key, Value};

/// Merge two container trees.
///
/// The result starts with all of `a`'s entries in their original order.
/// Each entry of `b` is then folded in: an absent key is appended as-is;
/// when the key is present on both sides and both values are containers,
/// the sub-containers are merged recursively by the same rule; when either
/// side is a scalar, `a`'s value wins unconditionally — silent precedence,
/// no error.
///
/// # Errors
///
/// Returns [`TreeError::NotAContainer`] when either root is a scalar.
///
/// # Examples
///
/// ```
/// use matrix_tools::{merge_matrices, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": {"x": 1}}));
/// let b = Value::from(json!({"b": {"y": 2}, "c": 3}));
/// let merged = merge_matrices(&a, &b).unwrap();
/// assert_eq!(merged, Value::from(json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})));
/// ```
pub fn merge_matrices(a: &Value, b: &Value) -> Result<Value> {
    let (Some(a_entries), Some(b_entries)) = (a.as_entries(), b.as_entries()) else {
        return Err(TreeError::NotAContainer {
            op: "merge_matrices",
        });
    };
    Ok(Value::Container(merge_inner(a_entries, b_entries, 0)?))
}

fn merge_inner(
    a: &[(Key, Value)],
    b: &[(Key, Value)],
    depth: usize,
) -> Result<Vec<(Key, Value)>> {
    let depth = descend(depth)?;
    let mut out: Vec<(Key, Value)> = a.to_vec();
    for (key, b_val) in b {
        match out.iter().position(|(k, _)| k == key) {
            None => out.push((key.clone(), b_val.clone())),
            Some(i) => {
                let merged = match (&out[i].1, b_val) {
                    (Value::Container(a_sub), Value::Container(b_sub)) => {
                        Some(merge_inner(a_sub, b_sub, depth)?)
                    }
                    // Scalar on either side: a's value wins, leave it alone.
                    _ => None,
                };
                if let Some(entries) = merged {
                    out[i].1 = Value::Container(entries);
                }
            }
        }
    }
    Ok(out)
}

/// True iff at least one direct entry of the container is itself a
/// container. A one-level check, not a recursive depth test.
///
/// # Errors
///
/// Returns [`TreeError::NotAContainer`] when the root is a scalar.
pub fn is_multidimensional(tree: &Value) -> Result<bool> {
    let Some(entries) = tree.as_entries() else {
        return Err(TreeError::NotAContainer {
            op: "is_multidimensional",
        });
    };
    Ok(entries.iter().any(|(_, v)| v.is_container()))
}

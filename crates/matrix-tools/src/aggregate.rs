//! Leaf-level aggregation: occurrence counting and numeric summation.

use crate::descend;
use crate::error::Result;
use crate::types::Value;

/// Count every scalar leaf in the tree.
///
/// Containers are only descended into, never counted as values themselves.
/// The result is an ordered list of `(leaf value, count)` pairs in
/// first-seen order; the pair list stands in for a map because `Float`
/// leaves rule out hashable map keys. Lookup is by strict equality.
pub fn count_occurrences(tree: &Value) -> Result<Vec<(Value, u64)>> {
    let mut counts: Vec<(Value, u64)> = Vec::new();
    tally(tree, 0, &mut counts)?;
    Ok(counts)
}

fn tally(value: &Value, depth: usize, counts: &mut Vec<(Value, u64)>) -> Result<()> {
    match value.as_entries() {
        Some(entries) => {
            let depth = descend(depth)?;
            for (_, child) in entries {
                tally(child, depth, counts)?;
            }
        }
        None => {
            if let Some((_, n)) = counts.iter_mut().find(|(v, _)| v == value) {
                *n += 1;
            } else {
                counts.push((value.clone(), 1));
            }
        }
    }
    Ok(())
}

/// Sum every numeric scalar leaf in the tree.
///
/// Integers, floats, and strings that parse as a finite `f64` ("3", "2.5")
/// contribute their numeric value; everything else (null, booleans,
/// non-numeric strings) silently contributes zero. Never fails on
/// non-numeric input — skipping is the contract.
///
/// # Examples
///
/// ```
/// use matrix_tools::{sum_values, Value};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": 1, "b": {"c": 2, "d": "3"}, "e": "x"}));
/// assert_eq!(sum_values(&tree).unwrap(), 6.0);
/// ```
pub fn sum_values(tree: &Value) -> Result<f64> {
    sum_inner(tree, 0)
}

fn sum_inner(value: &Value, depth: usize) -> Result<f64> {
    match value {
        Value::Container(entries) => {
            let depth = descend(depth)?;
            let mut total = 0.0;
            for (_, child) in entries {
                total += sum_inner(child, depth)?;
            }
            Ok(total)
        }
        leaf => Ok(numeric_value(leaf).unwrap_or(0.0)),
    }
}

/// Numeric interpretation of a scalar leaf, if it has one. Strings must
/// parse in full to a finite float; "inf"/"nan" spellings do not count.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

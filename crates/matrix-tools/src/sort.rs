//! Recursive sorting by canonical string comparison.
//!
//! Entries at each level are reordered by byte-wise comparison of canonical
//! strings (see [`crate::canonical`]). Container-valued entries are sorted
//! before their level is ordered, so the comparator always sees the
//! canonical form of the fully-sorted substructure — this is what makes
//! repeated application of the same order a no-op. Sorting reorders entries
//! only: key identities are preserved, integer keys are never re-indexed.

use crate::canonical::{key_sort_form, sort_form};
use crate::descend;
use crate::error::Result;
use crate::types::{Key, Value};

/// Sort direction for [`sort_by_value`] and [`sort_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort every container level by the canonical form of its values.
///
/// Scalar values compare by their natural string form; container values by
/// the structural serialization of their (already sorted) contents. The
/// sort is stable: equal canonical strings keep their original relative
/// order, in both directions.
pub fn sort_by_value(tree: &Value, order: SortOrder) -> Result<Value> {
    sort_value_inner(tree, order, 0)
}

fn sort_value_inner(value: &Value, order: SortOrder, depth: usize) -> Result<Value> {
    let Value::Container(entries) = value else {
        return Ok(value.clone());
    };
    let depth = descend(depth)?;
    let mut keyed: Vec<(String, Key, Value)> = Vec::with_capacity(entries.len());
    for (key, child) in entries {
        let child = sort_value_inner(child, order, depth)?;
        keyed.push((sort_form(&child)?, key.clone(), child));
    }
    Ok(Value::Container(reorder(keyed, order)))
}

/// Sort every container level by its keys, coercing integer keys to their
/// decimal string form for comparison. Entry values travel with their keys;
/// container values are themselves sorted the same way.
pub fn sort_by_key(tree: &Value, order: SortOrder) -> Result<Value> {
    sort_key_inner(tree, order, 0)
}

fn sort_key_inner(value: &Value, order: SortOrder, depth: usize) -> Result<Value> {
    let Value::Container(entries) = value else {
        return Ok(value.clone());
    };
    let depth = descend(depth)?;
    let mut keyed: Vec<(String, Key, Value)> = Vec::with_capacity(entries.len());
    for (key, child) in entries {
        let child = sort_key_inner(child, order, depth)?;
        keyed.push((key_sort_form(key), key.clone(), child));
    }
    Ok(Value::Container(reorder(keyed, order)))
}

/// Stable sort on precomputed canonical strings, then strip them.
/// Descending reverses the comparison, not the result, so ties still keep
/// their original order.
fn reorder(mut keyed: Vec<(String, Key, Value)>, order: SortOrder) -> Vec<(Key, Value)> {
    keyed.sort_by(|a, b| match order {
        SortOrder::Ascending => a.0.cmp(&b.0),
        SortOrder::Descending => b.0.cmp(&a.0),
    });
    keyed.into_iter().map(|(_, key, child)| (key, child)).collect()
}

//! Key and value search over nested containers.
//!
//! Both searches deliberately stop descending into a matched value: a
//! matched subtree is captured whole, not re-scanned for nested matches of
//! the same needle. This asymmetry with the fully-recursive operations
//! (count, sum, replace, remove) is contract, not accident.

use crate::descend;
use crate::error::Result;
use crate::types::{set_entry, Key, Value};

/// Collect every value stored under `needle` anywhere in the tree.
///
/// Visits entries in order, depth-first. An entry whose key equals `needle`
/// contributes its value to the result and is not descended into; any other
/// container-valued entry is searched recursively. Duplicates are possible
/// and order is first-encountered.
///
/// # Examples
///
/// ```
/// use matrix_tools::{search_by_key, Key, Value};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"b": 1}, "c": {"b": 2}}));
/// let hits = search_by_key(&Key::from("b"), &tree).unwrap();
/// assert_eq!(hits, vec![Value::Integer(1), Value::Integer(2)]);
/// ```
pub fn search_by_key(needle: &Key, tree: &Value) -> Result<Vec<Value>> {
    let mut found = Vec::new();
    collect_by_key(needle, tree, 0, &mut found)?;
    Ok(found)
}

fn collect_by_key(needle: &Key, value: &Value, depth: usize, found: &mut Vec<Value>) -> Result<()> {
    let Some(entries) = value.as_entries() else {
        return Ok(());
    };
    let depth = descend(depth)?;
    for (key, child) in entries {
        if key == needle {
            found.push(child.clone());
        } else if child.is_container() {
            collect_by_key(needle, child, depth, found)?;
        }
    }
    Ok(())
}

/// Find every occurrence of `needle` and rebuild a sparse tree that mirrors
/// the matched paths.
///
/// Walks depth-first tracking the key-path from the root. Each match is
/// written into the result at its original path, creating intermediate
/// containers as needed. When one matched path is a prefix of another, the
/// write encountered later overwrites whatever the earlier one put at the
/// shared position (last-write-wins — intentional, mirroring the original
/// contract).
///
/// The needle may itself be a container; a matching container is captured
/// whole and not descended into.
pub fn search_by_value(needle: &Value, tree: &Value) -> Result<Value> {
    let mut result: Vec<(Key, Value)> = Vec::new();
    if let Some(entries) = tree.as_entries() {
        let mut path: Vec<Key> = Vec::new();
        for (key, child) in entries {
            path.push(key.clone());
            probe(needle, child, &mut path, 1, &mut result)?;
            path.pop();
        }
    }
    Ok(Value::Container(result))
}

fn probe(
    needle: &Value,
    value: &Value,
    path: &mut Vec<Key>,
    depth: usize,
    result: &mut Vec<(Key, Value)>,
) -> Result<()> {
    if value == needle {
        insert_at_path(result, path, needle.clone());
        return Ok(());
    }
    if let Some(entries) = value.as_entries() {
        let depth = descend(depth)?;
        for (key, child) in entries {
            path.push(key.clone());
            probe(needle, child, path, depth, result)?;
            path.pop();
        }
    }
    Ok(())
}

/// Walk/create containers along `path` and place `value` at the final
/// position. The final write overwrites whatever an earlier insertion put
/// at that position (last-write-wins on shared prefixes). The
/// scalar-at-intermediate-position branch is a guard only: a matched value
/// is never descended into, so no single needle produces one matched path
/// that is a strict prefix of another.
fn insert_at_path(entries: &mut Vec<(Key, Value)>, path: &[Key], value: Value) {
    match path {
        [] => {}
        [last] => set_entry(entries, last.clone(), value),
        [first, rest @ ..] => {
            let pos = match entries.iter().position(|(k, _)| k == first) {
                Some(i) => {
                    if !entries[i].1.is_container() {
                        entries[i].1 = Value::Container(Vec::new());
                    }
                    i
                }
                None => {
                    entries.push((first.clone(), Value::Container(Vec::new())));
                    entries.len() - 1
                }
            };
            if let Value::Container(inner) = &mut entries[pos].1 {
                insert_at_path(inner, rest, value);
            }
        }
    }
}

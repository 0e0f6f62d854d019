//! Copy-and-rebuild transforms: replacement and removal.
//!
//! Every function here returns a structurally new tree; the input is never
//! mutated. Removal in particular is rendered as copy-and-filter rather
//! than in-place deletion, so callers holding other references to the input
//! see no aliasing surprises.

use crate::descend;
use crate::error::Result;
use crate::types::{set_entry, Key, Value};

/// Replace every scalar leaf strictly equal to `old` with `new`.
///
/// Containers are rebuilt recursively with the same keys; only leaf values
/// change. A container structurally equal to `old` is not replaced — the
/// comparison applies to scalar leaves only. `new` may be any value,
/// including a container.
pub fn replace_value(old: &Value, new: &Value, tree: &Value) -> Result<Value> {
    replace_value_inner(old, new, tree, 0)
}

fn replace_value_inner(old: &Value, new: &Value, value: &Value, depth: usize) -> Result<Value> {
    match value {
        Value::Container(entries) => {
            let depth = descend(depth)?;
            let mut out = Vec::with_capacity(entries.len());
            for (key, child) in entries {
                out.push((key.clone(), replace_value_inner(old, new, child, depth)?));
            }
            Ok(Value::Container(out))
        }
        leaf if leaf == old => Ok(new.clone()),
        leaf => Ok(leaf.clone()),
    }
}

/// Rename every container entry keyed `old` to `new`, at every nesting
/// level. Values under renamed keys are themselves recursively processed.
///
/// If the rename collides with an existing key in the same container, the
/// later assignment wins (the earlier entry keeps its position but takes
/// the later value) — a documented edge case, not guaranteed-safe.
pub fn replace_key(old: &Key, new: &Key, tree: &Value) -> Result<Value> {
    replace_key_inner(old, new, tree, 0)
}

fn replace_key_inner(old: &Key, new: &Key, value: &Value, depth: usize) -> Result<Value> {
    let Value::Container(entries) = value else {
        return Ok(value.clone());
    };
    let depth = descend(depth)?;
    let mut out: Vec<(Key, Value)> = Vec::with_capacity(entries.len());
    for (key, child) in entries {
        let key = if key == old { new.clone() } else { key.clone() };
        set_entry(&mut out, key, replace_key_inner(old, new, child, depth)?);
    }
    Ok(Value::Container(out))
}

/// Drop every entry whose scalar value strictly equals `needle`, at every
/// nesting level. Container-valued entries are never dropped; they are
/// recursively processed instead. Siblings keep their keys and order.
pub fn remove_element_by_value(needle: &Value, tree: &Value) -> Result<Value> {
    remove_value_inner(needle, tree, 0)
}

fn remove_value_inner(needle: &Value, value: &Value, depth: usize) -> Result<Value> {
    let Value::Container(entries) = value else {
        return Ok(value.clone());
    };
    let depth = descend(depth)?;
    let mut out = Vec::with_capacity(entries.len());
    for (key, child) in entries {
        if child.is_container() {
            out.push((key.clone(), remove_value_inner(needle, child, depth)?));
        } else if child != needle {
            out.push((key.clone(), child.clone()));
        }
    }
    Ok(Value::Container(out))
}

/// Drop every entry keyed `needle`, at every nesting level, regardless of
/// the value stored under it. Non-matching container-valued entries are
/// recursively processed. Siblings keep their keys and order.
pub fn remove_element_by_key(needle: &Key, tree: &Value) -> Result<Value> {
    remove_key_inner(needle, tree, 0)
}

fn remove_key_inner(needle: &Key, value: &Value, depth: usize) -> Result<Value> {
    let Value::Container(entries) = value else {
        return Ok(value.clone());
    };
    let depth = descend(depth)?;
    let mut out = Vec::with_capacity(entries.len());
    for (key, child) in entries {
        if key == needle {
            continue;
        }
        if child.is_container() {
            out.push((key.clone(), remove_key_inner(needle, child, depth)?));
        } else {
            out.push((key.clone(), child.clone()));
        }
    }
    Ok(Value::Container(out))
}

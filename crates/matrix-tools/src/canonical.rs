//! Canonical string representations used for ordering comparisons.
//!
//! Sorting compares entries by a deterministic text encoding rather than by
//! structural recursion: scalars render in their natural form, containers
//! render as a stable JSON-like serialization of their full structure. Two
//! structurally different sub-containers therefore compare by their encoded
//! text, byte-wise, which makes orderings reproducible across platforms and
//! reimplementations.
//!
//! The encoding is for comparison only — it is not a parseable interchange
//! format (scalar strings at the top level are deliberately unquoted).

use crate::descend;
use crate::error::Result;
use crate::types::{Key, Value};

/// Render a value in the form the sort comparator uses: natural form for
/// scalars, [`serialize`] for containers.
pub fn sort_form(value: &Value) -> Result<String> {
    match value {
        Value::Container(_) => serialize(value),
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(format_float(*f)),
    }
}

/// Render a key in the form the key-sort comparator uses: string keys
/// as-is, integer keys in decimal.
pub fn key_sort_form(key: &Key) -> String {
    match key {
        Key::Str(s) => s.clone(),
        Key::Int(n) => n.to_string(),
    }
}

/// Deterministic structural encoding of a full value: `{k:v,...}` in entry
/// order, string keys and string scalars quoted and escaped, integer keys
/// unquoted decimal.
pub fn serialize(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(value, 0, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => write_quoted(s, out),
        Value::Container(entries) => {
            let depth = descend(depth)?;
            out.push('{');
            for (i, (key, child)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match key {
                    Key::Str(s) => write_quoted(s, out),
                    Key::Int(n) => out.push_str(&n.to_string()),
                }
                out.push(':');
                write_value(child, depth, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Format a float deterministically:
/// - NaN/Infinity render as `null`
/// - Negative zero normalizes to 0
/// - Whole values render in integer form (3.0 → 3)
/// - No trailing fractional zeros
fn format_float(f: f64) -> String {
    if f.is_nan() || f.is_infinite() {
        return "null".to_string();
    }
    let f = if f == 0.0 { 0.0 } else { f };
    if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    let s = format!("{}", f);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0');
        trimmed.trim_end_matches('.').to_string()
    } else {
        s
    }
}

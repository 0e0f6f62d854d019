//! Tree value types shared by every operation in this crate.
//!
//! A tree is a [`Value`]: either a scalar leaf or a [`Value::Container`],
//! an ordered key-to-value mapping stored as `Vec<(Key, Value)>` to maintain
//! insertion order without depending on `IndexMap`. The model does not
//! distinguish "lists" from "associative" containers — a list is simply a
//! container whose keys happen to be `0..n`.
//!
//! Equality is strict on both tag and payload: `Integer(1)` never equals
//! `String("1")`, and two containers are equal only when their entries match
//! pairwise in order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A container key: a scalar restricted to strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
}

/// A tree value. Scalar variants are leaves; `Container` holds key-value
/// pairs in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Key-value pairs in insertion order. Keys are unique within one level.
    Container(Vec<(Key, Value)>),
}

impl Value {
    /// True when this value is a container (one nesting level of a tree).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// Borrow the entry list when this value is a container.
    pub fn as_entries(&self) -> Option<&[(Key, Value)]> {
        match self {
            Value::Container(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a direct entry by key. Does not descend.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.as_entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// Assign `key` in an entry list with overwrite semantics: an existing key
/// keeps its original position and gets the new value; a new key is appended.
/// This is what keeps keys unique within a container and what gives
/// key-rename collisions their documented later-assignment-wins behavior.
pub(crate) fn set_entry(entries: &mut Vec<(Key, Value)>, key: Key, value: Value) {
    if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        entries.push((key, value));
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Bridge from `serde_json::Value` so trees can be written with the `json!`
/// macro. JSON objects become string-keyed containers (order preserved via
/// serde_json's `preserve_order` feature); JSON arrays become containers
/// keyed `0..n`. Numbers map to `Integer` when they fit in `i64`, else
/// `Float`.
impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => Value::Container(
                arr.iter()
                    .enumerate()
                    .map(|(i, elem)| (Key::Int(i as i64), Value::from(elem)))
                    .collect(),
            ),
            serde_json::Value::Object(map) => Value::Container(
                map.iter()
                    .map(|(k, v)| (Key::Str(k.clone()), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

/// Serde serialization for interop and display. List-shaped containers
/// (contiguous integer keys from 0) serialize as JSON arrays; everything
/// else as a JSON map with keys rendered as strings (integer keys in
/// decimal form, since JSON keys must be strings).
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Container(entries) => {
                if !entries.is_empty() && is_list_shaped(entries) {
                    let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                    for (_, child) in entries {
                        seq.serialize_element(child)?;
                    }
                    seq.end()
                } else {
                    let mut map = serializer.serialize_map(Some(entries.len()))?;
                    for (key, child) in entries {
                        match key {
                            Key::Str(s) => map.serialize_key(s)?,
                            Key::Int(n) => map.serialize_key(&n.to_string())?,
                        }
                        map.serialize_value(child)?;
                    }
                    map.end()
                }
            }
        }
    }
}

/// A container is list-shaped when its keys are exactly `0..n` in order.
fn is_list_shaped(entries: &[(Key, Value)]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(i, (k, _))| matches!(k, Key::Int(n) if *n == i as i64))
}

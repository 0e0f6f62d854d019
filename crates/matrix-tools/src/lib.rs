//! # matrix-tools
//!
//! Generic operations over arbitrarily nested, heterogeneous key/value
//! trees ("matrices"): search by key or value, occurrence counting,
//! replacement, removal, numeric summation, recursive sorting, structural
//! merge, and a one-level depth classifier.
//!
//! Every function is a pure mapping from input tree(s) to a freshly built
//! result — no call observably mutates its input, so logically-distinct
//! trees can be processed concurrently without coordination. Traversal
//! carries an explicit recursion ceiling ([`MAX_DEPTH`]) and fails with
//! [`TreeError::DepthExceeded`] rather than exhausting the stack on
//! pathologically deep input.
//!
//! ## Quick start
//!
//! ```rust
//! use matrix_tools::{search_by_key, sum_values, Key, Value};
//! use serde_json::json;
//!
//! let tree = Value::from(json!({"a": 1, "b": {"c": 2, "d": "3"}, "e": "x"}));
//!
//! // Numeric leaves sum; non-numeric leaves contribute zero.
//! assert_eq!(sum_values(&tree).unwrap(), 6.0);
//!
//! // Values stored under a key, anywhere in the tree.
//! let hits = search_by_key(&Key::from("c"), &tree).unwrap();
//! assert_eq!(hits, vec![Value::Integer(2)]);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — the `Key`/`Value` tree model and serde_json interop
//! - [`search`] — `search_by_key`, `search_by_value`
//! - [`aggregate`] — `count_occurrences`, `sum_values`
//! - [`transform`] — `replace_*`, `remove_element_by_*`
//! - [`sort`] — `sort_by_value`, `sort_by_key`
//! - [`merge`] — `merge_matrices`, `is_multidimensional`
//! - [`canonical`] — the deterministic encoding behind sort comparisons
//! - [`error`] — error types

pub mod aggregate;
pub mod canonical;
pub mod error;
pub mod merge;
pub mod search;
pub mod sort;
pub mod transform;
pub mod types;

pub use aggregate::{count_occurrences, sum_values};
pub use error::{Result, TreeError};
pub use merge::{is_multidimensional, merge_matrices};
pub use search::{search_by_key, search_by_value};
pub use sort::{sort_by_key, sort_by_value, SortOrder};
pub use transform::{
    remove_element_by_key, remove_element_by_value, replace_key, replace_value,
};
pub use types::{Key, Value};

/// Maximum container nesting depth any traversal will descend.
pub const MAX_DEPTH: usize = 128;

/// Bump the depth counter, failing once the ceiling is reached.
pub(crate) fn descend(depth: usize) -> error::Result<usize> {
    if depth >= MAX_DEPTH {
        return Err(TreeError::DepthExceeded { limit: MAX_DEPTH });
    }
    Ok(depth + 1)
}

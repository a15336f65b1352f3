//! An ordered map backed by a left-leaning red-black tree, where every node
//! caches the size of its subtree.
//!
//! Alongside the usual map operations (insert, lookup and removal in
//! `O(log n)` time), the cached sizes answer order-statistic queries in
//! logarithmic time:
//!
//! * [`RedBlackTree::rank()`]: the number of keys strictly less than a key.
//! * [`RedBlackTree::select()`]: the key at a given 0-based rank.
//! * [`RedBlackTree::predecessor()`] and [`RedBlackTree::successor()`]: the
//!   nearest keys below and above a key present in the tree.
//!
//! ```
//! use rbrank::RedBlackTree;
//!
//! let mut counts = RedBlackTree::new();
//! for word in "the quick brown fox jumps over the lazy dog".split_whitespace() {
//!     *counts.entry(word).or_insert(0) += 1;
//! }
//!
//! assert_eq!(counts.len(), 8);
//! assert_eq!(counts.get("the"), Some(&2));
//!
//! // Keys are ordered lexicographically.
//! assert_eq!(counts.first_key(), Some(&"brown"));
//! assert_eq!(counts.select(1), Ok(&"dog"));
//! assert_eq!(counts.rank("fox"), Some(2));
//! assert_eq!(counts.successor("lazy"), Some(&"over"));
//!
//! // The tree remains balanced.
//! assert!(counts.validate().is_ok());
//! assert!(counts.height() <= 2 * counts.black_height());
//! ```
//!
//! The structure of a tree can be inspected with [`RedBlackTree::stats()`],
//! or rendered as a Graphviz graph with [`RedBlackTree::to_dot()`].

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::dbg_macro
)]

mod dot;
mod entry;
mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{Error, InvariantViolation};
pub use tree::{RedBlackTree, Stats};

use std::fmt::Display;

use super::RedBlackTree;
use crate::{iter::InOrder, node::Node};

/// A snapshot of the shape of a [`RedBlackTree`], as returned by
/// [`RedBlackTree::stats()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    len: usize,
    height: usize,
    black_height: usize,
    average_depth: f64,
    red_nodes: usize,
}

impl Stats {
    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// See [`RedBlackTree::height()`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// See [`RedBlackTree::black_height()`].
    pub fn black_height(&self) -> usize {
        self.black_height
    }

    /// See [`RedBlackTree::average_depth()`].
    pub fn average_depth(&self) -> f64 {
        self.average_depth
    }

    /// See [`RedBlackTree::count_red()`].
    pub fn red_nodes(&self) -> usize {
        self.red_nodes
    }

    /// The fraction of nodes that are red, or NaN for an empty tree.
    pub fn red_ratio(&self) -> f64 {
        if self.len == 0 {
            return f64::NAN;
        }
        self.red_nodes as f64 / self.len as f64
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "size: {}", self.len)?;
        writeln!(f, "height: {} ({} black)", self.height, self.black_height)?;
        writeln!(f, "avg node depth: {:.3}", self.average_depth)?;
        write!(
            f,
            "red nodes: {} ({:.1}%)",
            self.red_nodes,
            100.0 * self.red_ratio()
        )
    }
}

impl<K, V> RedBlackTree<K, V> {
    /// Returns the number of nodes on the longest path from the root to an
    /// empty child, or 0 for an empty tree.
    ///
    /// Visits every node in `O(n)` time.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Returns the number of black nodes on any path from the root to an
    /// empty child, or 0 for an empty tree.
    ///
    /// Every such path carries the same number of black nodes, so only the
    /// left edge is walked, in `O(log n)` time.
    pub fn black_height(&self) -> usize {
        let mut ptr = self.root();
        let mut black = 0;

        while let Some(n) = ptr {
            black += usize::from(!n.is_red());
            ptr = n.left();
        }

        black
    }

    /// Returns the mean depth of all nodes, where the root is at depth 0, or
    /// NaN for an empty tree.
    pub fn average_depth(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }

        // Perform a pre-order traversal of the tree, summing node depths.
        let mut total = 0;
        let mut stack = self
            .root()
            .map(|v| (v, 0_usize))
            .into_iter()
            .collect::<Vec<_>>();
        while let Some((n, depth)) = stack.pop() {
            total += depth;
            stack.extend(
                n.left()
                    .into_iter()
                    .chain(n.right())
                    .map(|v| (v, depth + 1)),
            );
        }

        total as f64 / self.len() as f64
    }

    /// Returns the number of red nodes in the tree.
    ///
    /// Visits every node in `O(n)` time.
    pub fn count_red(&self) -> usize {
        InOrder::new(self.root()).filter(|v| v.is_red()).count()
    }

    /// Collect the structural metrics of the tree into a [`Stats`] snapshot.
    pub fn stats(&self) -> Stats {
        Stats {
            len: self.len(),
            height: self.height(),
            black_height: self.black_height(),
            average_depth: self.average_depth(),
            red_nodes: self.count_red(),
        }
    }
}

fn height<K, V>(n: Option<&Node<K, V>>) -> usize {
    n.map(|v| 1 + height(v.left()).max(height(v.right())))
        .unwrap_or_default()
}

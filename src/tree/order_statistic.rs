use std::{borrow::Borrow, cmp::Ordering};

use log::debug;

use super::RedBlackTree;
use crate::{
    node::{size, Node},
    Error,
};

impl<K, V> RedBlackTree<K, V> {
    /// Returns the zero-based rank of `key` in sorted order (the number of
    /// keys strictly less than `key`), or [`None`] if the key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// ```
    /// use rbrank::RedBlackTree;
    ///
    /// let t = [10, 20, 30].into_iter().map(|k| (k, ())).collect::<RedBlackTree<_, _>>();
    ///
    /// assert_eq!(t.rank(&10), Some(0));
    /// assert_eq!(t.rank(&30), Some(2));
    /// assert_eq!(t.rank(&15), None);
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.root();
        let mut rank = 0;

        while let Some(n) = ptr {
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(rank + size(n.left())),
                Ordering::Greater => {
                    // Everything in the left subtree, and this node, sort
                    // before `key`.
                    rank += size(n.left()) + 1;
                    n.right()
                }
            };
        }

        None
    }

    /// Returns the key at zero-based position `index` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RankOutOfBounds`] if `index` is not less than
    /// [`len()`](Self::len).
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn select(&self, index: usize) -> Result<&K, Error> {
        let len = self.len();
        if index >= len {
            debug!("rejected select of rank {index} in tree of {len} entries");
            return Err(Error::RankOutOfBounds { index, len });
        }

        let mut ptr = self.root();
        let mut index = index;

        while let Some(n) = ptr {
            let left = size(n.left());
            ptr = match index.cmp(&left) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Ok(n.key()),
                Ordering::Greater => {
                    index -= left + 1;
                    n.right()
                }
            };
        }

        // The root subtree size bounds every rank checked above, and each
        // descent stays within the size of the subtree it enters.
        unreachable!("in-bounds rank not found in tree")
    }

    /// Returns the greatest key strictly less than `key`.
    ///
    /// Returns [`None`] if `key` is not present, or is the minimum key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn predecessor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The most recent ancestor from which the search descended right.
        let mut ancestor: Option<&Node<K, V>> = None;
        let mut ptr = self.root();

        while let Some(n) = ptr {
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => n.left(),
                Ordering::Greater => {
                    ancestor = Some(n);
                    n.right()
                }
                Ordering::Equal => {
                    return match n.left() {
                        Some(left) => Some(left.rightmost().key()),
                        None => ancestor.map(Node::key),
                    };
                }
            };
        }

        None
    }

    /// Returns the smallest key strictly greater than `key`.
    ///
    /// Returns [`None`] if `key` is not present, or is the maximum key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn successor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The most recent ancestor from which the search descended left.
        let mut ancestor: Option<&Node<K, V>> = None;
        let mut ptr = self.root();

        while let Some(n) = ptr {
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => {
                    ancestor = Some(n);
                    n.left()
                }
                Ordering::Greater => n.right(),
                Ordering::Equal => {
                    return match n.right() {
                        Some(right) => Some(right.leftmost().key()),
                        None => ancestor.map(Node::key),
                    };
                }
            };
        }

        None
    }
}

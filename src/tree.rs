use std::borrow::Borrow;

use log::{debug, trace};

use crate::{
    dot::Dot,
    entry::Entry,
    iter::InOrder,
    node::{remove_recurse, size, Color, Node},
};

mod metrics;
mod order_statistic;
mod validate;

pub use metrics::Stats;

/// An ordered map backed by a left-leaning red-black tree, augmented with
/// subtree sizes to answer rank and select queries in `O(log n)` time.
///
/// ```
/// use rbrank::RedBlackTree;
///
/// let mut t = RedBlackTree::new();
/// for k in [5, 3, 8, 1, 4] {
///     t.insert(k, k * 10);
/// }
///
/// assert_eq!(t.get(&4), Some(&40));
/// assert_eq!(t.select(0), Ok(&1));
/// assert_eq!(t.rank(&4), Some(2));
/// assert_eq!(t.predecessor(&5), Some(&4));
/// assert_eq!(t.successor(&5), Some(&8));
///
/// assert_eq!(t.remove(&5), Some(50));
/// assert_eq!(t.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RedBlackTree<K, V>(Option<Box<Node<K, V>>>);

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K, V> RedBlackTree<K, V> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of entries in the tree.
    ///
    /// This is read from the cached subtree size of the root in `O(1)` time.
    pub fn len(&self) -> usize {
        size(self.root())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Remove all entries from the tree.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Return the key stored in the root node, if any.
    pub fn root_key(&self) -> Option<&K> {
        self.root().map(Node::key)
    }

    /// Return the minimum key in the tree, if any.
    pub fn first_key(&self) -> Option<&K> {
        self.root().map(|v| v.leftmost().key())
    }

    /// Return the maximum key in the tree, if any.
    pub fn last_key(&self) -> Option<&K> {
        self.root().map(|v| v.rightmost().key())
    }

    /// Render the tree structure as a [Graphviz] `digraph`, labelling each
    /// node with its key and subtree size, filled with its colour.
    ///
    /// [Graphviz]: https://graphviz.org/
    pub fn to_dot(&self) -> String
    where
        K: std::fmt::Display,
    {
        Dot(self.root()).to_string()
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.0.as_deref()
    }
}

impl<K, V> RedBlackTree<K, V>
where
    K: Ord,
{
    /// Insert `value` under `key`, returning the value previously stored
    /// under `key`, if any.
    ///
    /// Overwriting an existing key leaves the tree structure unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = match self.0 {
            Some(ref mut v) => v.insert(key, value),
            None => {
                self.0 = Some(Box::new(Node::new(key, value)));
                None
            }
        };

        // Invariant: the root is always black.
        if let Some(root) = self.0.as_mut() {
            root.set_color(Color::Black);
        }

        if replaced.is_none() {
            trace!("linked new key, tree holds {} entries", self.len());
        }

        replaced
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|v| v.find(key)).map(Node::value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.as_mut().and_then(|v| v.get_mut(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key` from the tree, returning the value stored under it.
    ///
    /// Returns [`None`] without modifying the tree if `key` is not present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The top-down removal restructures the tree on the way down, so it
        // must only be started for a key that exists.
        if !self.contains_key(key) {
            debug!("remove of absent key, tree left untouched");
            return None;
        }

        // Colour the root red so the descent always has redness to carry.
        if let Some(root) = self.0.as_mut() {
            root.set_color(Color::Red);
        }

        let removed = remove_recurse(&mut self.0, key);

        if let Some(root) = self.0.as_mut() {
            root.set_color(Color::Black);
        }

        // Invariant: a key that was present is always removed.
        debug_assert!(removed.is_some());
        trace!("removed key, tree holds {} entries", self.len());

        removed
    }

    /// Get the [`Entry`] for `key` for in-place manipulation.
    ///
    /// An occupied entry borrows the value directly, so reading or updating
    /// it costs no further searches.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        Entry::new(key, self)
    }
}

impl<K, V> RedBlackTree<K, V>
where
    V: PartialEq,
{
    /// Returns true if any key maps to `value`.
    ///
    /// Values are unordered, so this visits every node in `O(n)` time.
    pub fn contains_value(&self, value: &V) -> bool {
        self.reverse_lookup(value).is_some()
    }

    /// Return a key that maps to `value`, if any.
    ///
    /// When several keys map to `value`, the smallest is returned. Visits
    /// every node in `O(n)` time.
    pub fn reverse_lookup(&self, value: &V) -> Option<&K> {
        InOrder::new(self.root())
            .find(|v| v.value() == value)
            .map(Node::key)
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackTree<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K, V> Extend<(K, V)> for RedBlackTree<K, V>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

use crate::RedBlackTree;

/// A single key of a [`RedBlackTree`], either already mapped to a value or
/// not, as returned by [`RedBlackTree::entry()`].
///
/// Counting occurrences needs only one call per word:
///
/// ```
/// use rbrank::RedBlackTree;
///
/// let mut counts: RedBlackTree<&str, usize> = RedBlackTree::new();
/// for word in "a rose is a rose".split_whitespace() {
///     counts.entry(word).and_modify(|n| *n += 1).or_insert(1);
/// }
///
/// assert_eq!(counts.get("rose"), Some(&2));
/// assert_eq!(counts.get("is"), Some(&1));
/// ```
#[derive(Debug)]
pub enum Entry<'a, K, V> {
    /// The key is not in the tree.
    Vacant(VacantEntry<'a, K, V>),
    /// The key is in the tree, and its value is borrowed by the entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

/// An absent key, holding the tree it will be linked into.
#[derive(Debug)]
pub struct VacantEntry<'a, K, V> {
    key: K,
    tree: &'a mut RedBlackTree<K, V>,
}

/// A present key, holding a borrow of the value it maps to.
///
/// Reading or writing the value through an [`OccupiedEntry`] does not search
/// the tree again.
#[derive(Debug)]
pub struct OccupiedEntry<'a, K, V> {
    key: K,
    value: &'a mut V,
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
{
    pub(crate) fn new(key: K, tree: &'a mut RedBlackTree<K, V>) -> Self {
        if !tree.contains_key(&key) {
            return Self::Vacant(VacantEntry { key, tree });
        }

        match tree.get_mut(&key) {
            Some(value) => Self::Occupied(OccupiedEntry { key, value }),
            None => unreachable!("key found in tree is no longer present"),
        }
    }
}

impl<K, V> Entry<'_, K, V> {
    pub fn key(&self) -> &K {
        match self {
            Self::Vacant(v) => &v.key,
            Self::Occupied(v) => &v.key,
        }
    }

    /// Apply `f` to the value if the key is present.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Self::Occupied(v) = &mut self {
            f(&mut *v.value);
        }
        self
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord + Clone,
{
    /// Return the value for the key, linking `default` into the tree first if
    /// the key is absent.
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// As [`Entry::or_insert()`], calling `default` only when the key is
    /// absent.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Occupied(v) => v.into_mut(),
            Self::Vacant(v) => v.insert(default()),
        }
    }

    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Link `value` into the tree under this entry's key, rebalancing as
    /// [`RedBlackTree::insert()`] does, and return a borrow of it.
    pub fn insert(self, value: V) -> &'a mut V
    where
        K: Ord + Clone,
    {
        let Self { key, tree } = self;

        // Rotations while unwinding move the new node, so it is located again
        // once the tree is balanced.
        tree.insert(key.clone(), value);
        match tree.get_mut(&key) {
            Some(v) => v,
            None => unreachable!("inserted key not found in tree"),
        }
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn get(&self) -> &V {
        &*self.value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut *self.value
    }

    /// Release the entry, keeping the borrow of its value.
    pub fn into_mut(self) -> &'a mut V {
        self.value
    }

    /// Replace the value, returning the old one. The tree structure is not
    /// touched.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(&mut *self.value, value)
    }
}

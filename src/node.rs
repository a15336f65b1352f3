use std::{borrow::Borrow, cmp::Ordering, ops::Not};

/// The colour of the link from a [`Node`] to its parent.
///
/// A red node is glued to its parent to form a 3-node of the equivalent 2-3
/// tree. Absent children are always considered black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

#[derive(Debug)]
pub(super) enum RemoveResult<V> {
    /// The value was removed from the tree.
    Removed(V),

    /// This node contains the key, has no children, and must be unlinked by
    /// the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Child nodes pointers.
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,

    color: Color,

    /// The number of nodes in the subtree rooted at this [`Node`], including
    /// itself.
    ///
    /// A leaf has a size of 1.
    size: usize,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    /// Construct a new red leaf.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            left: None,
            right: None,
            color: Color::Red,
            size: 1,
            key,
            value,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, returning the previous
    /// value if `key` was already present.
    ///
    /// New keys are linked in as red leaves, and any resulting right-leaning
    /// or consecutive red links are repaired while unwinding. The caller is
    /// responsible for colouring the tree root black afterwards.
    pub(crate) fn insert(self: &mut Box<Self>, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return Some(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        let replaced = match child {
            Some(v) => v.insert(key, value),
            None => {
                *child = Some(Box::new(Self::new(key, value)));
                None
            }
        };

        if replaced.is_some() {
            // Overwriting a value leaves the structure, colours and sizes of
            // the tree untouched.
            return replaced;
        }

        balance_after_insert(self);

        None
    }

    /// Remove `key` from the subtree rooted at `self`.
    ///
    /// On entry, either `self` or the child on the search path must be red
    /// (the tree root is temporarily coloured red by the caller to establish
    /// this). The redness is pushed down before every recursive call, so that
    /// the node eventually unlinked is never a black leaf.
    ///
    /// The caller must have checked `key` is present: the descent restructures
    /// the tree before it reaches the target node.
    pub(super) fn remove<Q>(self: &mut Box<Self>, key: &Q) -> Option<RemoveResult<V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if key.cmp(self.key.borrow()) == Ordering::Less {
            if !is_red(self.left()) && !is_red(self.left().and_then(Node::left)) {
                move_red_left(self);
            }

            let v = remove_recurse(&mut self.left, key)?;
            fix_up(self);
            return Some(RemoveResult::Removed(v));
        }

        // Lean the 3-node right so the descent can carry its redness down the
        // right edge.
        if is_red(self.left()) {
            rotate_right(self);
        }

        if key.cmp(self.key.borrow()) == Ordering::Equal && self.right.is_none() {
            // A node without a right child in a left-leaning tree cannot have a
            // left child either (it would be red, and was rotated above).
            debug_assert!(self.left.is_none());
            return Some(RemoveResult::ParentUnlink);
        }

        // The right child exists here: either the key is stored in the right
        // subtree, or this node holds it and has a right child.
        if !is_red(self.right()) && !is_red(self.right().and_then(Node::left)) {
            move_red_right(self);
        }

        let v = if key.cmp(self.key.borrow()) == Ordering::Equal {
            // Relabel this node with its in-order successor, and unlink the
            // successor's node from the right subtree instead.
            let (succ_key, succ_value) = remove_min(&mut self.right)?;
            self.key = succ_key;
            std::mem::replace(&mut self.value, succ_value)
        } else {
            remove_recurse(&mut self.right, key)?
        };

        fix_up(self);
        Some(RemoveResult::Removed(v))
    }

    /// Return the node holding `key` in the subtree rooted at `self`, if any.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Self>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            ptr = match key.cmp(n.key.borrow()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }

        None
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left.as_deref_mut(),
            Ordering::Equal => return Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut(),
        }?;

        node.get_mut(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Descend the left edge of the subtree rooted at `self`, returning the
    /// node holding the minimum key.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut n = self;
        while let Some(left) = n.left() {
            n = left;
        }
        n
    }

    /// Descend the right edge of the subtree rooted at `self`, returning the
    /// node holding the maximum key.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut n = self;
        while let Some(right) = n.right() {
            n = right;
        }
        n
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
impl<K, V> Node<K, V> {
    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn set_left(&mut self, n: Option<Box<Self>>) {
        self.left = n;
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

/// Returns true if `n` is a red node. An absent node is black.
pub(crate) fn is_red<K, V>(n: Option<&Node<K, V>>) -> bool {
    n.map(Node::is_red).unwrap_or_default()
}

/// Returns the subtree size of `n`. An absent node has a size of 0.
pub(crate) fn size<K, V>(n: Option<&Node<K, V>>) -> usize {
    n.map(Node::size).unwrap_or_default()
}

fn update_size<K, V>(n: &mut Node<K, V>) {
    n.size = 1 + size(n.left()) + size(n.right());
}

/// Repair the subtree rooted at `n` after a new leaf was linked beneath it.
fn balance_after_insert<K, V>(n: &mut Box<Node<K, V>>) {
    if is_red(n.right()) && !is_red(n.left()) {
        rotate_left(n);
    }
    if is_red(n.left()) && is_red(n.left().and_then(Node::left)) {
        rotate_right(n);
    }
    if is_red(n.left()) && is_red(n.right()) {
        flip_colors(n);
    }

    update_size(n);
}

/// Restore the left-leaning invariants of the subtree rooted at `n` after a
/// removal beneath it.
fn fix_up<K, V>(n: &mut Box<Node<K, V>>) {
    update_size(n);

    if is_red(n.left()) && is_red(n.right()) {
        flip_colors(n);
    }
    if is_red(n.right()) && !is_red(n.left()) {
        rotate_left(n);
    }
    if is_red(n.left()) && is_red(n.left().and_then(Node::left)) {
        rotate_right(n);
    }
    if is_red(n.left()) && is_red(n.right()) {
        flip_colors(n);
    }
}

/// Make `n.left` or one of its children red, borrowing from the right sibling
/// when it is a 3-node.
///
/// ```text
///      (n)                                      b
///     /   \                                   /   \
///    a     c      Move Red Left             (n)   (c)
///         / \    --------------->           / \   / \
///       (b)  d                            (a) 1  2   d
///       / \
///      1   2
/// ```
fn move_red_left<K, V>(n: &mut Box<Node<K, V>>) {
    flip_colors(n);

    if let Some(right) = n.right.as_mut().filter(|v| is_red(v.left())) {
        rotate_right(right);
        rotate_left(n);
        flip_colors(n);
    }
}

/// Make `n.right` or one of its children red, borrowing from the left sibling
/// when it is a 3-node.
fn move_red_right<K, V>(n: &mut Box<Node<K, V>>) {
    flip_colors(n);

    if is_red(n.left().and_then(Node::left)) {
        rotate_right(n);
        flip_colors(n);
    }
}

/// Flip the colour of `n` and both of its children.
///
/// # Panics
///
/// Panics if `n` does not have both a left and a right child.
fn flip_colors<K, V>(n: &mut Node<K, V>) {
    n.color = !n.color;

    for child in [n.left.as_mut(), n.right.as_mut()] {
        let child = child.unwrap();
        child.color = !child.color;
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// which takes the colour of `x` while `x` becomes red.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K, V>(x: &mut Box<Node<K, V>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    x.color = p.color;
    p.color = Color::Red;
    update_size(&mut p);

    x.left = Some(p);
    update_size(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// which takes the colour of `y` while `y` becomes red.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K, V>(y: &mut Box<Node<K, V>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    y.color = p.color;
    p.color = Color::Red;
    update_size(&mut p);

    y.right = Some(p);
    update_size(y);
}

/// Unlink the minimum node of the subtree in `node`, returning its key and
/// value.
///
/// Applies the same "carry redness down" rule as [`Node::remove()`],
/// specialised to always descend left.
fn remove_min<K, V>(node: &mut Option<Box<Node<K, V>>>) -> Option<(K, V)> {
    let n = node.as_mut()?;

    if n.left.is_none() {
        // The minimum of a left-leaning subtree is always a leaf.
        debug_assert!(n.right.is_none());
        return node.take().map(|v| v.into_entry());
    }

    if !is_red(n.left()) && !is_red(n.left().and_then(Node::left)) {
        move_red_left(n);
    }

    let min = remove_min(&mut n.left);
    fix_up(n);
    min
}

/// Recurse into `node`, calling [`Node::remove()`] to remove `key` from the
/// subtree rooted at `node`.
///
/// Returns [`None`] if the subtree is empty.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted value.
pub(super) fn remove_recurse<K, V, Q>(node: &mut Option<Box<Node<K, V>>>, key: &Q) -> Option<V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let v = match node.as_mut()?.remove(key)? {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => node.take()?.into_entry().1,
    };

    Some(v)
}

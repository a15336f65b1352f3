use std::fmt::Debug;

use proptest::prelude::*;

use crate::{iter::InOrder, RedBlackTree};

/// Upper (exclusive) bound of keys produced by [`arbitrary_key()`].
///
/// Kept small so that generated operations frequently hit existing keys.
pub(crate) const KEY_MAX: usize = 64;

/// Generate arbitrary keys in the range [0..[`KEY_MAX`]).
pub(crate) fn arbitrary_key() -> impl Strategy<Value = usize> {
    0..KEY_MAX
}

/// Assert the tree satisfies all structural invariants, and that the cached
/// length agrees with the number of nodes reachable from the root.
#[track_caller]
pub(crate) fn assert_invariants<K, V>(t: &RedBlackTree<K, V>)
where
    K: Ord + Debug,
{
    assert_eq!(t.validate(), Ok(()));
    assert_eq!(t.len(), InOrder::new(t.root()).count());
}

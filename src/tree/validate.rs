use super::RedBlackTree;
use crate::{
    iter::InOrder,
    node::{is_red, Node},
    InvariantViolation,
};

impl<K, V> RedBlackTree<K, V>
where
    K: Ord,
{
    /// Validate the structure of the tree:
    ///
    /// * The root is black.
    /// * No red node has a red child, and no red node is a right child.
    /// * Every path from the root to an empty child holds the same number of
    ///   black nodes.
    /// * An in-order walk yields strictly increasing keys.
    /// * Every cached subtree size is exact.
    ///
    /// Visits every node in `O(n)` time.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let root = match self.root() {
            Some(v) => v,
            None => return Ok(()),
        };

        if root.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        validate_subtree(root, 0)?;

        let mut iter = InOrder::new(Some(root)).map(Node::key).enumerate();
        if let Some((_, mut prev)) = iter.next() {
            for (position, key) in iter {
                if key <= prev {
                    return Err(InvariantViolation::OutOfOrder { position });
                }
                prev = key;
            }
        }

        Ok(())
    }
}

/// Validate the colouring and sizes of the subtree rooted at `n`, returning
/// its black height and actual node count.
fn validate_subtree<K, V>(
    n: &Node<K, V>,
    depth: usize,
) -> Result<(usize, usize), InvariantViolation> {
    if n.is_red() && (is_red(n.left()) || is_red(n.right())) {
        return Err(InvariantViolation::ConsecutiveReds { depth });
    }

    if is_red(n.right()) {
        return Err(InvariantViolation::RightLeaningRed { depth: depth + 1 });
    }

    let (left_black, left_size) = match n.left() {
        Some(v) => validate_subtree(v, depth + 1)?,
        None => (0, 0),
    };
    let (right_black, right_size) = match n.right() {
        Some(v) => validate_subtree(v, depth + 1)?,
        None => (0, 0),
    };

    if left_black != right_black {
        return Err(InvariantViolation::UnbalancedBlacks {
            left: left_black,
            right: right_black,
        });
    }

    let actual = 1 + left_size + right_size;
    if n.size() != actual {
        return Err(InvariantViolation::SizeMismatch {
            cached: n.size(),
            actual,
        });
    }

    Ok((left_black + usize::from(!n.is_red()), actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Color;

    fn tree_of(keys: impl IntoIterator<Item = usize>) -> RedBlackTree<usize, ()> {
        keys.into_iter().map(|k| (k, ())).collect()
    }

    #[test]
    fn test_valid() {
        assert_eq!(RedBlackTree::<usize, ()>::default().validate(), Ok(()));
        assert_eq!(tree_of(0..100).validate(), Ok(()));
        assert_eq!(tree_of((0..100).rev()).validate(), Ok(()));
    }

    #[test]
    fn test_red_root() {
        let mut t = tree_of(0..10);
        t.0.as_mut().unwrap().set_color(Color::Red);

        assert_eq!(t.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn test_unbalanced_blacks() {
        // A black root with a single black child has black heights 1 and 0.
        let mut t = tree_of([2, 1]);
        t.0.as_mut().unwrap().left_mut().unwrap().set_color(Color::Black);

        assert_eq!(
            t.validate(),
            Err(InvariantViolation::UnbalancedBlacks { left: 1, right: 0 })
        );
    }

    #[test]
    fn test_consecutive_reds() {
        //        3
        //       /
        //     (2)
        //     /
        //   (1)
        let mut t = tree_of([3, 2]);
        let left = t.0.as_mut().unwrap().left_mut().unwrap();
        left.set_left(Some(Box::new(Node::new(1, ()))));
        left.set_size(2);
        t.0.as_mut().unwrap().set_size(3);

        assert_eq!(
            t.validate(),
            Err(InvariantViolation::ConsecutiveReds { depth: 1 })
        );
    }

    #[test]
    fn test_size_mismatch() {
        let mut t = tree_of(0..3);
        t.0.as_mut().unwrap().set_size(5);

        assert_eq!(
            t.validate(),
            Err(InvariantViolation::SizeMismatch {
                cached: 5,
                actual: 3
            })
        );
    }
}

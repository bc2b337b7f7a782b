//! Full-tree verification of the AVL invariants. The tree maintains these itself, so this is for
//! tests and for diagnosing a tree on request.

use thiserror::Error;

use crate::tree::Tree;

/// The first broken invariant found by [`Tree::validate`]. Nodes are identified by their depth,
/// the root being at depth 0.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A key is not between the keys of the ancestors it sits below.
    #[error("key at depth {depth} is out of order with an ancestor")]
    Unordered {
        /// Depth of the misplaced node.
        depth: usize,
    },
    /// A node's cached height disagrees with the heights of its subtrees.
    #[error("node at depth {depth} caches height {cached} but has height {actual}")]
    StaleHeight {
        /// Depth of the node.
        depth: usize,
        /// The height stored in the node.
        cached: usize,
        /// The height recomputed from its children.
        actual: usize,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("node at depth {depth} has balance factor {factor}")]
    Unbalanced {
        /// Depth of the node.
        depth: usize,
        /// Left height minus right height.
        factor: isize,
    },
}

impl<K: Ord> Tree<K> {
    /// Walks the whole tree checking that keys are strictly ordered, that every cached height is
    /// correct and that every node is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = (0..100).collect();
    ///
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check(self, 0, None, None).map(|_| ())
    }
}

/// Checks the subtree whose keys must lie strictly between `lower` and `upper`, returning its
/// recomputed height.
fn check<'a, K: Ord>(
    tree: &'a Tree<K>,
    depth: usize,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
) -> Result<usize, InvariantViolation> {
    let n = match tree.root() {
        None => return Ok(0),
        Some(n) => n,
    };

    let key = n.key();
    if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
        return Err(InvariantViolation::Unordered { depth });
    }

    let left = check(n.left(), depth + 1, lower, Some(key))?;
    let right = check(n.right(), depth + 1, Some(key), upper)?;

    let actual = left.max(right) + 1;
    if n.height() != actual {
        return Err(InvariantViolation::StaleHeight {
            depth,
            cached: n.height(),
            actual,
        });
    }

    let factor = left as isize - right as isize;
    if factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { depth, factor });
    }

    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node_with_height;

    fn leaf(key: i32) -> Tree<i32> {
        node_with_height(key, Tree::Leaf, Tree::Leaf, 1)
    }

    #[test]
    fn test_empty_is_valid() {
        assert_eq!(Tree::<i32>::new().validate(), Ok(()));
    }

    #[test]
    fn test_unordered() {
        // 3 sits in 2's left subtree.
        let tree = node_with_height(2, leaf(3), Tree::Leaf, 2);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::Unordered { depth: 1 })
        );
    }

    #[test]
    fn test_unordered_against_grandparent() {
        // 6 is greater than 4 but sits in 5's left subtree.
        let tree = node_with_height(
            5,
            node_with_height(4, Tree::Leaf, leaf(6), 2),
            leaf(7),
            3,
        );

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::Unordered { depth: 2 })
        );
    }

    #[test]
    fn test_duplicate_is_unordered() {
        let tree = node_with_height(2, Tree::Leaf, leaf(2), 2);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::Unordered { depth: 1 })
        );
    }

    #[test]
    fn test_stale_height() {
        let tree = node_with_height(2, leaf(1), Tree::Leaf, 1);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::StaleHeight {
                depth: 0,
                cached: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_unbalanced() {
        let tree = node_with_height(3, node_with_height(2, leaf(1), Tree::Leaf, 2), Tree::Leaf, 3);

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::Unbalanced {
                depth: 0,
                factor: 2
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = InvariantViolation::Unbalanced {
            depth: 1,
            factor: -2,
        };

        assert_eq!(err.to_string(), "node at depth 1 has balance factor -2");
    }
}

//! An AVL tree whose nodes are each owned by exactly one parent. Operations that modify the tree
//! take it by value and hand back the tree to keep using, so the root is always rebound by the
//! caller.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // `insert` hands back the tree to keep using.
//! let tree = tree.insert(10).insert(20).insert(30);
//!
//! // Ascending inserts were rebalanced so 20 is now the root.
//! assert_eq!(tree.root().map(|n| *n.key()), Some(20));
//! assert_eq!(tree.height(), 2);
//!
//! // And delete one for good measure.
//! let tree = tree.delete(&20);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::util::Outcome;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique keys. The tree is
/// nothing more than its root, so an empty tree is a [`Leaf`][Tree::Leaf].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<K> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    Node(Box<Node<K>>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a single node has a
    /// height of 1. This reads the cached value and never walks the tree.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.height,
        }
    }

    /// The height of the left subtree minus the height of the right subtree. 0 for an empty tree.
    pub fn balance_factor(&self) -> isize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.balance_factor(),
        }
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|n| &n.min_node().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|n| &n.max_node().key)
    }

    /// Finds the node holding the given key. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    ///
    /// assert_eq!(tree.search(&2).map(|n| n.height()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.search(key),
                Ordering::Equal => Some(n),
                Ordering::Greater => n.right.search(key),
            },
        }
    }

    /// Whether a node with the given key is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Returns the tree with a node for `key` added. Inserting a key that is already present
    /// returns the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(1);
    ///
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(self, key: K) -> Self
    where
        K: Ord,
    {
        self.insert_with_outcome(key).0
    }

    /// Like [`insert`][Tree::insert] but also reports whether the key was added.
    pub fn insert_with_outcome(self, key: K) -> (Self, Outcome)
    where
        K: Ord,
    {
        let mut outcome = Outcome::Unchanged;
        let tree = self.put(key, &mut outcome);
        if outcome == Outcome::Unchanged {
            debug!("ignoring insert of a key already in the tree");
        }
        (tree, outcome)
    }

    /// Returns the tree without the node holding `key`. Deleting a key that isn't present (or
    /// deleting from an empty tree) returns the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    /// let tree = tree.delete(&1);
    ///
    /// assert!(!tree.contains(&1));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn delete(self, key: &K) -> Self
    where
        K: Ord,
    {
        self.delete_with_outcome(key).0
    }

    /// Like [`delete`][Tree::delete] but also reports whether a node was removed.
    pub fn delete_with_outcome(self, key: &K) -> (Self, Outcome)
    where
        K: Ord,
    {
        let mut outcome = Outcome::Unchanged;
        let tree = self.remove(key, &mut outcome);
        if outcome == Outcome::Unchanged {
            debug!("ignoring delete of a key not in the tree");
        }
        (tree, outcome)
    }

    /// Replaces `old` with `new`: `old` is deleted (if present) and then `new` is inserted (unless
    /// already present).
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2).edit(&1, 3);
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    pub fn edit(self, old: &K, new: K) -> Self
    where
        K: Ord,
    {
        self.delete(old).insert(new)
    }

    fn put(self, key: K, outcome: &mut Outcome) -> Self
    where
        K: Ord,
    {
        match self {
            Self::Leaf => {
                *outcome = Outcome::Applied;
                Self::Node(Box::new(Node::new(key)))
            }
            Self::Node(mut n) => {
                match key.cmp(&n.key) {
                    Ordering::Less => n.left = mem::take(&mut n.left).put(key, outcome),
                    Ordering::Equal => return Self::Node(n),
                    Ordering::Greater => n.right = mem::take(&mut n.right).put(key, outcome),
                }
                n.update_height();
                Self::Node(n.balance())
            }
        }
    }

    fn remove(self, key: &K, outcome: &mut Outcome) -> Self
    where
        K: Ord,
    {
        let mut n = match self {
            Self::Leaf => return Self::Leaf,
            Self::Node(n) => n,
        };

        match key.cmp(&n.key) {
            Ordering::Less => n.left = mem::take(&mut n.left).remove(key, outcome),
            Ordering::Greater => n.right = mem::take(&mut n.right).remove(key, outcome),
            Ordering::Equal => {
                *outcome = Outcome::Applied;
                match (mem::take(&mut n.left), mem::take(&mut n.right)) {
                    // With at most one child the child takes this node's place. It is already
                    // balanced and its height is correct.
                    (Self::Leaf, child) | (child, Self::Leaf) => return child,

                    // With two children we promote this node's in-order successor. That is, the
                    // smallest node in this node's right subtree.
                    (left, Self::Node(right)) => {
                        let (successor, right) = right.take_min();
                        n.key = successor;
                        n.left = left;
                        n.right = right;
                    }
                }
            }
        }

        // Every ancestor of a removed node is rebalanced: unlike insertion, a single deletion can
        // need a rotation at each level on the way back up.
        n.update_height();
        Self::Node(n.balance())
    }

    fn map_node(self, f: impl FnOnce(Box<Node<K>>) -> Box<Node<K>>) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(f(n)),
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            *self = mem::take(self).insert(key);
        }
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two children although
/// those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Tree<K>,
    right: Tree<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    fn new(key: K) -> Self {
        Self {
            key,
            left: Tree::Leaf,
            right: Tree::Leaf,
            height: 1,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The subtree of keys smaller than this node's key.
    pub fn left(&self) -> &Tree<K> {
        &self.left
    }

    /// The subtree of keys larger than this node's key.
    pub fn right(&self) -> &Tree<K> {
        &self.right
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Recomputes the cached height from the (already correct) heights of the children.
    fn update_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    fn min_node(&self) -> &Self {
        match &self.left {
            Tree::Leaf => self,
            Tree::Node(l) => l.min_node(),
        }
    }

    fn max_node(&self) -> &Self {
        match &self.right {
            Tree::Leaf => self,
            Tree::Node(r) => r.max_node(),
        }
    }

    /// Detaches the leftmost node of this subtree. Returns its key and the rebalanced remainder.
    fn take_min(mut self: Box<Self>) -> (K, Tree<K>) {
        match mem::take(&mut self.left) {
            Tree::Leaf => {
                let Node { key, right, .. } = *self;
                (key, right)
            }
            Tree::Node(l) => {
                let (min, new_left) = l.take_min();
                self.left = new_left;
                self.update_height();
                (min, Tree::Node(self.balance()))
            }
        }
    }

    /// Rotates the right child up to become the root. The old root becomes the new root's left
    /// child and takes the new root's old left subtree as its right subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match mem::take(&mut self.right) {
            Tree::Node(r) => r,
            // Nothing to promote.
            Tree::Leaf => return self,
        };

        self.right = mem::take(&mut new_root.left);
        self.update_height();
        new_root.left = Tree::Node(self);
        new_root.update_height();
        new_root
    }

    /// Rotates the left child up to become the root. The old root becomes the new root's right
    /// child and takes the new root's old right subtree as its left subtree.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match mem::take(&mut self.left) {
            Tree::Node(l) => l,
            Tree::Leaf => return self,
        };

        self.left = mem::take(&mut new_root.right);
        self.update_height();
        new_root.right = Tree::Node(self);
        new_root.update_height();
        new_root
    }

    /// Restores the AVL invariant at this node after one of its subtrees changed height by one.
    /// The subtrees themselves must already be balanced.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        let factor = self.balance_factor();
        let return_node = if factor > 1 {
            if self.left.balance_factor() < 0 {
                trace!(case = "left-right", "rebalancing");
                self.left = mem::take(&mut self.left).map_node(Node::rotate_left);
            } else {
                trace!(case = "left-left", "rebalancing");
            }
            self.rotate_right()
        } else if factor < -1 {
            if self.right.balance_factor() > 0 {
                trace!(case = "right-left", "rebalancing");
                self.right = mem::take(&mut self.right).map_node(Node::rotate_right);
            } else {
                trace!(case = "right-right", "rebalancing");
            }
            self.rotate_left()
        } else {
            self
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(return_node.balance_factor().abs() <= 1);
        }
        return_node
    }
}

#[cfg(test)]
pub(crate) fn node_with_height<K>(key: K, left: Tree<K>, right: Tree<K>, height: usize) -> Tree<K> {
    Tree::Node(Box::new(Node {
        key,
        left,
        right,
        height,
    }))
}

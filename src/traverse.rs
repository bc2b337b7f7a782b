//! Lazy depth-first traversals. Each one borrows the tree and walks it with an explicit stack so
//! keys are produced one at a time. Asking the tree for a new traversal starts over from the root.

use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// When a node's key is produced relative to the keys of its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Produces keys in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

enum Step<'a, K> {
    /// Expand this node's subtree.
    Descend(&'a Node<K>),
    /// Produce this key.
    Visit(&'a K),
}

// Manual implementations so we don't require `K: Clone` just to copy references.
impl<K> Clone for Step<'_, K> {
    fn clone(&self) -> Self {
        match self {
            Self::Descend(n) => Self::Descend(*n),
            Self::Visit(k) => Self::Visit(*k),
        }
    }
}

/// An iterator over the keys of a [`Tree`] in some [`Order`].
pub struct Iter<'a, K> {
    order: Order,
    stack: Vec<Step<'a, K>>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>, order: Order) -> Self {
        let mut iter = Self {
            order,
            stack: Vec::with_capacity(tree.height() + 1),
        };
        iter.descend(tree);
        iter
    }

    /// The order this iterator walks the tree in.
    pub fn order(&self) -> Order {
        self.order
    }

    fn descend(&mut self, tree: &'a Tree<K>) {
        if let Some(n) = tree.root() {
            self.stack.push(Step::Descend(n));
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let n = match self.stack.pop()? {
                Step::Visit(key) => return Some(key),
                Step::Descend(n) => n,
            };

            // Steps are pushed in the reverse of the order they should run in.
            match self.order {
                Order::In => {
                    self.descend(n.right());
                    self.stack.push(Step::Visit(n.key()));
                    self.descend(n.left());
                }
                Order::Pre => {
                    self.descend(n.right());
                    self.descend(n.left());
                    return Some(n.key());
                }
                Order::Post => {
                    self.stack.push(Step::Visit(n.key()));
                    self.descend(n.right());
                    self.descend(n.left());
                }
            }
        }
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Tree<K> {
    /// Walks the tree in the given order.
    pub fn traverse(&self, order: Order) -> Iter<'_, K> {
        Iter::new(self, order)
    }

    /// Walks the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Iter<'_, K> {
        self.traverse(Order::In)
    }

    /// Walks the tree visiting each node before its subtrees.
    pub fn pre_order(&self) -> Iter<'_, K> {
        self.traverse(Order::Pre)
    }

    /// Walks the tree visiting each node after its subtrees.
    pub fn post_order(&self) -> Iter<'_, K> {
        self.traverse(Order::Post)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

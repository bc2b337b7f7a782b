//! This crate exposes an AVL tree: a Binary Search Tree that keeps itself balanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and has two children, each of which is either another `Node` or an
//! empty tree. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching for a key takes `O(height)` where `height` is the longest path
//! from the root `Node` down to an empty tree. Visiting the left subtree, then
//! the subtree root, then the right subtree yields the keys in sorted order.
//!
//! ## AVL
//!
//! An AVL tree additionally caches each `Node`'s height and requires that the
//! heights of every `Node`'s two subtrees differ by at most one. After each
//! insert or delete, every `Node` on the path back up to the root recomputes
//! its height and, if the difference has reached two, is rotated back into
//! balance. This bounds the height, and so every operation, to `O(lg N)`.
//!
//! ```
//! use avl::Tree;
//!
//! let tree: Tree<_> = (1..=7).collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
//! ```

#![deny(missing_docs)]

mod check;
mod render;
pub mod shell;
mod traverse;
mod tree;
mod util;

pub use check::InvariantViolation;
pub use render::{Graph, INDENT};
pub use traverse::{Iter, Order};
pub use tree::{Node, Tree};
pub use util::Outcome;

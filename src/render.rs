//! A sideways text picture of a tree for debugging. The right subtree is drawn above its parent and
//! the left subtree below, each level indented a further [`INDENT`] columns, so tilting your head
//! to the left shows the tree with its root at the top.

use std::fmt;

use crate::tree::Tree;

/// Columns of indentation added per level of depth.
pub const INDENT: usize = 5;

/// Displays a [`Tree`] as an indented diagram. Made with [`Tree::graph`].
pub struct Graph<'a, K> {
    tree: &'a Tree<K>,
}

impl<K: fmt::Display> fmt::Display for Graph<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self.tree, 0)
    }
}

fn write_subtree<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    tree: &Tree<K>,
    depth: usize,
) -> fmt::Result {
    if let Some(n) = tree.root() {
        write_subtree(f, n.right(), depth + 1)?;
        writeln!(f)?;
        writeln!(f, "{:indent$}{}", "", n.key(), indent = depth * INDENT)?;
        write_subtree(f, n.left(), depth + 1)?;
    }
    Ok(())
}

impl<K> Tree<K> {
    /// A [`Display`][fmt::Display]able diagram of this tree. Drawing it neither modifies nor
    /// checks the tree.
    pub fn graph(&self) -> Graph<'_, K> {
        Graph { tree: self }
    }

    /// Renders [`graph`][Tree::graph] into a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(2);
    ///
    /// assert_eq!(tree.render(), "\n     2\n\n1\n");
    /// ```
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.graph().to_string()
    }
}

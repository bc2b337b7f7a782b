/// What a mutating operation did to the tree. Neither variant is an error: inserting a duplicate
/// key or deleting a missing key simply leaves the tree as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A node was added or removed.
    Applied,
    /// The key was already present (insert) or absent (delete) so nothing changed.
    Unchanged,
}

impl Outcome {
    /// Whether the tree was modified.
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

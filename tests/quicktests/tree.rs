use avl::{Outcome, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both, and that the tree
/// stayed a valid AVL tree after every step.
fn do_ops<K>(ops: &[Op<K>], mut tree: Tree<K>, set: &mut BTreeSet<K>) -> Option<Tree<K>>
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                let (new_tree, outcome) = tree.insert_with_outcome(k.clone());
                tree = new_tree;
                if outcome.is_applied() != set.insert(k.clone()) {
                    return None;
                }
            }
            Op::Remove(k) => {
                let (new_tree, outcome) = tree.delete_with_outcome(k);
                tree = new_tree;
                if outcome.is_applied() != set.remove(k) {
                    return None;
                }
            }
            Op::Iter => {
                if !tree.in_order().eq(set.iter()) {
                    return None;
                }
            }
        }

        if tree.validate().is_err() {
            return None;
        }
    }

    Some(tree)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    match do_ops(&ops, Tree::new(), &mut set) {
        Some(tree) => set.iter().all(|key| tree.contains(key)) && tree.len() == set.len(),
        None => false,
    }
}

#[quickcheck]
fn sorted_after_inserts(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.into_iter().collect();

    tree.validate().is_ok() && tree.in_order().eq(expected.iter())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.clone();

    let (tree, outcome) = tree.insert_with_outcome(xs[pick % xs.len()]);

    outcome == Outcome::Unchanged && tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree = tree.delete(delete);
        if tree.validate().is_err() {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn delete_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before = tree.clone();

    tree.delete(&missing) == before
}

#[quickcheck]
fn traversals_agree_on_keys(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut pre: Vec<_> = tree.pre_order().collect();
    let mut post: Vec<_> = tree.post_order().collect();
    pre.sort();
    post.sort();
    let sorted: Vec<_> = tree.in_order().collect();

    pre == sorted
        && post == sorted
        && tree.pre_order().next() == tree.root().map(|n| n.key())
        && tree.post_order().last() == tree.root().map(|n| n.key())
}

#[quickcheck]
fn edit_moves_key(xs: Vec<i8>, old: i8, new: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected: BTreeSet<_> = xs.into_iter().collect();
    expected.remove(&old);
    expected.insert(new);

    let tree = tree.edit(&old, new);

    tree.validate().is_ok() && tree.in_order().eq(expected.iter())
}

use bstree::avl::{Node, Tree};
use bstree::node::BinaryNode;
use bstree::traverse::{Order, Traversal};

use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Checks the AVL invariant and the cached height at every node, returning
/// the recomputed height of the subtree.
fn check_subtree(node: &Node<i8>) -> Result<usize, String> {
    let left = node.left().map_or(Ok(0), check_subtree)?;
    let right = node.right().map_or(Ok(0), check_subtree)?;
    let expected = 1 + left.max(right);
    if node.height() != expected {
        return Err(format!("stale height at {}", node.value()));
    }
    if !node.is_balanced() {
        return Err(format!("unbalanced at {}", node.value()));
    }
    Ok(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    xs.iter()
        .all(|x| tree.find(x).map(|node| node.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

/// The headline invariant: after every single insertion, every node's
/// subtree heights differ by at most one and its cached height is correct.
#[quickcheck]
fn balanced_after_every_insert(xs: Vec<i8>) -> Result<(), String> {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
        if let Some(root) = tree.root() {
            check_subtree(root)?;
        }
    }
    Ok(())
}

/// Inserting a duplicate changes neither the size nor the shape.
#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let unique: BTreeSet<_> = xs.iter().copied().collect();
    let tree = build(&xs);

    let mut walked = Vec::new();
    tree.for_each(Traversal::DepthFirst(Order::In), |value, _, _| walked.push(*value));
    walked == unique.into_iter().collect::<Vec<_>>()
}

/// Re-inserting everything a second time is a no-op down to the rendering.
#[quickcheck]
fn reinsertion_preserves_shape(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = tree.to_string();
    for x in &xs {
        tree.insert(*x);
    }
    tree.to_string() == before
}

/// Every traversal visits every distinct inserted value exactly once.
#[quickcheck]
fn traversals_are_complete(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let unique: BTreeSet<_> = xs.into_iter().collect();
    let sorted: Vec<_> = unique.into_iter().collect();

    [
        Traversal::DepthFirst(Order::Pre),
        Traversal::DepthFirst(Order::In),
        Traversal::DepthFirst(Order::Post),
        Traversal::BreadthFirst,
    ]
    .iter()
    .all(|traversal| {
        let mut walked = tree.map(*traversal, |value, _, _| *value);
        walked.sort_unstable();
        walked == sorted
    })
}

/// An AVL tree over n distinct values stays within the theoretical height
/// bound of roughly 1.44 lg n.
#[quickcheck]
fn height_is_logarithmic(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let n = xs.into_iter().collect::<HashSet<_>>().len();
    // 1.4404 * lg(n + 2) - 0.3277, rounded up generously.
    let bound = (1.45 * ((n + 2) as f64).log2()).ceil() as usize;
    tree.height() <= bound
}

use bstree::node::BinaryNode;
use bstree::plain::{Node, Tree};
use bstree::traverse::{Order, Traversal};

use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Collects the values at each depth by a left-to-right walk, for checking
/// the breadth-first traversal against.
fn values_by_level(node: &Node<i8>, depth: usize, levels: &mut Vec<Vec<i8>>) {
    if levels.len() <= depth {
        levels.push(Vec::new());
    }
    levels[depth].push(*node.value());
    if let Some(left) = node.left() {
        values_by_level(left, depth + 1, levels);
    }
    if let Some(right) = node.right() {
        values_by_level(right, depth + 1, levels);
    }
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

/// The ordering invariant: an in-order walk of an ordering-inserted tree
/// yields the inserted values in sorted order, duplicates included.
#[quickcheck]
fn in_order_traversal_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let walked = tree.map(Traversal::DepthFirst(Order::In), |value, _, _| *value);

    let mut sorted = xs;
    sorted.sort_unstable();
    walked == sorted
}

/// Every traversal visits every inserted value exactly once.
#[quickcheck]
fn traversals_are_complete(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

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

/// The callback index counts up from 0 in every traversal.
#[quickcheck]
fn callback_indices_are_sequential(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    [
        Traversal::DepthFirst(Order::Pre),
        Traversal::DepthFirst(Order::In),
        Traversal::DepthFirst(Order::Post),
        Traversal::BreadthFirst,
    ]
    .iter()
    .all(|traversal| {
        let indices = tree.map(*traversal, |_, index, _| index);
        indices == (0..xs.len()).collect::<Vec<_>>()
    })
}

/// Breadth-first visits nodes in non-decreasing depth, left-to-right within
/// a level.
#[quickcheck]
fn breadth_first_groups_by_level(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let walked = tree.map(Traversal::BreadthFirst, |value, _, _| *value);

    let mut levels = Vec::new();
    if let Some(root) = tree.root() {
        values_by_level(root, 0, &mut levels);
    }
    walked == levels.concat()
}

/// Height really is the longest root-to-leaf path, at every node.
#[quickcheck]
fn height_matches_definition(xs: Vec<i8>) -> bool {
    fn check(node: &Node<i8>) -> Option<usize> {
        let left = node.left().map_or(Some(0), check)?;
        let right = node.right().map_or(Some(0), check)?;
        let expected = 1 + left.max(right);
        if node.height() == expected {
            Some(expected)
        } else {
            None
        }
    }

    let tree = build(&xs);
    match tree.root() {
        Some(root) => check(root) == Some(tree.height()),
        None => tree.height() == 0,
    }
}

//! Depth-first and breadth-first traversal over any [`BinaryNode`].
//!
//! Every visited node is handed to the callback as
//! `(value, sequential index starting at 0, node)`. [`Traverse::map`]
//! collects the callback results in visitation order; [`Traverse::for_each`]
//! discards them.
//!
//! # Examples
//!
//! ```
//! use bstree::plain::{Node, Side};
//! use bstree::traverse::{Order, Traversal, Traverse};
//!
//! let mut root = Node::new(1);
//! root.insert_at(Side::Left, 2);
//! root.insert_at(Side::Right, 3);
//!
//! let in_order = root.map(Traversal::DepthFirst(Order::In), |value, _, _| *value);
//! assert_eq!(in_order, vec![2, 1, 3]);
//!
//! let by_level = root.map(Traversal::BreadthFirst, |value, _, _| *value);
//! assert_eq!(by_level, vec![1, 2, 3]);
//! ```

use crate::node::BinaryNode;

/// When a depth-first traversal visits a node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Current node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then current node, then right subtree. On a sorted
    /// tree this yields values in non-decreasing order.
    In,
    /// Left subtree, then right subtree, then current node.
    Post,
}

/// How a traversal walks the tree.
///
/// The visit order only applies to the depth-first strategy, so it lives
/// inside that variant; breadth-first always goes level by level, root
/// first, left-to-right within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Recursive descent, visiting each node per the given [`Order`].
    DepthFirst(Order),
    /// Level-synchronized descent: for each level from 0 to `height - 1`,
    /// walk down from the root to the nodes at that depth. This trades the
    /// queue of the textbook algorithm for `O(n * height)` revisits.
    BreadthFirst,
}

impl Default for Traversal {
    fn default() -> Self {
        Traversal::DepthFirst(Order::Pre)
    }
}

/// Traversal over any [`BinaryNode`], blanket-implemented for all of them.
pub trait Traverse: BinaryNode {
    /// Calls `f` on every node in the subtree rooted at this node, in the
    /// order given by `traversal`.
    fn for_each<F>(&self, traversal: Traversal, mut f: F)
    where
        F: FnMut(&Self::Value, usize, &Self),
    {
        self.map(traversal, |value, index, node| f(value, index, node));
    }

    /// Calls `f` on every node in the subtree rooted at this node and
    /// collects the results in visitation order.
    fn map<R, F>(&self, traversal: Traversal, mut f: F) -> Vec<R>
    where
        F: FnMut(&Self::Value, usize, &Self) -> R,
    {
        let mut results = Vec::new();
        match traversal {
            Traversal::DepthFirst(order) => {
                depth_first(self, order, 0, &mut f, &mut results);
            }
            Traversal::BreadthFirst => {
                let mut index = 0;
                for level in 0..self.height() {
                    index = visit_level(self, level, index, &mut f, &mut results);
                }
            }
        }
        results
    }
}

impl<N: BinaryNode> Traverse for N {}

/// Recursive depth-first walk. Returns the index following the last visit so
/// sibling subtrees can continue the sequence.
fn depth_first<N, R, F>(node: &N, order: Order, index: usize, f: &mut F, results: &mut Vec<R>) -> usize
where
    N: BinaryNode,
    F: FnMut(&N::Value, usize, &N) -> R,
{
    let mut index = index;
    if order == Order::Pre {
        results.push(f(node.value(), index, node));
        index += 1;
    }
    if let Some(left) = node.left() {
        index = depth_first(left, order, index, f, results);
    }
    if order == Order::In {
        results.push(f(node.value(), index, node));
        index += 1;
    }
    if let Some(right) = node.right() {
        index = depth_first(right, order, index, f, results);
    }
    if order == Order::Post {
        results.push(f(node.value(), index, node));
        index += 1;
    }
    index
}

/// Visits the nodes `level` edges below `node`, left-to-right. Returns the
/// index following the last visit.
fn visit_level<N, R, F>(node: &N, level: usize, index: usize, f: &mut F, results: &mut Vec<R>) -> usize
where
    N: BinaryNode,
    F: FnMut(&N::Value, usize, &N) -> R,
{
    if level == 0 {
        results.push(f(node.value(), index, node));
        return index + 1;
    }
    let mut index = index;
    if let Some(left) = node.left() {
        index = visit_level(left, level - 1, index, f, results);
    }
    if let Some(right) = node.right() {
        index = visit_level(right, level - 1, index, f, results);
    }
    index
}

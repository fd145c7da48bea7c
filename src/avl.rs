//! A self-balancing binary search tree (an AVL tree). After every insertion
//! the tree restores the invariant that each node's subtree heights differ
//! by at most one, using at most two rotations, so lookups stay `O(lg N)`
//! regardless of insertion order.
//!
//! Inserting a value that is already present is a silent no-op; the tree
//! holds no duplicates.
//!
//! # Examples
//!
//! ```
//! use bstree::avl::Tree;
//! use bstree::node::BinaryNode;
//!
//! let mut tree = Tree::new();
//! for value in [10, 20, 30, 40, 50, 25].iter() {
//!     tree.insert(*value);
//! }
//!
//! // Ascending-ish input, yet the tree stays shallow.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.balance(), 0);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find(&25).map(|node| *node.value()), Some(25));
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use crate::node::{BalanceType, BinaryNode};
use crate::traverse::{Traversal, Traverse};

/// A node in an AVL tree.
///
/// The height of the subtree rooted at a node is cached and recomputed
/// lazily: reassigning a child marks the cache stale, and the next height
/// read recomputes it from the children. All child reassignment goes through
/// the `set_`/`take_` mutators so the invalidation cannot be bypassed. This
/// amortizes the repeated height queries made during a single insertion's
/// bottom-up rebalancing walk.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
    height: Cell<usize>,
    needs_update: Cell<bool>,
}

impl<T> Node<T> {
    /// Creates a childless node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: Cell::new(1),
            needs_update: Cell::new(false),
        }
    }

    fn set_left(&mut self, child: Option<Box<Node<T>>>) {
        self.left = child;
        self.needs_update.set(true);
    }

    fn set_right(&mut self, child: Option<Box<Node<T>>>) {
        self.right = child;
        self.needs_update.set(true);
    }

    fn take_left(&mut self) -> Option<Box<Node<T>>> {
        self.needs_update.set(true);
        self.left.take()
    }

    fn take_right(&mut self) -> Option<Box<Node<T>>> {
        self.needs_update.set(true);
        self.right.take()
    }

    /// Inserts `value` into the subtree rooted at `node` and returns the
    /// subtree's new root, which may differ from `node` when rebalancing
    /// rotates it. An absent `node` yields a singleton; a `value` already
    /// present leaves the subtree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::avl::Node;
    /// use bstree::node::BinaryNode;
    ///
    /// let root = Node::insert(1, None);
    /// let root = Node::insert(2, Some(root));
    /// // The right-right case: one left rotation promotes 2.
    /// let root = Node::insert(3, Some(root));
    ///
    /// assert_eq!(*root.value(), 2);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.value()), Some(3));
    /// ```
    pub fn insert(value: T, node: Option<Box<Node<T>>>) -> Box<Node<T>>
    where
        T: Ord,
    {
        let mut node = match node {
            None => return Box::new(Node::new(value)),
            Some(node) => node,
        };
        match value.cmp(&node.value) {
            // Duplicate values are not allowed.
            Ordering::Equal => node,
            Ordering::Less => {
                let left = node.take_left();
                node.set_left(Some(Node::insert(value, left)));
                Node::rebalance(node)
            }
            Ordering::Greater => {
                let right = node.take_right();
                node.set_right(Some(Node::insert(value, right)));
                Node::rebalance(node)
            }
        }
    }

    /// Restores the AVL invariant at `node` after an insertion one level
    /// below, returning the subtree's new root.
    ///
    /// When a side is too heavy, the taller child's own lean picks between
    /// the single- and double-rotation case: a child leaning the same way as
    /// the parent takes one rotation, a child leaning the opposite way is
    /// first rotated into line.
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.balance_type() {
            BalanceType::Left => {
                // Left-Right case: the insertion landed in the left child's
                // right subtree.
                if node.left().map_or(false, |left| left.balance() < 0) {
                    if let Some(left) = node.take_left() {
                        node.set_left(Some(Node::rotate_left(left)));
                    }
                }
                Node::rotate_right(node)
            }
            BalanceType::Right => {
                // Right-Left case, mirrored.
                if node.right().map_or(false, |right| right.balance() > 0) {
                    if let Some(right) = node.take_right() {
                        node.set_right(Some(Node::rotate_right(right)));
                    }
                }
                Node::rotate_left(node)
            }
            BalanceType::Even => node,
        }
    }

    /// Promotes `node`'s right child to be the subtree root: the promoted
    /// node's former left child becomes `node`'s new right child, and `node`
    /// becomes the promoted node's left child. Returns `node` unchanged if
    /// it has no right child. The in-order value sequence is preserved.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.take_right() {
            None => node,
            Some(mut promoted) => {
                let transferred = promoted.take_left();
                node.set_right(transferred);
                promoted.set_left(Some(node));
                promoted
            }
        }
    }

    /// The mirror image of [`rotate_left`][Node::rotate_left], promoting the
    /// left child.
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.take_left() {
            None => node,
            Some(mut promoted) => {
                let transferred = promoted.take_right();
                node.set_left(transferred);
                promoted.set_right(Some(node));
                promoted
            }
        }
    }
}

impl<T> BinaryNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The cached height, recomputed from the children only when a child
    /// slot has been reassigned since the last read.
    fn height(&self) -> usize {
        if self.needs_update.get() {
            let left = self.left().map_or(0, Self::height);
            let right = self.right().map_or(0, Self::height);
            self.height.set(1 + left.max(right));
            self.needs_update.set(false);
        }
        self.height.get()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    /// Renders as `(<left> < value > <right>)` with `nil` for absent
    /// children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.left {
            Some(left) => write!(f, "({} < {} > ", left, self.value)?,
            None => write!(f, "(nil < {} > ", self.value)?,
        }
        match &self.right {
            Some(right) => write!(f, "{})", right),
            None => write!(f, "nil)"),
        }
    }
}

/// A handle owning an optional root [`Node`]. Inserting replaces the root
/// with whatever subtree root the balanced insert returns, so the root's
/// identity may change on any insertion.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// This tree's root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `value`, rebalancing as needed, and returns the tree's
    /// (possibly new) root. Inserting a value already present leaves the
    /// tree unchanged.
    pub fn insert(&mut self, value: T) -> &mut Node<T>
    where
        T: Ord,
    {
        let root = Node::insert(value, self.root.take());
        self.root.get_or_insert(root)
    }

    /// Potentially finds the node holding `value`. See
    /// [`BinaryNode::find`] for the descent policy.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|root| root.find(value))
    }

    /// The height of this tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, BinaryNode::height)
    }

    /// The root's balance factor; 0 when empty.
    pub fn balance(&self) -> isize {
        self.root.as_deref().map_or(0, BinaryNode::balance)
    }

    /// Whether the root satisfies the AVL invariant; `true` when empty.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().map_or(true, BinaryNode::is_balanced)
    }

    /// Classification of the root's balance factor; `Even` when empty.
    pub fn balance_type(&self) -> BalanceType {
        self.root
            .as_deref()
            .map_or(BalanceType::Even, BinaryNode::balance_type)
    }

    /// Calls `f` on every node, in the order given by `traversal`. Does
    /// nothing when the tree is empty.
    pub fn for_each<F>(&self, traversal: Traversal, f: F)
    where
        F: FnMut(&T, usize, &Node<T>),
    {
        if let Some(root) = self.root.as_deref() {
            root.for_each(traversal, f);
        }
    }

    /// Calls `f` on every node and collects the results in visitation
    /// order. Empty when the tree is.
    pub fn map<R, F>(&self, traversal: Traversal, f: F) -> Vec<R>
    where
        F: FnMut(&T, usize, &Node<T>) -> R,
    {
        self.root
            .as_deref()
            .map(|root| root.map(traversal, f))
            .unwrap_or_default()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.fmt(f),
            None => write!(f, "nil"),
        }
    }
}

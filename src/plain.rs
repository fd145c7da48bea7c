//! An unbalanced binary search tree. Ordering inserts descend by comparison
//! (strictly-greater values go right, everything else goes left), and the
//! tree keeps whatever shape that produces; there is no rebalancing.
//!
//! Nodes can also be placed on an explicit side with [`Node::insert_at`],
//! bypassing ordering entirely. That is a low-level operation for building
//! trees of an exact shape; it can produce a tree that is not a valid search
//! tree, and [`find`][crate::node::BinaryNode::find] stays correct on such
//! trees by falling back to the other side during descent.
//!
//! # Examples
//!
//! ```
//! use bstree::node::BinaryNode;
//! use bstree::plain::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.find(&1).map(|node| *node.value()), Some(1));
//! assert_eq!(tree.height(), 2);
//! ```

use std::fmt;

use crate::node::{BalanceType, BinaryNode};
use crate::traverse::{Traversal, Traverse};

/// Which child slot an explicit placement targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// A node in an unbalanced binary search tree. It owns its children and is
/// usable as the root of a whole tree; [`Tree`] is a thin handle over an
/// optional root.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a childless node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Inserts `value` into the subtree rooted at this node, descending by
    /// comparison until a free slot is found: strictly-greater values go
    /// right, everything else (including equal values) goes left. Returns
    /// the newly created node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::node::BinaryNode;
    /// use bstree::plain::Node;
    ///
    /// let mut root = Node::new(10);
    /// for value in [7, 8, 9, 1, 5].iter() {
    ///     root.insert(*value);
    /// }
    ///
    /// assert_eq!(root.find(&9).map(|node| *node.value()), Some(9));
    /// assert!(root.find(&99).is_none());
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Node<T>
    where
        T: Ord,
    {
        let slot = if value > self.value {
            &mut self.right
        } else {
            &mut self.left
        };
        match slot {
            Some(child) => child.insert(value),
            empty @ None => empty.get_or_insert_with(|| Box::new(Node::new(value))),
        }
    }

    /// Places a new node holding `value` directly as this node's `side`
    /// child, replacing (and dropping) any existing child there. No ordering
    /// check is performed; the resulting tree may not be a valid search
    /// tree. Returns the newly created node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::node::BinaryNode;
    /// use bstree::plain::{Node, Side};
    ///
    /// let mut root = Node::new(1);
    /// // 2 goes left even though ordering would send it right.
    /// root.insert_at(Side::Left, 2);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(2));
    ///
    /// // The fallback walk still finds it.
    /// assert_eq!(root.find(&2).map(|node| *node.value()), Some(2));
    /// ```
    pub fn insert_at(&mut self, side: Side, value: T) -> &mut Node<T> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        slot.insert(Box::new(Node::new(value)))
    }

    /// Mutable access to the left child, for shaping fixtures built with
    /// [`insert_at`][Node::insert_at].
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
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
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    /// Renders as `(<left> < value > <right>)` with `nil` for absent
    /// children, e.g. `((nil < 1 > nil) < 2 > nil)`.
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

/// A handle owning an optional root [`Node`]. All queries forward to the
/// root, answering for the empty tree where there is none.
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

    /// Creates a `Tree` owning the given root node.
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// This tree's root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node, if any.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Inserts `value` by ordering descent, creating the root if the tree is
    /// empty. Returns the newly created node.
    pub fn insert(&mut self, value: T) -> &mut Node<T>
    where
        T: Ord,
    {
        match &mut self.root {
            Some(root) => root.insert(value),
            empty @ None => empty.get_or_insert_with(|| Box::new(Node::new(value))),
        }
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

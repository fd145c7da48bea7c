//! The capability shared by both tree variants: access to a node's value and
//! children, and everything derivable from those: height, balance factor,
//! and ordered search.

use std::cmp::Ordering;

/// Classification of a node's balance factor against the AVL threshold.
///
/// `Left` and `Right` mean the node is heavier on that side than the AVL
/// invariant allows (`|balance| > 1`); anything within the threshold is
/// `Even`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceType {
    /// The left subtree is more than one level taller than the right.
    Left,
    /// The subtree heights differ by at most one.
    Even,
    /// The right subtree is more than one level taller than the left.
    Right,
}

/// A node in a binary tree: a value plus optional left and right children,
/// each exclusively owned by their parent.
///
/// Everything here besides the three accessors is a provided method, so a
/// tree variant only has to wire up `value`, `left`, and `right` to get
/// height, balance, and search. A variant that caches heights (like
/// [`avl::Node`][crate::avl::Node]) overrides [`height`][BinaryNode::height];
/// the other derived methods then pick up the cached version automatically.
pub trait BinaryNode: Sized {
    /// The value stored in each node.
    type Value;

    /// The value stored in this node.
    fn value(&self) -> &Self::Value;

    /// This node's left child, if any.
    fn left(&self) -> Option<&Self>;

    /// This node's right child, if any.
    fn right(&self) -> Option<&Self>;

    /// How many levels are in the subtree rooted at this node. A node with
    /// no children has a height of 1.
    ///
    /// The default recomputes by full recursive descent on every call.
    fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        1 + left.max(right)
    }

    /// The balance factor: left subtree height minus right subtree height.
    fn balance(&self) -> isize {
        let left = self.left().map_or(0, Self::height) as isize;
        let right = self.right().map_or(0, Self::height) as isize;
        left - right
    }

    /// Whether this node satisfies the AVL invariant, i.e. its subtree
    /// heights differ by at most one.
    fn is_balanced(&self) -> bool {
        self.balance().abs() <= 1
    }

    /// Classifies [`balance`][BinaryNode::balance] against the AVL threshold.
    fn balance_type(&self) -> BalanceType {
        let balance = self.balance();
        if balance > 1 {
            BalanceType::Left
        } else if balance < -1 {
            BalanceType::Right
        } else {
            BalanceType::Even
        }
    }

    /// Potentially finds the node holding the given value in this subtree.
    ///
    /// The descent tries the side ordering points at first. If that side
    /// comes up empty it retries the other side before giving up: a tree
    /// built with explicit-side placement need not be a valid search tree,
    /// and the fallback keeps `find` correct on such trees at the cost of a
    /// linear walk. On a properly sorted tree the first probe always
    /// suffices and the search stays `O(height)`.
    fn find(&self, value: &Self::Value) -> Option<&Self>
    where
        Self::Value: Ord,
    {
        let (first, fallback) = match value.cmp(self.value()) {
            Ordering::Equal => return Some(self),
            Ordering::Greater => (self.right(), self.left()),
            Ordering::Less => (self.left(), self.right()),
        };
        first
            .and_then(|child| child.find(value))
            .or_else(|| fallback.and_then(|child| child.find(value)))
    }
}

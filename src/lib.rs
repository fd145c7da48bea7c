//! This crate exposes a pair of Binary Search Trees (BSTs), a plain
//! unbalanced tree and a self-balancing AVL tree, together with a
//! traversal engine that works over either one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value not greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## The two variants
//!
//! The [`plain`] tree keeps whatever shape insertion order gives it. It also
//! allows placing a child directly on a chosen side, bypassing ordering
//! entirely, which is useful for building fixtures of an exact shape. Its
//! `find` stays correct on such trees by falling back to the other side when
//! the ordering-indicated side comes up empty.
//!
//! The [`avl`] tree restores the AVL height invariant (every node's
//! subtree heights differ by at most one) after every insertion using
//! rotations, keeping `find` at `O(lg N)` regardless of insertion order.
//!
//! Both node types implement [`node::BinaryNode`], and through it pick up the
//! depth-first and breadth-first traversals in [`traverse`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod node;
pub mod plain;
pub mod traverse;

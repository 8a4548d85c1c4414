//! This crate exposes a plain, unbalanced Binary Search Tree (BST) of unique values
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants searching for a value takes `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`). This tree
//! makes no attempt to limit its height, so inserting already-sorted values makes
//! every operation `O(N)`. BSTs also naturally support sorted traversal by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Errors
//!
//! Values are unique. Inserting a value that is already present fails with
//! [`Error::DuplicateValue`] and deleting a value that is absent fails with
//! [`Error::NotFound`]. In both cases the tree is left untouched.
//!
//! ## Logging
//!
//! Mutating operations emit [`tracing`] spans and events. No subscriber is installed
//! by this crate.

#![deny(missing_docs)]

pub mod error;
pub mod node;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::{Order, Tree, SEPARATOR};

//! A plain, unbalanced Binary Search Tree that owns its values and rejects duplicates.
//!
//! Nothing is done to keep the tree balanced so its shape depends entirely on insertion order.
//! Inserting values in sorted order produces a tree that is effectively a linked list.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Error, Tree};
//!
//! let mut tree = Tree::from_values([6, 2, 1, 4, 3, 5, 7, 9, 8]).unwrap();
//!
//! assert!(tree.search(&4));
//! assert_eq!(tree.in_order(), "1, 2, 3, 4, 5, 6, 7, 8, 9");
//!
//! // Values are unique.
//! assert_eq!(tree.insert(4), Err(Error::DuplicateValue));
//!
//! tree.delete(&4).unwrap();
//! assert!(!tree.search(&4));
//! assert_eq!(tree.delete(&4), Err(Error::NotFound));
//! ```

use std::fmt;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::node::{Link, Node};

/// Placed between consecutive values when a tree is rendered by [`Tree::traverse`].
pub const SEPARATOR: &str = ", ";

/// The depth-first orders a [`Tree`] can be rendered in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Each node before its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Values come out sorted.
    InOrder,
    /// Both subtrees before the node itself.
    PostOrder,
}

/// An unbalanced Binary Search Tree of unique values.
#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(self.root()),
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping `root` directly recurses once per level, which can blow the stack for tall trees.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` containing only `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::with_root(0);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(0));
    /// ```
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
        }
    }

    /// Builds a tree by inserting each of `values` in iteration order. Fails with
    /// [`Error::DuplicateValue`][crate::Error::DuplicateValue] as soon as any value repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let tree = Tree::from_values([50, 60, 40]).unwrap();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &50);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(40));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(60));
    ///
    /// assert_eq!(Tree::from_values([1, 2, 1]).unwrap_err(), Error::DuplicateValue);
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }

        Ok(tree)
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `value` into the tree. If the tree already holds an equal value nothing changes
    /// and [`Error::DuplicateValue`][crate::Error::DuplicateValue] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        let result = Node::insert(&mut self.root, value);
        if result.is_err() {
            debug!("rejected duplicate value");
        }

        result
    }

    /// Deletes the value equal to `value` from the tree. If there is no such value nothing
    /// changes and [`Error::NotFound`][crate::Error::NotFound] is returned.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest value of its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::from_values([5, 3, 2, 4, 7, 6, 8]).unwrap();
    ///
    /// tree.delete(&5).unwrap();
    /// assert_eq!(tree.pre_order(), "6, 3, 2, 4, 7, 8");
    ///
    /// assert_eq!(tree.delete(&5), Err(Error::NotFound));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, value: &T) -> Result<()>
    where
        T: Ord,
    {
        let result = Node::delete(&mut self.root, value);
        if result.is_err() {
            debug!("value to delete was not found");
        }

        result
    }

    /// Returns `true` if some value in the tree is equal to `value`.
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        Node::contains(&self.root, value)
    }

    /// Renders every value in the tree, in the given order, separated by [`SEPARATOR`]. An empty
    /// tree renders as an empty string.
    pub fn traverse(&self, order: Order) -> String
    where
        T: fmt::Display,
    {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.visit(order, &mut values);
        }

        // Empty renderings are skipped so no separators are doubled up.
        values
            .into_iter()
            .map(ToString::to_string)
            .filter(|rendered| !rendered.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::PreOrder`].
    pub fn pre_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.traverse(Order::PreOrder)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::InOrder`].
    pub fn in_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.traverse(Order::InOrder)
    }

    /// Shorthand for [`Tree::traverse`] with [`Order::PostOrder`].
    pub fn post_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.traverse(Order::PostOrder)
    }
}

//! The building block of a [`Tree`][crate::Tree]. A `Node` owns its value and, exclusively, both
//! of its children, so every subtree has exactly one owner and moving a subtree around is just
//! moving a `Box`.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::Order;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Work left to do while walking a subtree with an explicit stack.
enum Step<'a, T> {
    /// Schedule this node's value and both of its subtrees.
    Expand(&'a Node<T>),
    /// The value is next in the requested order.
    Emit(&'a T),
}

/// A single value in a [`Tree`][crate::Tree] along with up to two child nodes.
///
/// Every value in the left subtree compares less than `value` and every value in the right
/// subtree compares greater than `value`.
// TODO stack based Debug
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: Self::clone_subtree(self.left()),
            right: Self::clone_subtree(self.right()),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Walks down from `link` to the empty slot where `value` belongs and places a new node there.
    pub(crate) fn insert(mut link: &mut Link<T>, value: T) -> Result<()>
    where
        T: Ord,
    {
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(Error::DuplicateValue),
            };
        }

        *link = Some(Self::new_boxed(value));
        Ok(())
    }

    pub(crate) fn contains(link: &Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = link.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes the node holding `value` from the subtree owned by `link`, rewiring `link` (which
    /// is the parent's child slot, or the tree's root) to whatever replaces it.
    pub(crate) fn delete(mut link: &mut Link<T>, value: &T) -> Result<()>
    where
        T: Ord,
    {
        loop {
            let ordering = match link.as_ref() {
                Some(node) => value.cmp(&node.value),
                None => return Err(Error::NotFound),
            };
            // The slot must not be borrowed mutably on the iteration that finds the value.
            if ordering == Ordering::Equal {
                break;
            }

            let node = link.as_mut().ok_or(Error::NotFound)?;
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = link.take().and_then(Self::unlink);
        Ok(())
    }

    /// Consumes this node and returns the subtree that takes its place.
    fn unlink(self: Box<Self>) -> Link<T> {
        let Node { left, right, .. } = *self;
        match (left, right) {
            (None, None) => {
                debug!(case = "leaf", "deleting node");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!(case = "one_child", "deleting node");
                Some(child)
            }
            // Promote the in-order successor: the smallest node of the right subtree.
            (Some(left), Some(right)) => {
                debug!(case = "two_children", "deleting node");
                let mut remaining_right = Some(right);
                let Some(mut successor) = Self::take_min(&mut remaining_right) else {
                    return Some(left);
                };
                successor.left = Some(left);
                successor.right = remaining_right;
                Some(successor)
            }
        }
    }

    /// Detaches the leftmost node of the subtree in `link` and returns it with no children. The
    /// minimum's own right subtree takes its old slot so nothing is lost.
    fn take_min(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Deep copies a subtree. Children are copied before their parents so the walk needs no
    /// recursion.
    pub(crate) fn clone_subtree(root: Option<&Self>) -> Link<T>
    where
        T: Clone,
    {
        let mut pending = vec![(root, false)];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            match (node, children_built) {
                (None, _) => built.push(None),
                (Some(node), false) => {
                    pending.push((Some(node), true));
                    pending.push((node.right(), false));
                    pending.push((node.left(), false));
                }
                (Some(node), true) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Self {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        built.pop().flatten()
    }

    /// Pushes references to this subtree's values onto `out` in the given order.
    pub(crate) fn visit<'a>(&'a self, order: Order, out: &mut Vec<&'a T>) {
        let mut pending = vec![Step::Expand(self)];
        while let Some(step) = pending.pop() {
            let node = match step {
                Step::Emit(value) => {
                    out.push(value);
                    continue;
                }
                Step::Expand(node) => node,
            };

            let left = node.left().map(Step::Expand);
            let right = node.right().map(Step::Expand);
            let emit = Some(Step::Emit(&node.value));
            // Pushed in reverse so they pop off in `order`.
            let steps = match order {
                Order::PreOrder => [right, left, emit],
                Order::InOrder => [right, emit, left],
                Order::PostOrder => [emit, right, left],
            };
            pending.extend(steps.into_iter().flatten());
        }
    }
}

//! Errors returned by the mutating [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a tree operation can be rejected. A rejected operation never modifies the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value being inserted is already stored in the tree.
    #[error("cannot insert value: it already exists in the tree")]
    DuplicateValue,

    /// The value being deleted is not stored in the tree.
    #[error("cannot delete value: it was not found in the tree")]
    NotFound,
}

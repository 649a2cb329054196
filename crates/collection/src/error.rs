//! Errors raised by collection operations
//!
//! Every failure is synchronous and aborts only the triggering call. The
//! collection keeps whatever state it had reached when the error occurred.

use crate::foundation::{ItemKind, ValidationError};
use crate::key::Key;

/// Failure of a keyed access, an insertion, or a grouping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// `get`, `remove` or `take` on a key the collection does not hold.
    #[error("Element with key {key} was not found in collection")]
    KeyNotFound {
        /// The key that was looked up.
        key: Key,
    },

    /// `add` could not pick a fresh index: the counter is exhausted and
    /// the next index already holds an item.
    #[error("Cannot add element to the collection, next index {key} is already occupied")]
    IndexOccupied {
        /// The occupied index.
        key: Key,
    },

    /// The bound validator rejected an item on an insertion path.
    #[error("Invalid item provided to collection: {0}")]
    InvalidItem(#[from] ValidationError),

    /// A grouping callback returned something other than an int, float or string.
    #[error("Group callback must return an int, string or float, got {found}")]
    InvalidGroupKey {
        /// The kind of value the callback returned.
        found: ItemKind,
    },
}

impl CollectionError {
    /// Creates a `KeyNotFound` error.
    pub fn key_not_found(key: impl Into<Key>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Returns the underlying validation error of an `InvalidItem`.
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidItem(error) => Some(error),
            _ => None,
        }
    }
}

/// Failure of [`Collection::match_one`](crate::Collection::match_one).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError<T> {
    /// The predicate selected nothing.
    #[error("Unable to match an item based on provided predicate")]
    NoMatch,

    /// The predicate selected more than one item.
    #[error("Matched {} items based on provided predicate, expected exactly one", .matched.len())]
    Ambiguous {
        /// Every matched item, in iteration order.
        matched: Vec<T>,
    },
}

impl<T> MatchError<T> {
    /// The full matched set of an `Ambiguous` error; empty for `NoMatch`.
    #[must_use]
    pub fn matched_items(&self) -> &[T] {
        match self {
            Self::NoMatch => &[],
            Self::Ambiguous { matched } => matched,
        }
    }

    /// Consumes the error, returning the matched set.
    #[must_use]
    pub fn into_matched_items(self) -> Vec<T> {
        match self {
            Self::NoMatch => Vec::new(),
            Self::Ambiguous { matched } => matched,
        }
    }
}

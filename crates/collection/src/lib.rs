//! # nebula-collection
//!
//! Validated, ordered, keyed collections for the Nebula workflow engine.
//!
//! A [`Collection`] binds one item validator at construction and checks every
//! item on the way in. On top of the keyed store it offers functional
//! transforms (`map`, `reduce`, `filter`, `match_one`, `split`), set algebra
//! (`intersect`, `diff`, `unique`), grouping and ordering/pagination.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_collection::prelude::*;
//! use serde_json::json;
//!
//! let mut names = StringCollection::from_items(string_item(), [json!("b"), json!("a")])?;
//! names.add(json!("c"))?;
//! assert!(names.add(json!(1)).is_err());
//!
//! names.sort();
//! assert_eq!(names.implode(","), "a,b,c");
//! # Ok::<(), CollectionError>(())
//! ```
//!
//! ## Item validators
//!
//! - [`ContainerItem`](validators::ContainerItem): lists and maps
//! - [`ObjectItem`](validators::ObjectItem): shared objects, optionally of one class
//! - [`StringItem`](validators::StringItem): strings, optionally null
//! - [`AnyItem`](validators::AnyItem), [`Predicate`](validators::Predicate): open-ended
//!
//! ## Thread safety
//!
//! Collections carry no internal locking. Share one across threads behind a
//! lock of your own; `ObjectRef` items are `Send + Sync` and stay shared
//! between every collection that holds them.

pub mod collection;
pub mod error;
pub mod foundation;
pub mod key;
pub mod object;
pub mod prelude;
pub mod validators;

use std::any::Any;

use serde_json::Value;

pub use collection::Collection;
pub use collection::group::{Groups, SameValidator};
pub use error::{CollectionError, MatchError};
pub use key::{IntoGroupKey, Key};
pub use object::ObjectRef;

use foundation::ItemShape;
use validators::{ContainerItem, ObjectItem, StringItem, instance_of};

/// A collection of JSON arrays and objects.
pub type ArrayCollection = Collection<Value, ContainerItem<Value>>;

/// A collection of JSON strings.
pub type StringCollection = Collection<Value, StringItem<Value>>;

/// A collection of shared objects.
pub type ObjectCollection = Collection<ObjectRef, ObjectItem<ObjectRef>>;

impl<T: ItemShape> Collection<T, ObjectItem<T>> {
    /// Creates an empty collection accepting only instances of `C`.
    ///
    /// ```rust
    /// use nebula_collection::{ObjectCollection, ObjectRef};
    ///
    /// struct Foo;
    /// struct Bar;
    ///
    /// let mut foos = ObjectCollection::of::<Foo>();
    /// assert!(foos.add(ObjectRef::new(Foo)).is_ok());
    /// assert!(foos.add(ObjectRef::new(Bar)).is_err());
    /// ```
    #[must_use]
    pub fn of<C: Any>() -> Self {
        Self::new(instance_of::<C, T>())
    }
}

//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_collection::prelude::*;
//! ```

pub use crate::foundation::{
    Class, ItemKind, ItemShape, Truthy, Validate, ValidateExt, ValidationError,
};

pub use crate::validators::{
    AnyItem, ContainerItem, ObjectItem, Predicate, StringItem, any_item, container_item,
    instance_of, nullable_string_item, object_item, predicate, string_item,
};

pub use crate::{
    ArrayCollection, Collection, CollectionError, Groups, IntoGroupKey, Key, MatchError,
    ObjectCollection, ObjectRef, StringCollection,
};

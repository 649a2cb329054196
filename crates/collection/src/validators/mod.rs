//! Built-in item validators
//!
//! Each strategy is generic over the item type and inspects items through
//! [`ItemShape`](crate::foundation::ItemShape), so it works for
//! `serde_json::Value`, plain Rust values and [`ObjectRef`](crate::ObjectRef)
//! alike.
//!
//! - **Container**: [`ContainerItem`] accepts lists and maps
//! - **Object**: [`ObjectItem`] accepts objects, optionally of one class
//! - **String**: [`StringItem`] accepts strings, optionally null
//! - **Open**: [`AnyItem`] accepts everything, [`Predicate`] wraps a closure

pub mod any;
pub mod container;
pub mod object;
pub mod string;

pub use any::{AnyItem, Predicate, any_item, predicate};
pub use container::{ContainerItem, container_item};
pub use object::{ObjectItem, instance_of, object_item};
pub use string::{StringItem, nullable_string_item, string_item};

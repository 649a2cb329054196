//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`ItemShape`], [`Truthy`]
//! - **Errors**: [`ValidationError`]
//! - **Combinators**: [`And`], [`Or`]
//!
//! A [`Collection`](crate::Collection) holds one `Validate` strategy for its
//! whole lifetime. Strategies are pure: they inspect a candidate item and
//! either accept it or explain the rejection.

pub mod combinators;
pub mod error;
pub mod shape;
pub mod traits;

pub use combinators::{And, Or};
pub use error::{ErrorParams, ValidationError};
pub use shape::{Class, ItemKind, ItemShape, Truthy};
pub use traits::{Validate, ValidateExt};

//! Runtime inspection of collection items
//!
//! Validators reason about items through [`ItemShape`] rather than concrete
//! types, so the same strategy works for `serde_json::Value`, plain Rust
//! values and shared objects alike. [`Truthy`] supplies the default
//! predicate used by [`Collection::filter_truthy`](crate::Collection::filter_truthy).

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

// ============================================================================
// ITEM KIND
// ============================================================================

/// Coarse runtime category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// An absent value.
    Null,
    /// A boolean.
    Bool,
    /// An integer number.
    Integer,
    /// A floating-point number.
    Float,
    /// A string.
    String,
    /// An ordered or keyed container (list, map, JSON array or object).
    Container,
    /// A structured object with a runtime [`Class`].
    Object,
}

impl ItemKind {
    /// Returns the lowercase name used in error parameters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Container => "container",
            Self::Object => "object",
        }
    }

    /// Returns true for integers, floats and strings.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::String)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CLASS
// ============================================================================

/// Runtime identity of a concrete Rust type, used for class-constrained
/// object validation.
#[derive(Clone, Copy)]
pub struct Class {
    id: TypeId,
    name: &'static str,
}

impl Class {
    /// Returns the class of `T`.
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The [`TypeId`] of the class.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name of the class.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Class {}

impl std::hash::Hash for Class {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// ITEM SHAPE
// ============================================================================

/// Describes what kind of value an item is at runtime.
pub trait ItemShape {
    /// The runtime category of the item.
    fn kind(&self) -> ItemKind;

    /// The class of an object item; `None` for everything else.
    fn class(&self) -> Option<Class> {
        None
    }

    /// A string view of string items; `None` for everything else.
    fn as_str(&self) -> Option<&str> {
        None
    }
}

impl ItemShape for Value {
    fn kind(&self) -> ItemKind {
        match self {
            Value::Null => ItemKind::Null,
            Value::Bool(_) => ItemKind::Bool,
            Value::Number(n) if n.is_f64() => ItemKind::Float,
            Value::Number(_) => ItemKind::Integer,
            Value::String(_) => ItemKind::String,
            Value::Array(_) | Value::Object(_) => ItemKind::Container,
        }
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }
}

impl ItemShape for String {
    fn kind(&self) -> ItemKind {
        ItemKind::String
    }

    fn as_str(&self) -> Option<&str> {
        Some(String::as_str(self))
    }
}

impl ItemShape for &str {
    fn kind(&self) -> ItemKind {
        ItemKind::String
    }

    fn as_str(&self) -> Option<&str> {
        Some(*self)
    }
}

impl ItemShape for bool {
    fn kind(&self) -> ItemKind {
        ItemKind::Bool
    }
}

macro_rules! impl_shape_for_numbers {
    ($kind:ident: $($ty:ty),+) => {
        $(
            impl ItemShape for $ty {
                fn kind(&self) -> ItemKind {
                    ItemKind::$kind
                }
            }
        )+
    };
}

impl_shape_for_numbers!(Integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_shape_for_numbers!(Float: f32, f64);

impl<T: ItemShape> ItemShape for Option<T> {
    fn kind(&self) -> ItemKind {
        self.as_ref().map_or(ItemKind::Null, ItemShape::kind)
    }

    fn class(&self) -> Option<Class> {
        self.as_ref().and_then(ItemShape::class)
    }

    fn as_str(&self) -> Option<&str> {
        self.as_ref().and_then(ItemShape::as_str)
    }
}

impl<T> ItemShape for Vec<T> {
    fn kind(&self) -> ItemKind {
        ItemKind::Container
    }
}

impl<K, V, S> ItemShape for IndexMap<K, V, S> {
    fn kind(&self) -> ItemKind {
        ItemKind::Container
    }
}

impl<K, V> ItemShape for BTreeMap<K, V> {
    fn kind(&self) -> ItemKind {
        ItemKind::Container
    }
}

impl<K, V, S> ItemShape for HashMap<K, V, S> {
    fn kind(&self) -> ItemKind {
        ItemKind::Container
    }
}

// ============================================================================
// TRUTHINESS
// ============================================================================

/// Default truthiness used when filtering without a predicate.
///
/// `false`, zero, `""`, `"0"`, empty containers and null are falsy.
/// Everything else, including every object, is truthy.
pub trait Truthy {
    /// Returns true if the item counts as "truthy".
    fn is_truthy(&self) -> bool;
}

fn str_is_truthy(s: &str) -> bool {
    !s.is_empty() && s != "0"
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => str_is_truthy(s),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        str_is_truthy(self)
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        str_is_truthy(self)
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_numbers {
    ($zero:literal: $($ty:ty),+) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

impl_truthy_for_numbers!(0: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_for_numbers!(0.0: f32, f64);

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for IndexMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

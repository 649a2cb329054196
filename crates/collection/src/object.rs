//! Shared, reference-semantics items
//!
//! [`ObjectRef`] is the item type of object collections. Cloning it shares the
//! underlying object, so every collection holding the same `ObjectRef` sees
//! mutations made through any of them. Equality is pointer identity.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::foundation::{Class, ItemKind, ItemShape, Truthy};

/// A shared handle to an object of any `'static + Send + Sync` type.
///
/// # Examples
///
/// ```rust
/// use nebula_collection::ObjectRef;
///
/// struct Foo(u32);
///
/// let a = ObjectRef::new(Foo(1));
/// let b = a.clone();
///
/// assert_eq!(a, b);
/// assert_ne!(a, ObjectRef::new(Foo(1)));
/// assert_eq!(a.downcast_ref::<Foo>().map(|f| f.0), Some(1));
/// ```
#[derive(Clone)]
pub struct ObjectRef {
    inner: Arc<dyn Any + Send + Sync>,
    class: Class,
}

impl ObjectRef {
    /// Wraps a value in a new shared object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Shares an existing `Arc` without copying the value.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            class: Class::of::<T>(),
        }
    }

    /// The class of the wrapped object.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns true if the wrapped object is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped object as a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns a typed `Arc` sharing the wrapped object.
    #[must_use]
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Returns true if both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner).cast::<()>()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.addr(), state);
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} @ {:p})", self.class.name(), self.addr())
    }
}

impl ItemShape for ObjectRef {
    fn kind(&self) -> ItemKind {
        ItemKind::Object
    }

    fn class(&self) -> Option<Class> {
        Some(self.class)
    }
}

impl Truthy for ObjectRef {
    fn is_truthy(&self) -> bool {
        true
    }
}

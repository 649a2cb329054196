//! Object item validator, optionally class-constrained

use std::any::Any;
use std::marker::PhantomData;

use crate::foundation::{Class, ItemKind, ItemShape, Validate, ValidationError};

/// Accepts object items; when a class is bound, only objects of that class.
///
/// # Examples
///
/// ```rust
/// use nebula_collection::ObjectRef;
/// use nebula_collection::foundation::Validate;
/// use nebula_collection::validators::instance_of;
///
/// struct Foo;
/// struct Bar;
///
/// let v = instance_of::<Foo, ObjectRef>();
/// assert!(v.validate(&ObjectRef::new(Foo)).is_ok());
/// assert!(v.validate(&ObjectRef::new(Bar)).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectItem<T> {
    class: Option<Class>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> ObjectItem<T> {
    /// Creates a validator bound to `class`, or unconstrained for `None`.
    #[must_use]
    pub fn with_class(class: Option<Class>) -> Self {
        Self {
            class,
            _phantom: PhantomData,
        }
    }

    /// The bound class, if any.
    #[must_use]
    pub fn class(&self) -> Option<Class> {
        self.class
    }
}

impl<T: ItemShape> Validate for ObjectItem<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        let kind = input.kind();
        if kind != ItemKind::Object {
            return Err(ValidationError::type_mismatch(
                "object_item",
                "object",
                kind.as_str(),
            ));
        }

        let Some(expected) = self.class else {
            return Ok(());
        };

        match input.class() {
            Some(actual) if actual == expected => Ok(()),
            actual => Err(ValidationError::new(
                "object_class",
                format!("Invalid item provided to collection, expected instance of {expected}"),
            )
            .with_param("expected", expected.name())
            .with_param("actual", actual.map_or("unknown", |c| c.name()))),
        }
    }
}

/// Creates an [`ObjectItem`] validator accepting objects of any class.
#[must_use]
pub fn object_item<T: ItemShape>() -> ObjectItem<T> {
    ObjectItem::with_class(None)
}

/// Creates an [`ObjectItem`] validator accepting only instances of `C`.
#[must_use]
pub fn instance_of<C: Any, T: ItemShape>() -> ObjectItem<T> {
    ObjectItem::with_class(Some(Class::of::<C>()))
}

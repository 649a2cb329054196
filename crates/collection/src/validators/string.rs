//! String item validator

use std::marker::PhantomData;

use crate::foundation::{ItemKind, ItemShape, Validate, ValidationError};

/// Accepts string items, and null items when built as nullable.
#[derive(Debug, Clone, Copy)]
pub struct StringItem<T> {
    nullable: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> StringItem<T> {
    /// Returns true if null items are accepted.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl<T: ItemShape> Validate for StringItem<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match input.kind() {
            ItemKind::String => Ok(()),
            ItemKind::Null if self.nullable => Ok(()),
            other => {
                let expected = if self.nullable { "string or null" } else { "string" };
                Err(ValidationError::type_mismatch(
                    "string_item",
                    expected,
                    other.as_str(),
                ))
            }
        }
    }
}

/// Creates a [`StringItem`] validator that rejects null.
#[must_use]
pub fn string_item<T: ItemShape>() -> StringItem<T> {
    StringItem {
        nullable: false,
        _phantom: PhantomData,
    }
}

/// Creates a [`StringItem`] validator that also accepts null.
#[must_use]
pub fn nullable_string_item<T: ItemShape>() -> StringItem<T> {
    StringItem {
        nullable: true,
        _phantom: PhantomData,
    }
}

//! Container item validator

use std::marker::PhantomData;

use crate::foundation::{ItemKind, ItemShape, Validate, ValidationError};

/// Accepts only items that are themselves ordered or keyed containers.
#[derive(Debug, Clone, Copy)]
pub struct ContainerItem<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ItemShape> Validate for ContainerItem<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match input.kind() {
            ItemKind::Container => Ok(()),
            other => Err(ValidationError::type_mismatch(
                "container_item",
                "container",
                other.as_str(),
            )),
        }
    }
}

/// Creates a [`ContainerItem`] validator.
#[must_use]
pub fn container_item<T: ItemShape>() -> ContainerItem<T> {
    ContainerItem {
        _phantom: PhantomData,
    }
}

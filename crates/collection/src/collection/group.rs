//! Grouping items into sub-collections by a scalar key.

use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::foundation::{Validate, ValidationError};
use crate::key::IntoGroupKey;

/// The result of [`Collection::group`]: one sub-collection per group key, in
/// first-seen order.
pub type Groups<T, V> = Collection<Collection<T, V>, SameValidator<V>>;

/// Accepts only sub-collections bound to one specific validator instance.
///
/// Keeps every group homogeneous with the collection it was derived from.
pub struct SameValidator<V> {
    validator: Arc<V>,
}

impl<V> SameValidator<V> {
    /// Creates a validator accepting collections bound to `validator`.
    pub fn new(validator: Arc<V>) -> Self {
        Self { validator }
    }
}

impl<V> fmt::Debug for SameValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SameValidator")
            .field("validator", &Arc::as_ptr(&self.validator))
            .finish()
    }
}

impl<T, V> Validate for SameValidator<V>
where
    V: Validate<Input = T>,
{
    type Input = Collection<T, V>;

    fn validate(&self, input: &Collection<T, V>) -> Result<(), ValidationError> {
        if Arc::ptr_eq(input.validator(), &self.validator) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "same_validator",
                "Sub-collection must share the validator of its origin",
            ))
        }
    }
}

impl<T, V> Collection<T, V>
where
    V: Validate<Input = T>,
{
    /// Groups items by the scalar key `f` returns for each of them.
    ///
    /// Each group is a clean clone of this collection holding its items in
    /// their original relative order. Fails with
    /// [`CollectionError::InvalidGroupKey`] as soon as `f` returns a
    /// non-scalar; see [`IntoGroupKey`] for the accepted types.
    ///
    /// ```rust
    /// use nebula_collection::{Collection, Key, validators::any_item};
    ///
    /// let c = Collection::from_items(any_item(), [1_i64, 2, 3, 4])?;
    /// let groups = c.group(|n| n % 2)?;
    ///
    /// assert_eq!(groups.keys(), vec![Key::Index(1), Key::Index(0)]);
    /// assert_eq!(groups.get(1)?.values(), vec![1, 3]);
    /// assert_eq!(groups.get(0)?.values(), vec![2, 4]);
    /// # Ok::<(), nebula_collection::CollectionError>(())
    /// ```
    pub fn group<K, F>(&self, mut f: F) -> Result<Groups<T, V>, CollectionError>
    where
        F: FnMut(&T) -> K,
        K: IntoGroupKey,
        T: Clone,
    {
        let mut groups = Collection::new(SameValidator::new(Arc::clone(self.validator())));

        for item in self.items().values() {
            let key = f(item)
                .into_group_key()
                .map_err(|found| CollectionError::InvalidGroupKey { found })?;

            if !groups.exists(&key) {
                groups.set(key.clone(), self.clean_clone())?;
            }
            groups.get_mut(key)?.push(item.clone());
        }

        tracing::trace!(groups = groups.count(), items = self.count(), "grouped collection");
        Ok(groups)
    }
}

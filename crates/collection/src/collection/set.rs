//! Set and combination operations: join, intersect, diff, unique.
//!
//! Membership and distinctness use the item type's `PartialEq`, so values
//! compare structurally and `ObjectRef`s compare by identity.

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::foundation::Validate;

impl<T, V> Collection<T, V>
where
    V: Validate<Input = T>,
{
    /// Appends every item of every collection in `others`, in argument then
    /// iteration order, re-validating each one as by [`add`](Self::add).
    ///
    /// Not atomic: items appended before a rejected one stay in this collection.
    pub fn join<'a, W, I>(&mut self, others: I) -> Result<&mut Self, CollectionError>
    where
        I: IntoIterator<Item = &'a Collection<T, W>>,
        W: Validate<Input = T> + 'a,
        T: Clone + 'a,
    {
        for other in others {
            self.try_extend(other.items().values().cloned())?;
        }
        Ok(self)
    }

    /// A clean clone of the items also present in `other`.
    pub fn intersect<W>(&self, other: &Collection<T, W>) -> Self
    where
        W: Validate<Input = T>,
        T: PartialEq + Clone,
    {
        self.filter(|item| other.has(item))
    }

    /// A clean clone of the items absent from `other`.
    pub fn diff<W>(&self, other: &Collection<T, W>) -> Self
    where
        W: Validate<Input = T>,
        T: PartialEq + Clone,
    {
        self.filter(|item| !other.has(item))
    }

    /// A clean clone keeping the first occurrence of every distinct item.
    pub fn unique(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut out = self.clean_clone();
        for item in self.items().values() {
            if !out.has(item) {
                out.push(item.clone());
            }
        }
        out
    }
}

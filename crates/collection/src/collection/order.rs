//! Ordering and pagination: usort, ksort, limit.

use std::cmp::Ordering;

use crate::collection::Collection;
use crate::foundation::Validate;

impl<T, V> Collection<T, V>
where
    V: Validate<Input = T>,
{
    /// Sorts items in place with a three-way comparator.
    ///
    /// The sort is stable. Every key, string keys included, is replaced by a
    /// sequential index afterwards.
    pub fn usort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items_mut().sort_by(|_, a, _, b| compare(a, b));
        self.reindex();
        tracing::trace!(count = self.count(), "sorted collection by comparator");
        self
    }

    /// Sorts entries in place by ascending key, keeping each item's key.
    ///
    /// Integer keys come before string keys.
    pub fn ksort(&mut self) -> &mut Self {
        self.items_mut().sort_keys();
        self
    }

    /// A clean clone of the `count` items starting at position `offset`.
    ///
    /// Positions follow iteration order, not key values.
    pub fn limit(&self, count: usize, offset: usize) -> Self
    where
        T: Clone,
    {
        let mut out = self.clean_clone();
        for item in self.items().values().skip(offset).take(count) {
            out.push(item.clone());
        }
        out
    }
}

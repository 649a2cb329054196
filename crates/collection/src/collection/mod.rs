//! The validated, ordered, keyed collection
//!
//! [`Collection`] stores items in insertion order under [`Key`]s and runs its
//! bound [`Validate`] strategy on every insertion path: `from_items`, `add`,
//! `set`, `unshift`, `try_extend` and `join`. Items are never re-checked after
//! insertion, so mutation through [`walk`](Collection::walk) or
//! [`get_mut`](Collection::get_mut) is not validated.
//!
//! Operations are split across submodules:
//!
//! - [`functional`]: map, reduce, walk, each, some, every, filter, match, split
//! - [`set`]: join, intersect, diff, unique
//! - [`group`]: grouping into sub-collections
//! - [`order`]: usort, ksort, limit
//! - [`strings`]: sort and lowercase for string collections

pub mod functional;
pub mod group;
pub mod order;
pub mod set;
pub mod strings;

#[cfg(feature = "serde")]
mod ser;

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::CollectionError;
use crate::foundation::{ItemShape, Validate};
use crate::key::Key;

// ============================================================================
// COLLECTION
// ============================================================================

/// An ordered, keyed store of items gated by a validator.
///
/// The validator is fixed at construction and shared, by pointer, with every
/// collection derived from this one (`filter`, `limit`, `group`, ...).
///
/// # Examples
///
/// ```rust
/// use nebula_collection::{ArrayCollection, validators::container_item};
/// use serde_json::json;
///
/// let mut arrays = ArrayCollection::from_items(
///     container_item(),
///     [json!([1]), json!([2]), json!([3])],
/// )?;
///
/// arrays.add(json!([4]))?;
/// assert_eq!(arrays.count(), 4);
/// assert!(arrays.add(json!("x")).is_err());
/// # Ok::<(), nebula_collection::CollectionError>(())
/// ```
pub struct Collection<T, V> {
    items: IndexMap<Key, T>,
    next_index: i64,
    validator: Arc<V>,
}

impl<T, V> Collection<T, V>
where
    V: Validate<Input = T>,
{
    /// Creates an empty collection bound to `validator`.
    pub fn new(validator: V) -> Self {
        Self::with_shared_validator(Arc::new(validator))
    }

    /// Creates an empty collection bound to an already shared validator.
    pub fn with_shared_validator(validator: Arc<V>) -> Self {
        Self {
            items: IndexMap::new(),
            next_index: 0,
            validator,
        }
    }

    /// Creates a collection seeded with `items`, each validated as by [`add`](Self::add).
    ///
    /// Seeding is all-or-nothing from the caller's point of view: the first
    /// rejected item aborts construction and no collection is returned.
    pub fn from_items<I>(validator: V, items: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new(validator);
        collection.try_extend(items)?;
        Ok(collection)
    }

    /// The bound validator.
    #[must_use]
    pub fn validator(&self) -> &Arc<V> {
        &self.validator
    }

    /// Returns true if both collections are bound to the same validator instance.
    #[must_use]
    pub fn shares_validator_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.validator, &other.validator)
    }

    /// A new, empty collection sharing this collection's validator.
    #[must_use]
    pub fn clean_clone(&self) -> Self {
        Self::with_shared_validator(Arc::clone(&self.validator))
    }

    fn check(&self, item: &T, key: Option<&Key>) -> Result<(), CollectionError> {
        self.validator.validate(item).map_err(|error| {
            tracing::debug!(
                code = %error.code,
                key = ?key,
                "collection rejected item"
            );
            CollectionError::InvalidItem(error)
        })
    }

    // ------------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------------

    /// Validates `item` and appends it at the next sequential index.
    ///
    /// Fails with [`CollectionError::IndexOccupied`] once the index counter is
    /// exhausted and the next index already holds an item.
    pub fn add(&mut self, item: T) -> Result<&mut Self, CollectionError> {
        self.check(&item, None)?;
        let key = Key::Index(self.next_index);
        if self.items.contains_key(&key) {
            tracing::debug!(%key, "next index already occupied");
            return Err(CollectionError::IndexOccupied { key });
        }
        self.push(item);
        Ok(self)
    }

    /// Validates and appends every item in order.
    ///
    /// Not atomic: items appended before a rejected one stay in the collection.
    pub fn try_extend<I>(&mut self, items: I) -> Result<&mut Self, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item)?;
        }
        Ok(self)
    }

    /// Validates `item` and stores it under `key`, replacing any existing item.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<Key>, item: T) -> Result<&mut Self, CollectionError> {
        let key = key.into();
        self.check(&item, Some(&key))?;
        self.insert(key, item);
        Ok(self)
    }

    /// Validates `item` and prepends it, renumbering integer keys from zero.
    ///
    /// String keys are kept.
    pub fn unshift(&mut self, item: T) -> Result<&mut Self, CollectionError> {
        self.check(&item, None)?;
        let previous = std::mem::take(&mut self.items);
        self.items.reserve(previous.len() + 1);
        self.next_index = 0;
        self.push(item);
        self.append_renumbered(previous);
        Ok(self)
    }

    /// Appends without validation. Callers guarantee `item` already passed
    /// this collection's validator and that keys were assigned from zero, so
    /// the next index is free.
    pub(crate) fn push(&mut self, item: T) {
        let key = Key::Index(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        self.items.insert(key, item);
    }

    fn insert(&mut self, key: Key, item: T) {
        if let Key::Index(index) = key
            && index >= self.next_index
        {
            self.next_index = index.saturating_add(1);
        }
        self.items.insert(key, item);
    }

    /// Renumbers integer keys sequentially in iteration order, keeping string keys.
    pub(crate) fn renumber(&mut self) {
        let previous = std::mem::take(&mut self.items);
        self.next_index = 0;
        self.append_renumbered(previous);
        tracing::trace!(count = self.items.len(), "renumbered collection keys");
    }

    fn append_renumbered(&mut self, entries: IndexMap<Key, T>) {
        for (key, item) in entries {
            match key {
                Key::Index(_) => self.push(item),
                name @ Key::Name(_) => {
                    self.items.insert(name, item);
                }
            }
        }
    }

    /// Replaces every key, string keys included, with sequential indices.
    pub(crate) fn reindex(&mut self) {
        let previous = std::mem::take(&mut self.items);
        self.next_index = 0;
        for item in previous.into_values() {
            self.push(item);
        }
    }

    // ------------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------------

    /// Returns the item stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Result<&T, CollectionError> {
        let key = key.into();
        self.items
            .get(&key)
            .ok_or(CollectionError::KeyNotFound { key })
    }

    /// Returns the item stored under `key` for in-place mutation.
    ///
    /// The mutated item is not re-validated.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Result<&mut T, CollectionError> {
        let key = key.into();
        self.items
            .get_mut(&key)
            .ok_or(CollectionError::KeyNotFound { key })
    }

    /// Returns true if an item is stored under `key`.
    pub fn exists(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Returns true if an equal item is stored under any key.
    ///
    /// Equality is the item type's `PartialEq`: structural for values,
    /// pointer identity for [`ObjectRef`](crate::ObjectRef).
    pub fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.values().any(|stored| stored == item)
    }

    /// The first item in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first().map(|(_, item)| item)
    }

    /// The last item in iteration order.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last().map(|(_, item)| item)
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Removes the item stored under `key`. Remaining keys are not renumbered.
    pub fn remove(&mut self, key: impl Into<Key>) -> Result<&mut Self, CollectionError> {
        self.take(key)?;
        Ok(self)
    }

    /// Removes and returns the item stored under `key`.
    pub fn take(&mut self, key: impl Into<Key>) -> Result<T, CollectionError> {
        let key = key.into();
        self.items
            .shift_remove(&key)
            .ok_or(CollectionError::KeyNotFound { key })
    }

    /// Removes and returns the last item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let (key, item) = self.items.pop()?;
        if let Key::Index(index) = key
            && index >= 0
            && index == self.next_index - 1
        {
            self.next_index = index;
        }
        Some(item)
    }

    /// Removes every item. The validator binding is unaffected.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self.next_index = 0;
        self
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Number of stored items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the keys in iteration order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.items.keys().cloned().collect()
    }

    /// Snapshot of the items in iteration order.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.values().cloned().collect()
    }

    /// Borrowed view of the backing store.
    #[must_use]
    pub fn items(&self) -> &IndexMap<Key, T> {
        &self.items
    }

    /// Consumes the collection, returning the backing store.
    #[must_use]
    pub fn into_items(self) -> IndexMap<Key, T> {
        self.items
    }

    /// Iterates over `(key, item)` pairs in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, T> {
        self.items.iter()
    }

    /// Joins the items with `separator`.
    ///
    /// String items contribute their raw text; anything else its `Display` form.
    #[must_use]
    pub fn implode(&self, separator: &str) -> String
    where
        T: ItemShape + fmt::Display,
    {
        let mut out = String::new();
        for (i, item) in self.items.values().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            match item.as_str() {
                Some(s) => out.push_str(s),
                None => out.push_str(&item.to_string()),
            }
        }
        out
    }

    pub(crate) fn items_mut(&mut self) -> &mut IndexMap<Key, T> {
        &mut self.items
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: Clone, V> Clone for Collection<T, V> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            next_index: self.next_index,
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Collection<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("next_index", &self.next_index)
            .finish_non_exhaustive()
    }
}

impl<T, V, K> Index<K> for Collection<T, V>
where
    V: Validate<Input = T>,
    K: Into<Key>,
{
    type Output = T;

    /// Read-only bracket access. Panics on a missing key, like the std maps;
    /// use [`Collection::get`] for a fallible lookup.
    fn index(&self, key: K) -> &T {
        let key = key.into();
        match self.items.get(&key) {
            Some(item) => item,
            None => panic!("Element with key {key} was not found in collection"),
        }
    }
}

impl<'a, T, V> IntoIterator for &'a Collection<T, V> {
    type Item = (&'a Key, &'a T);
    type IntoIter = indexmap::map::Iter<'a, Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, V> IntoIterator for Collection<T, V> {
    type Item = (Key, T);
    type IntoIter = indexmap::map::IntoIter<Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

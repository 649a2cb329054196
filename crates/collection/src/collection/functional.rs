//! Functional operations: map, reduce, walk, each, some, every, filter,
//! match, split.
//!
//! Derived collections (`filter`, `match_all`, `split`) are clean clones: fresh
//! stores with sequential keys, sharing the origin's validator. Items placed
//! into them are clones, so `ObjectRef` items stay shared while value items
//! become independent copies.

use indexmap::IndexMap;

use crate::collection::Collection;
use crate::error::MatchError;
use crate::foundation::{Truthy, Validate};
use crate::key::Key;

impl<T, V> Collection<T, V>
where
    V: Validate<Input = T>,
{
    /// Applies `f` to every `(item, key)` pair, keeping keys and order.
    ///
    /// The result is a plain ordered map, not a collection.
    pub fn map<U, F>(&self, mut f: F) -> IndexMap<Key, U>
    where
        F: FnMut(&T, &Key) -> U,
    {
        self.iter()
            .map(|(key, item)| (key.clone(), f(item, key)))
            .collect()
    }

    /// Left fold over the items, starting from an absent accumulator.
    ///
    /// Returns `None` for an empty collection.
    ///
    /// ```rust
    /// use nebula_collection::{Collection, validators::any_item};
    ///
    /// let c = Collection::from_items(any_item(), [1_i32, 2, 3])?;
    /// let sum = c.reduce(|acc: Option<i32>, item| acc.unwrap_or(0) + item);
    /// assert_eq!(sum, Some(6));
    /// # Ok::<(), nebula_collection::CollectionError>(())
    /// ```
    pub fn reduce<A, F>(&self, mut f: F) -> Option<A>
    where
        F: FnMut(Option<A>, &T) -> A,
    {
        let mut accumulator = None;
        for item in self.items().values() {
            accumulator = Some(f(accumulator, item));
        }
        accumulator
    }

    /// Visits every item mutably, in order. Mutations are not re-validated.
    pub fn walk<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut T, &Key),
    {
        for (key, item) in self.items_mut().iter_mut() {
            f(item, key);
        }
        self
    }

    /// Visits every `(item, key)` pair, in order.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, &Key),
    {
        for (key, item) in self.iter() {
            f(item, key);
        }
        self
    }

    /// Returns true if `f` holds for at least one item. Short-circuits.
    pub fn some<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items().values().any(f)
    }

    /// Returns true if `f` holds for every item. Short-circuits.
    pub fn every<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items().values().all(f)
    }

    /// A clean clone holding only the items for which `f` returns true.
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut out = self.clean_clone();
        for item in self.items().values() {
            if f(item) {
                out.push(item.clone());
            }
        }
        out
    }

    /// A clean clone holding only the truthy items.
    ///
    /// This is `filter` without a callback; see [`Truthy`] for the rules.
    pub fn filter_truthy(&self) -> Self
    where
        T: Truthy + Clone,
    {
        self.filter(T::is_truthy)
    }

    /// Same contract as [`filter`](Self::filter).
    pub fn match_all<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        self.filter(f)
    }

    /// Returns the only item matching `f`.
    ///
    /// Fails with [`MatchError::NoMatch`] when nothing matches and with
    /// [`MatchError::Ambiguous`], carrying every match, when more than one does.
    pub fn match_one<F>(&self, f: F) -> Result<T, MatchError<T>>
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut matches = self.match_all(f);
        match matches.count() {
            0 => Err(MatchError::NoMatch),
            1 => matches.pop().ok_or(MatchError::NoMatch),
            count => {
                tracing::trace!(count, "match_one selected more than one item");
                Err(MatchError::Ambiguous {
                    matched: matches.into_items().into_values().collect(),
                })
            }
        }
    }

    /// Moves the items matching `f` out of this collection into a clean clone.
    ///
    /// If anything was moved, the remaining integer keys are renumbered from
    /// zero. String keys are kept.
    pub fn split<F>(&mut self, mut f: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut out = self.clean_clone();
        let previous = std::mem::take(self.items_mut());
        for (key, item) in previous {
            if f(&item) {
                out.push(item);
            } else {
                self.items_mut().insert(key, item);
            }
        }

        if !out.is_empty() {
            tracing::trace!(moved = out.count(), kept = self.count(), "split collection");
            self.renumber();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{AnyItem, any_item};

    fn numbers(items: &[i64]) -> Collection<i64, AnyItem<i64>> {
        Collection::from_items(any_item(), items.iter().copied()).unwrap()
    }

    #[test]
    fn test_map_preserves_keys() {
        let mut c = numbers(&[1, 2]);
        c.set("x", 3).unwrap();
        let mapped = c.map(|item, key| format!("{key}={item}"));

        assert_eq!(
            mapped.into_iter().collect::<Vec<_>>(),
            vec![
                (Key::Index(0), "0=1".to_owned()),
                (Key::Index(1), "1=2".to_owned()),
                (Key::from("x"), "\"x\"=3".to_owned()),
            ]
        );
    }

    #[test]
    fn test_reduce() {
        let c = numbers(&[1, 2, 3]);
        let folded = c.reduce(|acc: Option<String>, n| format!("{}{n}", acc.unwrap_or_default()));
        assert_eq!(folded.as_deref(), Some("123"));
        assert_eq!(numbers(&[]).reduce(|_acc: Option<i64>, n| *n), None);
    }

    #[test]
    fn test_walk_mutates_in_place() {
        let mut c = numbers(&[1, 2, 3]);
        c.walk(|n, _| *n *= 10);
        assert_eq!(c.values(), vec![10, 20, 30]);
    }

    #[test]
    fn test_each_visits_in_order() {
        let c = numbers(&[4, 5]);
        let mut seen = Vec::new();
        c.each(|n, key| seen.push((key.clone(), *n)));
        assert_eq!(seen, vec![(Key::Index(0), 4), (Key::Index(1), 5)]);
    }

    #[test]
    fn test_some_every_short_circuit() {
        let c = numbers(&[1, 2, 3]);
        let mut calls = 0;
        assert!(c.some(|n| {
            calls += 1;
            *n == 2
        }));
        assert_eq!(calls, 2);

        calls = 0;
        assert!(!c.every(|n| {
            calls += 1;
            *n < 2
        }));
        assert_eq!(calls, 2);

        assert!(!numbers(&[]).some(|_| true));
        assert!(numbers(&[]).every(|_| false));
    }

    #[test]
    fn test_filter_rekeys_and_keeps_source() {
        let mut c = numbers(&[]);
        c.set(3, 1).unwrap();
        c.set(7, 2).unwrap();
        c.set(9, 3).unwrap();

        let odd = c.filter(|n| n % 2 == 1);
        assert_eq!(odd.keys(), vec![Key::Index(0), Key::Index(1)]);
        assert_eq!(odd.values(), vec![1, 3]);
        assert!(odd.shares_validator_with(&c));
        assert_eq!(c.count(), 3);
    }

    #[test]
    fn test_filter_truthy() {
        let c = numbers(&[0, 1, 0, 2]);
        assert_eq!(c.filter_truthy().values(), vec![1, 2]);
    }

    #[test]
    fn test_match_one() {
        let c = numbers(&[1, 2, 3, 2]);
        assert_eq!(c.match_one(|n| *n == 3), Ok(3));
        assert_eq!(c.match_one(|n| *n == 9), Err(MatchError::NoMatch));
        assert_eq!(
            c.match_one(|n| *n == 2),
            Err(MatchError::Ambiguous { matched: vec![2, 2] })
        );
    }

    #[test]
    fn test_split_moves_matches() {
        let mut c = numbers(&[1, 2, 3, 4]);
        let even = c.split(|n| n % 2 == 0);

        assert_eq!(even.values(), vec![2, 4]);
        assert_eq!(c.values(), vec![1, 3]);
        assert_eq!(c.keys(), vec![Key::Index(0), Key::Index(1)]);
        assert!(even.shares_validator_with(&c));
    }

    #[test]
    fn test_split_without_matches_keeps_keys() {
        let mut c = numbers(&[]);
        c.set(5, 1).unwrap();
        c.set("k", 3).unwrap();

        let none = c.split(|n| *n > 10);
        assert!(none.is_empty());
        assert_eq!(c.keys(), vec![Key::Index(5), Key::from("k")]);
    }

    #[test]
    fn test_split_keeps_string_keys() {
        let mut c = numbers(&[1, 2]);
        c.set("k", 3).unwrap();
        c.add(4).unwrap();

        let moved = c.split(|n| *n == 1);
        assert_eq!(moved.values(), vec![1]);
        assert_eq!(
            c.keys(),
            vec![Key::Index(0), Key::from("k"), Key::Index(1)]
        );
    }
}

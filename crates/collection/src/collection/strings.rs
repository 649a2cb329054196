//! Extras for collections bound to [`StringItem`].

use crate::collection::Collection;
use crate::foundation::ItemShape;
use crate::validators::StringItem;

impl<T> Collection<T, StringItem<T>>
where
    T: ItemShape,
{
    /// Sorts items in place by string value, nulls first.
    ///
    /// Every key is replaced by a sequential index afterwards.
    pub fn sort(&mut self) -> &mut Self {
        self.usort(|a, b| a.as_str().cmp(&b.as_str()))
    }

    /// A clean clone with every string lowercased. Nulls are kept as-is.
    pub fn to_lower(&self) -> Self
    where
        T: From<String> + Clone,
    {
        let mut out = self.clean_clone();
        for item in self.items().values() {
            let lowered = match item.as_str() {
                Some(s) => T::from(s.to_lowercase()),
                None => item.clone(),
            };
            out.push(lowered);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringCollection;
    use crate::key::Key;
    use crate::validators::{nullable_string_item, string_item};
    use serde_json::json;

    #[test]
    fn test_sort() {
        let mut c =
            StringCollection::from_items(string_item(), [json!("b"), json!("a"), json!("c")])
                .unwrap();
        c.sort();

        assert_eq!(c.values(), vec![json!("a"), json!("b"), json!("c")]);
        assert_eq!(c.keys(), vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
    }

    #[test]
    fn test_sort_nulls_first() {
        let mut c = StringCollection::from_items(
            nullable_string_item(),
            [json!("b"), json!(null), json!("a")],
        )
        .unwrap();
        c.sort();

        assert_eq!(c.values(), vec![json!(null), json!("a"), json!("b")]);
    }

    #[test]
    fn test_to_lower_returns_new_collection() {
        let c = StringCollection::from_items(
            nullable_string_item(),
            [json!("Hello"), json!(null), json!("WORLD")],
        )
        .unwrap();
        let lower = c.to_lower();

        assert_eq!(lower.values(), vec![json!("hello"), json!(null), json!("world")]);
        assert_eq!(c.values()[0], json!("Hello"));
        assert!(lower.shares_validator_with(&c));
    }

    #[test]
    fn test_native_strings() {
        let mut c = Collection::from_items(string_item::<String>(), ["b".to_owned(), "A".to_owned()])
            .unwrap();
        c.sort();
        assert_eq!(c.values(), vec!["A".to_owned(), "b".to_owned()]);
        assert_eq!(c.to_lower().implode(","), "a,b");
    }
}

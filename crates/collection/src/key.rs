//! Collection keys and group-key conversion

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::foundation::{ItemKind, ItemShape};

// ============================================================================
// KEY
// ============================================================================

/// Key of a collection entry: an integer index or a string name.
///
/// Strings holding the canonical decimal form of an `i64` normalise to
/// [`Key::Index`], so `Key::from("7") == Key::from(7)`. Keys order every
/// index before every name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key, assigned sequentially by `add`.
    Index(i64),
    /// Explicit string key.
    Name(String),
}

impl Key {
    /// Returns the integer index, if this is an index key.
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Returns the name, if this is a string key.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Returns true for integer keys.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

/// Parses `s` as an index only if it is the canonical form of an `i64`.
fn canonical_index(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical { s.parse().ok() } else { None }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Index(a), Self::Index(b)) => a.cmp(b),
            (Self::Index(_), Self::Name(_)) => Ordering::Less,
            (Self::Name(_), Self::Index(_)) => Ordering::Greater,
            (Self::Name(a), Self::Name(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

macro_rules! impl_key_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self::Index(i64::from(value))
                }
            }
        )+
    };
}

impl_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Name(value.to_string()), Self::Index)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        canonical_index(value).map_or_else(|| Self::Name(value.to_owned()), Self::Index)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_index(&value) {
            Some(index) => Self::Index(index),
            None => Self::Name(value),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(i) => serializer.serialize_i64(*i),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}

// ============================================================================
// GROUP KEY
// ============================================================================

/// Conversion of a grouping callback's result into a [`Key`].
///
/// Only scalars qualify: integers and strings map directly, finite floats
/// truncate toward zero. Anything else is rejected with the [`ItemKind`]
/// that was found.
pub trait IntoGroupKey {
    /// Converts `self` into a key or reports the non-scalar kind.
    fn into_group_key(self) -> Result<Key, ItemKind>;
}

impl IntoGroupKey for Key {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        Ok(self)
    }
}

macro_rules! impl_group_key_for_int {
    ($($ty:ty),+) => {
        $(
            impl IntoGroupKey for $ty {
                fn into_group_key(self) -> Result<Key, ItemKind> {
                    i64::try_from(self).map(Key::Index).map_err(|_| ItemKind::Integer)
                }
            }
        )+
    };
}

impl_group_key_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

fn float_key(value: f64) -> Result<Key, ItemKind> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(Key::Index(value.trunc() as i64))
    } else {
        Err(ItemKind::Float)
    }
}

impl IntoGroupKey for f64 {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        float_key(self)
    }
}

impl IntoGroupKey for f32 {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        float_key(f64::from(self))
    }
}

impl IntoGroupKey for String {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        Ok(Key::from(self))
    }
}

impl IntoGroupKey for &str {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        Ok(Key::from(self))
    }
}

impl IntoGroupKey for bool {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        Err(ItemKind::Bool)
    }
}

impl<T: IntoGroupKey> IntoGroupKey for Option<T> {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        self.map_or(Err(ItemKind::Null), IntoGroupKey::into_group_key)
    }
}

impl IntoGroupKey for Value {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        match self {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Key::Index(i)),
                None => n.as_f64().map_or(Err(ItemKind::Float), float_key),
            },
            Value::String(s) => Ok(Key::from(s)),
            other => Err(other.kind()),
        }
    }
}

impl IntoGroupKey for &Value {
    fn into_group_key(self) -> Result<Key, ItemKind> {
        self.clone().into_group_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_normalise() {
        assert_eq!(Key::from("7"), Key::Index(7));
        assert_eq!(Key::from("-3"), Key::Index(-3));
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from(String::from("42")), Key::Index(42));

        assert_eq!(Key::from("07"), Key::Name("07".into()));
        assert_eq!(Key::from("-0"), Key::Name("-0".into()));
        assert_eq!(Key::from("+1"), Key::Name("+1".into()));
        assert_eq!(Key::from("1.5"), Key::Name("1.5".into()));
        assert_eq!(Key::from(""), Key::Name(String::new()));
        assert_eq!(Key::from("-"), Key::Name("-".into()));
        assert_eq!(
            Key::from("99999999999999999999"),
            Key::Name("99999999999999999999".into())
        );
    }

    #[test]
    fn test_ordering() {
        let mut keys = vec![Key::from("b"), Key::from(2), Key::from("a"), Key::from(-1)];
        keys.sort();
        assert_eq!(
            keys,
            vec![Key::Index(-1), Key::Index(2), Key::from("a"), Key::from("b")]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::from(3).to_string(), "3");
        assert_eq!(Key::from("name").to_string(), "\"name\"");
    }

    #[test]
    fn test_group_keys() {
        assert_eq!(5_i32.into_group_key(), Ok(Key::Index(5)));
        assert_eq!(1.9_f64.into_group_key(), Ok(Key::Index(1)));
        assert_eq!((-1.9_f64).into_group_key(), Ok(Key::Index(-1)));
        assert_eq!("x".into_group_key(), Ok(Key::from("x")));
        assert_eq!(f64::NAN.into_group_key(), Err(ItemKind::Float));
        assert_eq!(true.into_group_key(), Err(ItemKind::Bool));
        assert_eq!(None::<i32>.into_group_key(), Err(ItemKind::Null));
        assert_eq!(u64::MAX.into_group_key(), Err(ItemKind::Integer));
    }

    #[test]
    fn test_value_group_keys() {
        assert_eq!(json!(2).into_group_key(), Ok(Key::Index(2)));
        assert_eq!(json!(2.5).into_group_key(), Ok(Key::Index(2)));
        assert_eq!(json!("12").into_group_key(), Ok(Key::Index(12)));
        assert_eq!(json!([1]).into_group_key(), Err(ItemKind::Container));
        assert_eq!(json!(null).into_group_key(), Err(ItemKind::Null));
        assert_eq!((&json!(false)).into_group_key(), Err(ItemKind::Bool));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_value(Key::from(4)).ok(), Some(json!(4)));
        assert_eq!(serde_json::to_value(Key::from("k")).ok(), Some(json!("k")));
    }
}

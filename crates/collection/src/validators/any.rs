//! Open validators: accept-all and closure-backed

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ANY ITEM
// ============================================================================

/// Accepts every item. Useful for plain scalar collections.
#[derive(Debug, Clone, Copy)]
pub struct AnyItem<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for AnyItem<T> {
    type Input = T;

    fn validate(&self, _input: &T) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates an [`AnyItem`] validator.
#[must_use]
pub fn any_item<T>() -> AnyItem<T> {
    AnyItem {
        _phantom: PhantomData,
    }
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Accepts items for which a closure returns `true`.
#[derive(Clone)]
pub struct Predicate<T, F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    rule: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, F> Validate for Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.rule)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()))
        }
    }
}

/// Creates a [`Predicate`] validator rejecting with `code` and `message`.
///
/// # Examples
///
/// ```rust
/// use nebula_collection::foundation::Validate;
/// use nebula_collection::validators::predicate;
///
/// let even = predicate("even", "Item must be even", |n: &i64| n % 2 == 0);
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().code, "even");
/// ```
pub fn predicate<T, F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    rule: F,
) -> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    Predicate {
        code: code.into(),
        message: message.into(),
        rule,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::string_item;
    use serde_json::{Value, json};

    #[test]
    fn test_any_item() {
        assert!(any_item::<i32>().validate(&-1).is_ok());
        assert!(any_item::<Value>().validate(&json!(null)).is_ok());
    }

    #[test]
    fn test_predicate_composes_with_builtins() {
        let short_string = string_item::<Value>().and(predicate(
            "max_length",
            "Item must be at most 3 characters",
            |v: &Value| v.as_str().is_some_and(|s| s.len() <= 3),
        ));

        assert!(short_string.validate(&json!("abc")).is_ok());
        assert_eq!(short_string.validate(&json!("abcd")).unwrap_err().code, "max_length");
        assert_eq!(short_string.validate(&json!(1)).unwrap_err().code, "string_item");
    }
}

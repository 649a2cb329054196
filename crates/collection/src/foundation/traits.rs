//! Core traits for item validation
//!
//! A collection binds exactly one [`Validate`] strategy at construction and
//! runs it on every insertion path.

use crate::foundation::ValidationError;
use crate::foundation::combinators::{And, Or};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The strategy every collection validator implements.
///
/// # Examples
///
/// ```rust
/// use nebula_collection::foundation::{Validate, ValidationError};
///
/// struct Positive;
///
/// impl Validate for Positive {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input > 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("positive", "Item must be positive"))
///         }
///     }
/// }
///
/// assert!(Positive.validate(&3).is_ok());
/// assert!(Positive.validate(&-3).is_err());
/// ```
pub trait Validate {
    /// The type of item being validated.
    type Input: ?Sized;

    /// Validates a candidate item.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the item may be inserted
    /// * `Err(ValidationError)` if it must be rejected
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Both validators must accept the item. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must accept the item. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

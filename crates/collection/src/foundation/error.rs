//! Error type returned by item validators
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Inline capacity for error params; `type_mismatch` fills exactly two.
const INLINE_PARAMS: usize = 2;

/// Parameter list of a [`ValidationError`].
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); INLINE_PARAMS]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured rejection produced by a [`Validate`](super::Validate) strategy.
///
/// # Examples
///
/// ```rust
/// use nebula_collection::foundation::ValidationError;
///
/// let error = ValidationError::new("string_item", "Item must be a string")
///     .with_param("actual", "integer");
///
/// assert_eq!(error.code, "string_item");
/// assert_eq!(error.param("actual"), Some("integer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "container_item", "object_class", "string_item"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters describing the rejection.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        code: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        Self::new(code, format!("Invalid item provided to collection, expected {expected}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

//! Per-constraint evaluation outcome

use serde_json::Value;

use crate::foundation::ValidationError;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of evaluating one constraint against a candidate value.
///
/// A pipeline threads an accumulating value through its constraints:
/// `Unchanged` leaves it alone, `Transformed` replaces it for every
/// downstream constraint, and `Failure` records a violation. On the
/// `validate` path a failing constraint's attempted transformation is
/// discarded and the running value carries over unchanged.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The value satisfies the constraint; proceed with it as-is.
    Unchanged,
    /// The value was coerced; proceed with the replacement.
    Transformed(Value),
    /// The constraint was violated.
    Failure(ValidationError),
}

impl Outcome {
    /// Shorthand for a failure outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use datashape::{Outcome, Value};
    ///
    /// let contain_bang = |name: &str, value: &Value| -> Outcome {
    ///     match value.as_str() {
    ///         Some(s) if s.contains('!') => Outcome::Unchanged,
    ///         _ => Outcome::fail("contains", format!("{name} must contain \"!\"")),
    ///     }
    /// };
    /// ```
    pub fn fail(
        code: impl Into<std::borrow::Cow<'static, str>>,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> Self {
        Outcome::Failure(ValidationError::new(code, message))
    }

    /// Returns true for the `Failure` variant.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

// ============================================================================
// VALUE KINDS
// ============================================================================

/// Names the runtime kind of a JSON value, for type-mismatch messages.
///
/// Whole numbers are reported as `"integer"`, everything else numeric as
/// `"float"`.
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

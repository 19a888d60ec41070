//! Core constraint trait
//!
//! Every pipeline step, built-in or user-supplied, implements
//! [`Constraint`]. The trait is object-safe; fields store their pipeline
//! as boxed trait objects so constraints of differing configuration
//! shapes can share one ordered sequence.

use serde_json::Value;

use crate::foundation::Outcome;

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A single validation pipeline step.
///
/// Constraints are pure: they never mutate their input and hold no
/// mutable state, only configuration captured at attach-time. They signal
/// violations by returning [`Outcome::Failure`], never by panicking.
///
/// # Examples
///
/// ```
/// use datashape::{Constraint, Outcome, ValidationError, Value};
///
/// struct DivisibleBy {
///     divisor: i64,
/// }
///
/// impl Constraint for DivisibleBy {
///     fn evaluate(&self, field: &str, value: &Value) -> Outcome {
///         match value.as_i64() {
///             Some(n) if n % self.divisor != 0 => Outcome::Failure(
///                 ValidationError::new(
///                     "divisible_by",
///                     format!("{field} must be divisible by {}", self.divisor),
///                 )
///                 .with_field(field.to_string()),
///             ),
///             _ => Outcome::Unchanged,
///         }
///     }
/// }
/// ```
pub trait Constraint {
    /// Evaluates the constraint against a candidate value.
    ///
    /// `field` is the owning field's name, available for embedding in
    /// failure messages.
    fn evaluate(&self, field: &str, value: &Value) -> Outcome;
}

/// A pipeline-owned constraint.
pub type BoxedConstraint = Box<dyn Constraint + Send + Sync>;

// Plain functions and closures are constraints: the custom escape hatch
// (`must`) accepts them directly.
impl<F> Constraint for F
where
    F: Fn(&str, &Value) -> Outcome,
{
    fn evaluate(&self, field: &str, value: &Value) -> Outcome {
        self(field, value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

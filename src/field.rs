//! Field: a named, ordered constraint pipeline
//!
//! A [`Field`] binds a name to an append-only sequence of
//! [`Constraint`]s and offers two evaluators over it: a short-circuit
//! boolean [`test`](Field::test) and a full-accumulation
//! [`validate`](Field::validate). Position 0 of the pipeline is always
//! the owning variant's type check, and both evaluators re-invoke it
//! against the final accumulated value, so a constraint that transforms
//! the value into a different kind is still caught.

use std::fmt;

use serde_json::Value;

use crate::foundation::{BoxedConstraint, Constraint, Outcome, ValidationError, ValidationErrors};

// ============================================================================
// FIELD
// ============================================================================

/// A named validation pipeline for one scalar value.
///
/// Built through the variant constructors ([`string`](crate::string),
/// [`integer`](crate::integer), [`float`](crate::float),
/// [`boolean`](crate::boolean)) and their fluent builder methods, or
/// directly via [`Field::new`] for a custom variant. A missing value is
/// represented as `Value::Null` throughout.
///
/// Construction consumes and returns the field, so a pipeline can no
/// longer change once the field is shared or handed to a
/// [`Schema`](crate::Schema); evaluation takes `&self` and is safe to run
/// concurrently.
pub struct Field {
    name: String,
    pipeline: Vec<BoxedConstraint>,
}

impl Field {
    /// Creates a field whose pipeline starts with the given type check.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not identifier-like (non-empty, starting with
    /// an ASCII letter or underscore, containing only ASCII letters,
    /// digits, and underscores). Malformed names are caller bugs and are
    /// rejected at construction rather than at evaluation time.
    pub fn new(
        name: impl Into<String>,
        type_check: impl Constraint + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        assert!(
            is_identifier(&name),
            "field name must be an identifier-like string, got {name:?}",
        );
        Self {
            name,
            pipeline: vec![Box::new(type_check)],
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of constraints in the pipeline, including the type check.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pipeline.len()
    }

    /// Always false: the type check occupies position 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pipeline.is_empty()
    }

    /// Appends a constraint to the pipeline.
    ///
    /// Accepts any [`Constraint`], including plain closures:
    ///
    /// ```
    /// use datashape::{string, Outcome, Value};
    ///
    /// let field = string("password").must(|name: &str, value: &Value| {
    ///     match value.as_str() {
    ///         Some(s) if s.contains('!') => Outcome::Unchanged,
    ///         _ => Outcome::fail("contains", format!("{name} must contain \"!\"")),
    ///     }
    /// });
    /// assert!(field.test(&Value::from("secret!")));
    /// assert!(!field.test(&Value::from("secret")));
    /// ```
    #[must_use = "builder methods consume and return the field"]
    pub fn must(mut self, constraint: impl Constraint + Send + Sync + 'static) -> Self {
        self.pipeline.push(Box::new(constraint));
        self
    }

    /// Appends the [`NotNull`](crate::constraints::NotNull) constraint.
    #[must_use = "builder methods consume and return the field"]
    pub fn not_null(self) -> Self {
        self.must(crate::constraints::not_null())
    }

    /// Tests whether a value satisfies every constraint.
    ///
    /// Constraints run in pipeline order against an accumulating value;
    /// the first failure short-circuits to `false`. On success the type
    /// check (pipeline position 0) is invoked once more against the final
    /// accumulated value, so a downstream transform that changes the
    /// value's kind still fails the test.
    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        let mut current = value.clone();
        for constraint in &self.pipeline {
            match constraint.evaluate(&self.name, &current) {
                Outcome::Failure(_) => return false,
                Outcome::Transformed(next) => current = next,
                Outcome::Unchanged => {}
            }
        }
        self.recheck_type(&current).is_none()
    }

    /// Runs a value through every constraint, accumulating all failures.
    ///
    /// Unlike [`test`](Field::test) this never short-circuits: each
    /// constraint sees the value as accumulated so far, failures are
    /// recorded in pipeline order, and a failing constraint's attempted
    /// transformation is discarded. The type check is re-invoked against
    /// the final value afterwards and any failure is appended last, so a
    /// value of the wrong kind is reported twice: once from pipeline
    /// position 0 and once from the closing re-check.
    ///
    /// Returns the final accumulated value together with the failures.
    #[must_use]
    pub fn validate(&self, value: &Value) -> (Value, ValidationErrors) {
        let mut current = value.clone();
        let mut errors = ValidationErrors::new();
        for constraint in &self.pipeline {
            match constraint.evaluate(&self.name, &current) {
                Outcome::Failure(error) => errors.push(error),
                Outcome::Transformed(next) => current = next,
                Outcome::Unchanged => {}
            }
        }
        if let Some(error) = self.recheck_type(&current) {
            errors.push(error);
        }
        (current, errors)
    }

    // Second invocation of the type check, not a cached result: the final
    // accumulated value may differ from the one position 0 already saw.
    fn recheck_type(&self, value: &Value) -> Option<ValidationError> {
        let type_check = self.pipeline.first()?;
        match type_check.evaluate(&self.name, value) {
            Outcome::Failure(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("constraints", &self.pipeline.len())
            .finish()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// TESTS
// ============================================================================

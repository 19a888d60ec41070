//! Integer fields

use serde_json::Value;

use crate::constraints::{self, Range, is_integer};
use crate::field::Field;
use crate::foundation::{Constraint, ValidationErrors};

/// A field that accepts whole numbers (and `Null`, unless
/// [`not_null`](IntegerField::not_null) is attached).
///
/// Floats and numeric strings are type mismatches.
///
/// # Examples
///
/// ```
/// use datashape::integer;
/// use serde_json::json;
///
/// let age = integer("age").not_null().positive().not_zero();
/// assert!(age.test(&json!(46)));
/// assert!(!age.test(&json!(0)));
/// assert!(!age.test(&json!("46")));
/// ```
#[derive(Debug)]
pub struct IntegerField {
    field: Field,
}

/// Creates an integer field.
///
/// # Panics
///
/// Panics if `name` is not identifier-like; see [`Field::new`].
pub fn integer(name: impl Into<String>) -> IntegerField {
    IntegerField::new(name)
}

impl IntegerField {
    /// Creates an integer field; the integer type check is pipeline
    /// entry 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, is_integer()),
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Appends an arbitrary constraint. See [`Field::must`].
    #[must_use = "builder methods consume and return the field"]
    pub fn must(mut self, constraint: impl Constraint + Send + Sync + 'static) -> Self {
        self.field = self.field.must(constraint);
        self
    }

    /// Rejects `Null` and absent values.
    #[must_use = "builder methods consume and return the field"]
    pub fn not_null(self) -> Self {
        self.must(constraints::not_null())
    }

    /// Rejects negative values. Zero is allowed; the name is historical.
    #[must_use = "builder methods consume and return the field"]
    pub fn positive(self) -> Self {
        self.must(constraints::positive())
    }

    /// Rejects zero.
    #[must_use = "builder methods consume and return the field"]
    pub fn not_zero(self) -> Self {
        self.must(constraints::not_zero())
    }

    /// Requires `min <= value <= max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use = "builder methods consume and return the field"]
    pub fn range(self, min: i64, max: i64) -> Self {
        self.must(Range::new(min as f64, max as f64))
    }

    /// See [`Field::test`].
    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        self.field.test(value)
    }

    /// See [`Field::validate`].
    #[must_use]
    pub fn validate(&self, value: &Value) -> (Value, ValidationErrors) {
        self.field.validate(value)
    }
}

impl From<IntegerField> for Field {
    fn from(variant: IntegerField) -> Field {
        variant.field
    }
}

//! Float fields

use serde_json::Value;

use crate::constraints::{self, is_float};
use crate::field::Field;
use crate::foundation::{Constraint, ValidationErrors};

/// A field that accepts any number (and `Null`, unless
/// [`not_null`](FloatField::not_null) is attached).
///
/// Unlike [`IntegerField`](crate::IntegerField), whole numbers and
/// fractional numbers both pass the type check.
///
/// # Examples
///
/// ```
/// use datashape::float;
/// use serde_json::json;
///
/// let cost = float("shippingCost").positive();
/// assert!(cost.test(&json!(4.15)));
/// assert!(cost.test(&json!(4)));
/// assert!(!cost.test(&json!("4.15")));
/// ```
#[derive(Debug)]
pub struct FloatField {
    field: Field,
}

/// Creates a float field.
///
/// # Panics
///
/// Panics if `name` is not identifier-like; see [`Field::new`].
pub fn float(name: impl Into<String>) -> FloatField {
    FloatField::new(name)
}

impl FloatField {
    /// Creates a float field; the float type check is pipeline entry 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, is_float()),
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
    pub fn range(self, min: f64, max: f64) -> Self {
        self.must(constraints::range(min, max))
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

impl From<FloatField> for Field {
    fn from(variant: FloatField) -> Field {
        variant.field
    }
}

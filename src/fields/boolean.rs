//! Boolean fields

use serde_json::Value;

use crate::constraints::{self, is_boolean};
use crate::field::Field;
use crate::foundation::{Constraint, ValidationErrors};

/// A field that accepts booleans (and `Null`, unless
/// [`not_null`](BooleanField::not_null) is attached).
///
/// Booleans carry no variant-specific constraints beyond the type check;
/// anything further is expressed through [`must`](BooleanField::must).
///
/// # Examples
///
/// ```
/// use datashape::boolean;
/// use serde_json::json;
///
/// let confirmed = boolean("confirmed").not_null();
/// assert!(confirmed.test(&json!(false)));
/// assert!(!confirmed.test(&json!("false")));
/// assert!(!confirmed.test(&json!(null)));
/// ```
#[derive(Debug)]
pub struct BooleanField {
    field: Field,
}

/// Creates a boolean field.
///
/// # Panics
///
/// Panics if `name` is not identifier-like; see [`Field::new`].
pub fn boolean(name: impl Into<String>) -> BooleanField {
    BooleanField::new(name)
}

impl BooleanField {
    /// Creates a boolean field; the boolean type check is pipeline
    /// entry 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, is_boolean()),
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

impl From<BooleanField> for Field {
    fn from(variant: BooleanField) -> Field {
        variant.field
    }
}

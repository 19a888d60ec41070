//! String fields

use serde_json::Value;

use crate::constraints::{self, is_string};
use crate::field::Field;
use crate::foundation::{Constraint, ValidationErrors};

/// A field that accepts strings (and `Null`, unless
/// [`not_null`](StringField::not_null) is attached).
///
/// # Examples
///
/// ```
/// use datashape::string;
/// use serde_json::json;
///
/// let lastname = string("lastname").max_length(12).not_null();
/// assert!(lastname.test(&json!("Riviera")));
/// assert!(!lastname.test(&json!(null)));
/// ```
#[derive(Debug)]
pub struct StringField {
    field: Field,
}

/// Creates a string field.
///
/// # Panics
///
/// Panics if `name` is not identifier-like; see [`Field::new`].
pub fn string(name: impl Into<String>) -> StringField {
    StringField::new(name)
}

impl StringField {
    /// Creates a string field; the string type check is pipeline entry 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, is_string()),
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

    /// Requires at least `min` characters.
    #[must_use = "builder methods consume and return the field"]
    pub fn min_length(self, min: usize) -> Self {
        self.must(constraints::min_length(min))
    }

    /// Allows at most `max` characters.
    #[must_use = "builder methods consume and return the field"]
    pub fn max_length(self, max: usize) -> Self {
        self.must(constraints::max_length(max))
    }

    /// Letters only.
    #[must_use = "builder methods consume and return the field"]
    pub fn alphabetical(self) -> Self {
        self.must(constraints::alphabetical())
    }

    /// Digits only.
    #[must_use = "builder methods consume and return the field"]
    pub fn numeric(self) -> Self {
        self.must(constraints::numeric())
    }

    /// Letters and digits only.
    #[must_use = "builder methods consume and return the field"]
    pub fn alphanumeric(self) -> Self {
        self.must(constraints::alphanumeric())
    }

    /// Restricts the value to a fixed set.
    ///
    /// ```
    /// use datashape::string;
    /// use serde_json::json;
    ///
    /// let suit = string("suit").enumerated(["hearts", "spades", "clubs", "diamonds"]);
    /// assert!(suit.test(&json!("spades")));
    /// assert!(!suit.test(&json!("horseshoes")));
    /// ```
    #[must_use = "builder methods consume and return the field"]
    pub fn enumerated<I, T>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.must(constraints::enumerated(
            allowed.into_iter().map(Into::into).collect(),
        ))
    }

    /// Requires an email-shaped value.
    #[must_use = "builder methods consume and return the field"]
    pub fn email(self) -> Self {
        self.must(constraints::email())
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

impl From<StringField> for Field {
    fn from(variant: StringField) -> Field {
        variant.field
    }
}

//! Schema: a named collection of fields evaluated together
//!
//! A [`Schema`] owns its fields outright — handing a field to a schema
//! moves it, so the pipeline a schema evaluates is frozen by
//! construction and later builder calls on some other copy cannot leak
//! in. Evaluation walks fields in declaration order and treats the
//! declared set as an allow-list: undeclared record keys are dropped
//! silently.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::field::Field;
use crate::foundation::ValidationErrors;

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable collection of named fields, evaluated against whole
/// records.
///
/// # Examples
///
/// ```
/// use datashape::{integer, schema, string};
/// use serde_json::json;
///
/// let cowboy = schema![
///     string("firstname").not_null(),
///     integer("kills").positive(),
/// ];
///
/// let (record, errors) = cowboy.validate(&json!({
///     "firstname": "Juan Carlos",
///     "kills": 4,
///     "hat": "stetson",
/// }));
/// assert!(errors.is_empty());
/// // "hat" is not declared, so it is not copied through.
/// assert_eq!(record, json!({"firstname": "Juan Carlos", "kills": 4}));
/// ```
///
/// # Duplicate names
///
/// If two fields share a name, the later one's pipeline wins and the
/// earlier one's declaration position is kept. This mirrors plain map
/// insertion and is documented behavior, not an error.
#[derive(Debug)]
pub struct Schema {
    fields: IndexMap<String, Field>,
}

impl Schema {
    /// Builds a schema from previously-built fields.
    ///
    /// Usually invoked through the [`schema!`](crate::schema) macro,
    /// which converts mixed field variants.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let mut map = IndexMap::new();
        for field in fields {
            let field = field.into();
            map.insert(field.name().to_owned(), field);
        }
        Self { fields: map }
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The declared field names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Whole-record pass/fail.
    ///
    /// Delegates each declared field to [`Field::test`] with the record's
    /// value for that key (absent keys evaluate as `Null`) and
    /// short-circuits on the first failing field.
    #[must_use]
    pub fn test(&self, record: &Value) -> bool {
        self.fields
            .iter()
            .all(|(name, field)| field.test(record.get(name).unwrap_or(&Value::Null)))
    }

    /// Validates a record, producing a sanitized copy and every failure.
    ///
    /// For each declared field, in declaration order, the record's value
    /// for that key (absent keys evaluate as `Null`) runs through
    /// [`Field::validate`]; the final per-field value is written into the
    /// result record and the field's failures are appended to one flat
    /// list. Intra-field order is pipeline order, inter-field order is
    /// declaration order. Undeclared keys are neither copied nor
    /// reported.
    #[must_use]
    pub fn validate(&self, record: &Value) -> (Value, ValidationErrors) {
        let mut result = Map::with_capacity(self.fields.len());
        let mut errors = ValidationErrors::new();
        for (name, field) in &self.fields {
            let input = record.get(name).cloned().unwrap_or(Value::Null);
            let (value, mut field_errors) = field.validate(&input);
            result.insert(name.clone(), value);
            errors.append(&mut field_errors);
        }
        (Value::Object(result), errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{integer, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn declaration_order_is_preserved() {
        let s = crate::schema![string("b"), string("a"), string("c")];
        let names: Vec<_> = s.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        // The second "x" pipeline (with not_null) replaces the first,
        // but keeps the first declaration's position.
        let s = crate::schema![string("x"), string("y"), string("x").not_null()];
        assert_eq!(s.len(), 2);
        assert_eq!(s.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(!s.test(&json!({"x": null})));
    }

    #[test]
    fn validate_output_keys_follow_declaration_order() {
        // Not alphabetical: declaration order must survive the result map.
        let s = crate::schema![string("zeta"), string("alpha"), string("mike")];
        let (record, _) = s.validate(&json!({"mike": "m", "alpha": "a", "zeta": "z"}));
        let keys: Vec<_> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mike"]);
    }

    #[test]
    fn absent_fields_resolve_to_null() {
        let s = crate::schema![string("birthplace")];
        let (record, errors) = s.validate(&json!({}));
        assert!(errors.is_empty());
        assert_eq!(record, json!({"birthplace": null}));
    }

    #[test]
    fn undeclared_keys_are_dropped_without_error() {
        let s = crate::schema![string("known")];
        let (record, errors) = s.validate(&json!({"known": "yes", "unknown": 42}));
        assert!(errors.is_empty());
        assert_eq!(record, json!({"known": "yes"}));
    }

    #[test]
    fn errors_flatten_across_fields_in_declaration_order() {
        let s = crate::schema![
            integer("age").not_null(),
            string("name").min_length(2),
        ];
        let (_, errors) = s.validate(&json!({"name": "x"}));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].message, "age must not be null");
        assert_eq!(errors.errors()[1].message, "name has a min length of 2");
    }

    #[test]
    fn test_is_consistent_with_validate() {
        let s = crate::schema![integer("age").not_null().positive()];
        assert!(s.test(&json!({"age": 30})));
        assert!(!s.test(&json!({"age": -1})));
        assert!(!s.test(&json!({})));
    }

    #[test]
    fn empty_schema_accepts_anything() {
        let s = Schema::new(Vec::<Field>::new());
        assert!(s.is_empty());
        assert!(s.test(&json!({"whatever": 1})));
        let (record, errors) = s.validate(&json!({"whatever": 1}));
        assert_eq!(record, json!({}));
        assert!(errors.is_empty());
    }

    #[test]
    fn non_object_record_reads_as_all_absent() {
        let s = crate::schema![string("name")];
        assert!(s.test(&json!("not an object")));
        let (record, errors) = s.validate(&json!(null));
        assert!(errors.is_empty());
        assert_eq!(record, json!({"name": null}));
    }

    #[test]
    fn field_lookup() {
        let s = crate::schema![string("name")];
        assert!(s.field("name").is_some());
        assert!(s.field("ghost").is_none());
    }
}

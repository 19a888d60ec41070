//! Error types for validation failures
//!
//! Failures are plain inspectable values carrying a user-presentable
//! message; the engine collects them, it never aborts. All string fields
//! use `Cow<'static, str>` for zero-allocation static error codes.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// The `message` is the complete user-facing text and always embeds the
/// field name and the relevant configured threshold, e.g.
/// `"lastname has a max length of 12"`. The `code` identifies the failing
/// constraint kind for programmatic handling.
///
/// # Examples
///
/// ```
/// use datashape::ValidationError;
///
/// let error = ValidationError::new("not_zero", "kills must not be 0")
///     .with_field("kills");
/// assert_eq!(error.to_string(), "kills must not be 0");
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Constraint code, e.g. "min_length", "type_mismatch", "not_null".
    pub code: Cow<'static, str>,

    /// Complete human-readable message, already naming the field.
    pub message: Cow<'static, str>,

    /// The field the failure belongs to.
    pub field: Option<Cow<'static, str>>,

    /// Configured thresholds and observed values, as ordered key-value
    /// pairs (typically 0-2 entries).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error from a code and a message.
    ///
    /// Static strings do not allocate; `format!`-built messages do.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field name this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter, e.g. the configured threshold that was violated.
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
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered, flat collection of validation failures.
///
/// Returned by [`Field::validate`](crate::Field::validate) and
/// [`Schema::validate`](crate::Schema::validate); the order is pipeline
/// order within a field and declaration order across fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a single error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error from another collection, preserving order.
    pub fn append(&mut self, other: &mut ValidationErrors) {
        self.errors.append(&mut other.errors);
    }

    /// Returns true if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All recorded failures, in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The user-presentable messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Converts to a `Result`, yielding `ok_value` when no failure was
    /// recorded.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("not_null", "age must not be null");
        assert_eq!(error.code, "not_null");
        assert_eq!(error.to_string(), "age must not be null");
    }

    #[test]
    fn error_with_field_and_params() {
        let error = ValidationError::new("min_length", "uuid has a min length of 4")
            .with_field("uuid")
            .with_param("min", "4");

        assert_eq!(error.field.as_deref(), Some("uuid"));
        assert_eq!(error.param("min"), Some("4"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("not_null", "x must not be null");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn collection_preserves_order() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new("a", "first"));
        errors.push(ValidationError::new("b", "second"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages(), vec!["first", "second"]);
    }

    #[test]
    fn collection_into_result() {
        let empty = ValidationErrors::new();
        assert!(empty.into_result(42).is_ok());

        let errors: ValidationErrors =
            std::iter::once(ValidationError::new("x", "boom")).collect();
        assert!(errors.into_result(42).is_err());
    }

    #[test]
    fn collection_display_lists_messages() {
        let errors: ValidationErrors = [
            ValidationError::new("a", "first failure"),
            ValidationError::new("b", "second failure"),
        ]
        .into_iter()
        .collect();

        let rendered = errors.to_string();
        assert!(rendered.contains("2 error(s)"));
        assert!(rendered.contains("1. first failure"));
        assert!(rendered.contains("2. second failure"));
    }
}

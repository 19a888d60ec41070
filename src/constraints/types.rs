//! Variant type checks
//!
//! Every field variant seeds pipeline position 0 with one of these. A
//! `Null` value (present or absent — the engine maps absence to `Null`)
//! always satisfies the type check alone; nullability is governed
//! exclusively by [`NotNull`](crate::constraints::NotNull).

use crate::foundation::{ValidationError, kind_of};

crate::constraint! {
    /// Accepts strings and `Null`.
    pub IsString;
    rule(name, value) { value.is_null() || value.is_string() }
    error(name, value) {
        ValidationError::new(
            "type_mismatch",
            format!("{name} must be a string. Received {}", kind_of(value)),
        )
        .with_param("expected", "string")
        .with_param("received", kind_of(value))
    }
    fn is_string();
}

crate::constraint! {
    /// Accepts whole numbers and `Null`.
    ///
    /// Floats and numeric strings are rejected: `5.5` and `"5"` are both
    /// type mismatches for an integer field.
    pub IsInteger;
    rule(name, value) {
        value.is_null() || value.as_i64().is_some() || value.as_u64().is_some()
    }
    error(name, value) {
        ValidationError::new(
            "type_mismatch",
            format!("{name} must be an integer. Received {}", kind_of(value)),
        )
        .with_param("expected", "integer")
        .with_param("received", kind_of(value))
    }
    fn is_integer();
}

crate::constraint! {
    /// Accepts any number and `Null`.
    ///
    /// JSON numbers are always finite, so no separate finiteness check is
    /// needed.
    pub IsFloat;
    rule(name, value) { value.is_null() || value.is_number() }
    error(name, value) {
        ValidationError::new(
            "type_mismatch",
            format!("{name} must be a float. Received {}", kind_of(value)),
        )
        .with_param("expected", "float")
        .with_param("received", kind_of(value))
    }
    fn is_float();
}

crate::constraint! {
    /// Accepts booleans and `Null`.
    pub IsBoolean;
    rule(name, value) { value.is_null() || value.is_boolean() }
    error(name, value) {
        ValidationError::new(
            "type_mismatch",
            format!("{name} must be a boolean. Received {}", kind_of(value)),
        )
        .with_param("expected", "boolean")
        .with_param("received", kind_of(value))
    }
    fn is_boolean();
}

//! Numeric constraints
//!
//! Shared by integer and float fields. These only ever fail on numbers;
//! `Null` and non-numeric values pass through untouched and are left to
//! the type check and `not_null` to report. Bounds are carried as `f64`
//! so one implementation serves both variants; whole numbers still render
//! without a decimal point in messages.

use crate::foundation::ValidationError;

crate::constraint! {
    /// Rejects negative numbers. Zero is allowed — the name is
    /// historical; pair with [`NotZero`] to exclude it.
    pub Positive;
    rule(name, value) { value.as_f64().is_none_or(|n| n >= 0.0) }
    error(name, value) {
        ValidationError::new("positive", format!("{name} must not be negative"))
    }
    fn positive();
}

crate::constraint! {
    /// Rejects zero.
    pub NotZero;
    rule(name, value) { value.as_f64().is_none_or(|n| n != 0.0) }
    error(name, value) {
        ValidationError::new("not_zero", format!("{name} must not be 0"))
    }
    fn not_zero();
}

crate::constraint! {
    /// Requires `min <= value <= max` (inclusive on both ends).
    #[derive(Copy, PartialEq)]
    pub Range { min: f64, max: f64 };
    rule(self, name, value) {
        value.as_f64().is_none_or(|n| n >= self.min && n <= self.max)
    }
    error(self, name, value) {
        ValidationError::new(
            "range",
            format!("{name} must be between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
    }
    new(min: f64, max: f64) {
        assert!(min <= max, "range requires min <= max, got {min} > {max}");
        Self { min, max }
    }
    fn range(min: f64, max: f64);
}

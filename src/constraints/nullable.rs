//! Nullability constraint
//!
//! Type checks always let `Null` through, so a field with no [`NotNull`]
//! attached treats absence as valid. Attaching `not_null()` is the only
//! way to reject a missing value.

use crate::foundation::ValidationError;

crate::constraint! {
    /// Rejects `Null` (and therefore absent) values.
    pub NotNull;
    rule(name, value) { !value.is_null() }
    error(name, value) {
        ValidationError::new("not_null", format!("{name} must not be null"))
    }
    fn not_null();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Constraint, Outcome};
    use serde_json::json;

    #[test]
    fn rejects_null_only() {
        let c = not_null();
        assert!(c.evaluate("age", &json!(null)).is_failure());
        assert!(!c.evaluate("age", &json!(0)).is_failure());
        assert!(!c.evaluate("age", &json!("")).is_failure());
        assert!(!c.evaluate("age", &json!(false)).is_failure());
    }

    #[test]
    fn message() {
        let Outcome::Failure(err) = not_null().evaluate("catchphrase", &json!(null)) else {
            panic!("expected failure");
        };
        assert_eq!(err.message, "catchphrase must not be null");
    }
}

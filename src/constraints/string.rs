//! String constraints
//!
//! Length is measured in Unicode scalar values. The character-class
//! checks mirror the anchored ASCII patterns `^[a-zA-Z]+$`, `^[0-9]+$`
//! and `^[a-zA-Z0-9]+$`: an empty string fails them. A non-string value
//! (including `Null`) fails every constraint in this module; pair with
//! the string type check, which reports the mismatch with a clearer
//! message first.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap()
});

// ============================================================================
// LENGTH
// ============================================================================

crate::constraint! {
    /// Requires at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    rule(self, name, value) {
        value.as_str().is_some_and(|s| s.chars().count() >= self.min)
    }
    error(self, name, value) {
        ValidationError::new("min_length", format!("{name} has a min length of {}", self.min))
            .with_param("min", self.min.to_string())
    }
    fn min_length(min: usize);
}

crate::constraint! {
    /// Allows at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    rule(self, name, value) {
        value.as_str().is_some_and(|s| s.chars().count() <= self.max)
    }
    error(self, name, value) {
        ValidationError::new("max_length", format!("{name} has a max length of {}", self.max))
            .with_param("max", self.max.to_string())
    }
    fn max_length(max: usize);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::constraint! {
    /// Letters only (`a-z`, `A-Z`), at least one.
    pub Alphabetical;
    rule(name, value) {
        value.as_str().is_some_and(|s| {
            !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
        })
    }
    error(name, value) {
        ValidationError::new(
            "alphabetical",
            format!("{name} must only use alphabetical characters"),
        )
    }
    fn alphabetical();
}

crate::constraint! {
    /// Digits only (`0-9`), at least one.
    pub Numeric;
    rule(name, value) {
        value.as_str().is_some_and(|s| {
            !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
        })
    }
    error(name, value) {
        ValidationError::new(
            "numeric",
            format!("{name} must only use numeric characters"),
        )
    }
    fn numeric();
}

crate::constraint! {
    /// Letters and digits only, at least one.
    pub Alphanumeric;
    rule(name, value) {
        value.as_str().is_some_and(|s| {
            !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
        })
    }
    error(name, value) {
        ValidationError::new(
            "alphanumeric",
            format!("{name} must only use alphanumeric characters"),
        )
    }
    fn alphanumeric();
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

crate::constraint! {
    /// The value must equal one of the allowed values.
    pub Enumerated { allowed: Vec<Value> };
    rule(self, name, value) { self.allowed.contains(value) }
    error(self, name, value) {
        ValidationError::new(
            "enumerated",
            format!("Acceptable values for {name} are: {}", join_values(&self.allowed)),
        )
    }
    fn enumerated(allowed: Vec<Value>);
}

// Strings render bare, everything else as JSON.
fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// EMAIL
// ============================================================================

crate::constraint! {
    /// Loose email shape check: `local@domain.tld`, case-insensitive.
    pub Email;
    rule(name, value) { value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    error(name, value) {
        ValidationError::new("email", format!("{name} must be an email address"))
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Constraint, Outcome};
    use serde_json::json;

    fn message(outcome: Outcome) -> String {
        let Outcome::Failure(err) = outcome else {
            panic!("expected failure");
        };
        err.message.into_owned()
    }

    #[test]
    fn min_length_counts_chars() {
        let c = min_length(5);
        assert!(!c.evaluate("word", &json!("hello")).is_failure());
        assert!(c.evaluate("word", &json!("hi")).is_failure());
        // Two scalar values, eight bytes.
        assert!(c.evaluate("word", &json!("\u{1f44b}\u{1f30d}")).is_failure());
    }

    #[test]
    fn min_length_fails_on_null() {
        assert!(min_length(4).evaluate("uuid", &json!(null)).is_failure());
    }

    #[test]
    fn min_length_message() {
        assert_eq!(
            message(min_length(4).evaluate("uuid", &json!("abc"))),
            "uuid has a min length of 4",
        );
    }

    #[test]
    fn max_length_limits() {
        let c = max_length(5);
        assert!(!c.evaluate("greeting", &json!("howdy")).is_failure());
        assert!(c.evaluate("greeting", &json!("howdy partner")).is_failure());
        assert_eq!(
            message(c.evaluate("greeting", &json!("howdy partner"))),
            "greeting has a max length of 5",
        );
    }

    #[test]
    fn length_checks_accept_the_empty_string() {
        // Emptiness is not absence: "" has length 0 and satisfies any
        // max_length, and min_length(0) as well.
        assert!(!max_length(5).evaluate("note", &json!("")).is_failure());
        assert!(!min_length(0).evaluate("note", &json!("")).is_failure());
        assert!(min_length(1).evaluate("note", &json!("")).is_failure());
    }

    #[test]
    fn alphabetical_rejects_digits_and_empty() {
        let c = alphabetical();
        assert!(!c.evaluate("droid", &json!("cthreepo")).is_failure());
        assert!(c.evaluate("droid", &json!("c3po")).is_failure());
        assert!(c.evaluate("droid", &json!("")).is_failure());
        assert_eq!(
            message(c.evaluate("droid", &json!("c3po"))),
            "droid must only use alphabetical characters",
        );
    }

    #[test]
    fn numeric_rejects_letters() {
        let c = numeric();
        assert!(!c.evaluate("droid", &json!("2187")).is_failure());
        assert!(c.evaluate("droid", &json!("r2d2")).is_failure());
        assert!(c.evaluate("droid", &json!("")).is_failure());
    }

    #[test]
    fn alphanumeric_rejects_punctuation() {
        let c = alphanumeric();
        assert!(!c.evaluate("handle", &json!("c3po")).is_failure());
        assert!(c.evaluate("handle", &json!("c-3po")).is_failure());
    }

    #[test]
    fn enumerated_membership() {
        let c = enumerated(vec![json!("red"), json!("green")]);
        assert!(!c.evaluate("color", &json!("red")).is_failure());
        assert!(c.evaluate("color", &json!("blue")).is_failure());
        assert_eq!(
            message(c.evaluate("color", &json!("blue"))),
            "Acceptable values for color are: red, green",
        );
    }

    #[test]
    fn enumerated_non_string_values_render_as_json() {
        let c = enumerated(vec![json!(1), json!(2)]);
        assert_eq!(
            message(c.evaluate("level", &json!(3))),
            "Acceptable values for level are: 1, 2",
        );
    }

    #[test]
    fn email_shape() {
        let c = email();
        assert!(!c.evaluate("contact", &json!("juan@riviera.io")).is_failure());
        assert!(!c.evaluate("contact", &json!("JUAN@RIVIERA.IO")).is_failure());
        assert!(c.evaluate("contact", &json!("not-an-email")).is_failure());
        assert!(c.evaluate("contact", &json!("a@b")).is_failure());
        assert_eq!(
            message(c.evaluate("contact", &json!("nope"))),
            "contact must be an email address",
        );
    }
}

//! Pipeline semantics at the single-field level: transform propagation,
//! short-circuit `test` versus accumulating `validate`, and the closing
//! type re-check.

use datashape::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn trim() -> impl Fn(&str, &Value) -> Outcome {
    |_name: &str, value: &Value| match value.as_str() {
        Some(s) if s != s.trim() => Outcome::Transformed(Value::from(s.trim())),
        _ => Outcome::Unchanged,
    }
}

fn double() -> impl Fn(&str, &Value) -> Outcome {
    |_name: &str, value: &Value| match value.as_i64() {
        Some(n) => Outcome::Transformed(Value::from(n * 2)),
        None => Outcome::Unchanged,
    }
}

fn always_fail(code: &'static str) -> impl Fn(&str, &Value) -> Outcome {
    move |name: &str, _value: &Value| {
        Outcome::Failure(
            ValidationError::new(code, format!("{name} rejected by {code}"))
                .with_field(name.to_owned()),
        )
    }
}

#[test]
fn transforms_feed_downstream_constraints() {
    // trim first, then the length check sees the trimmed value
    let field = string("title").must(trim()).min_length(5);
    assert!(field.test(&json!("  hello  ")));

    let (value, errors) = field.validate(&json!("  hello  "));
    assert!(errors.is_empty());
    assert_eq!(value, json!("hello"));
}

#[test]
fn validate_keeps_going_past_failures() {
    let field = string("title")
        .must(always_fail("first"))
        .must(always_fail("second"));

    let (_, errors) = field.validate(&json!("x"));
    assert_eq!(
        errors.messages(),
        vec![
            "title rejected by first",
            "title rejected by second",
        ]
    );
}

#[test]
fn test_stops_at_the_first_failure() {
    // a failing constraint whose evaluation is observable through a counter
    use std::sync::atomic::{AtomicUsize, Ordering};
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let field = string("title").must(always_fail("first")).must(
        |_name: &str, _value: &Value| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Outcome::Unchanged
        },
    );

    assert!(!field.test(&json!("x")));
    assert_eq!(CALLS.load(Ordering::SeqCst), 0);
}

#[test]
fn test_and_validate_agree_on_acceptance() {
    let field = integer("age").not_null().positive().not_zero();
    for value in [
        json!(3),
        json!(0),
        json!(-1),
        json!(null),
        json!("three"),
        json!(2.5),
    ] {
        let (_, errors) = field.validate(&value);
        assert_eq!(field.test(&value), errors.is_empty(), "value: {value}");
    }
}

#[test]
fn type_check_runs_again_on_the_final_value() {
    // a transform that turns the string into a number is caught at the end
    let field = string("count").must(|_name: &str, value: &Value| {
        match value.as_str().and_then(|s| s.parse::<i64>().ok()) {
            Some(n) => Outcome::Transformed(Value::from(n)),
            None => Outcome::Unchanged,
        }
    });

    assert!(!field.test(&json!("42")));
    let (value, errors) = field.validate(&json!("42"));
    assert_eq!(value, json!(42));
    assert_eq!(
        errors.messages(),
        vec!["count must be a string. Received integer"]
    );
}

#[test]
fn null_passes_everything_except_not_null() {
    let lenient = integer("n").positive().not_zero();
    assert!(lenient.test(&Value::Null));

    let strict = integer("n").not_null();
    let (_, errors) = strict.validate(&Value::Null);
    assert_eq!(errors.messages(), vec!["n must not be null"]);
}

#[test]
fn length_constraints_reject_null() {
    let field = string("name").min_length(1);
    assert!(!field.test(&Value::Null));
    let (_, errors) = field.validate(&Value::Null);
    assert_eq!(errors.messages(), vec!["name has a min length of 1"]);
}

#[test]
fn transforms_resume_after_a_failure() {
    // the failure is recorded and later transforms still apply
    let field = integer("n").must(double()).must(always_fail("veto")).must(double());

    let (value, errors) = field.validate(&json!(5));
    assert_eq!(value, json!(20));
    assert_eq!(errors.len(), 1);
}

#[test]
fn variant_builders_order_constraints_after_the_type_check() {
    let field: datashape::Field = integer("age").not_null().positive().into();
    assert_eq!(field.name(), "age");
    // type check + not_null + positive
    assert_eq!(field.len(), 3);
}

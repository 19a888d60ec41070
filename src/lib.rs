//! # datashape
//!
//! A declarative, composable validation engine for JSON records.
//!
//! Fields accumulate an ordered pipeline of constraints through a fluent
//! builder; a [`Schema`] groups fields and checks whole records,
//! producing a sanitized copy plus a flat list of user-presentable
//! violations.
//!
//! ## Quick Start
//!
//! ```
//! use datashape::{integer, schema, string};
//! use serde_json::json;
//!
//! let cowboy = schema![
//!     string("birthplace"),
//!     string("lastname").max_length(12).not_null(),
//!     integer("age").not_null().positive().not_zero(),
//! ];
//!
//! let (record, errors) = cowboy.validate(&json!({
//!     "birthplace": "Rio Grande",
//!     "lastname": "Riviera",
//!     "age": 46,
//! }));
//! assert!(errors.is_empty());
//! assert_eq!(record["lastname"], json!("Riviera"));
//! ```
//!
//! ## Semantics in brief
//!
//! - A missing value is `Value::Null`, and `Null` always satisfies a
//!   field's type check; only [`not_null`](Field::not_null) rejects it.
//! - [`Field::test`] short-circuits on the first violation;
//!   [`Field::validate`] runs the whole pipeline and reports every
//!   violation in order.
//! - Constraints may transform the running value; after the pipeline,
//!   the type check runs once more against the final value, so a
//!   transform that changes the value's kind is still caught.
//! - A schema is an allow-list: record keys it does not declare are
//!   dropped without comment.
//!
//! ## Custom constraints
//!
//! Use the [`constraint!`] macro for declarative one-liners, implement
//! [`Constraint`] for configurable checks, or pass a closure straight to
//! `must`:
//!
//! ```
//! use datashape::{string, Outcome, Value};
//!
//! let shout = string("warcry").must(|name: &str, value: &Value| {
//!     match value.as_str() {
//!         Some(s) if s.ends_with('!') => Outcome::Unchanged,
//!         _ => Outcome::fail("shout", format!("{name} must end with \"!\"")),
//!     }
//! });
//! ```

pub mod constraints;
pub mod field;
pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;

pub use field::Field;
pub use fields::{
    BooleanField, FloatField, IntegerField, StringField, boolean, float, integer, string,
};
pub use foundation::{Constraint, Outcome, ValidationError, ValidationErrors};
pub use schema::Schema;

/// Records and field values are plain JSON values.
pub use serde_json::Value;

//! Field variants
//!
//! Typed constructors over the generic [`Field`](crate::Field) pipeline.
//! Each variant seeds pipeline position 0 with its type check and then
//! exposes only the builder methods that make sense for that kind of
//! value, so attaching, say, `range` to a string field is a compile
//! error rather than a runtime surprise.
//!
//! The set of variants is closed; extension happens through each
//! variant's `must` method, which accepts any
//! [`Constraint`](crate::Constraint) or closure.

pub mod boolean;
pub mod float;
pub mod integer;
pub mod string;

pub use boolean::{BooleanField, boolean};
pub use float::{FloatField, float};
pub use integer::{IntegerField, integer};
pub use string::{StringField, string};

//! Core validation types and traits
//!
//! The fundamental building blocks of the engine:
//!
//! - **Traits**: [`Constraint`] (one pipeline step), with a blanket impl
//!   for `Fn(&str, &Value) -> Outcome` closures
//! - **Outcomes**: [`Outcome`] — unchanged / transformed / failure
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! Control flows strictly downward: a [`Schema`](crate::Schema) delegates
//! each record key to its [`Field`](crate::Field), and a field threads an
//! accumulating value through its ordered constraint pipeline. Constraints
//! never call back upward; they only report an [`Outcome`].
//!
//! Evaluation is pure and synchronous. A fully built field or schema can
//! be evaluated concurrently from any number of threads; only pipeline
//! construction (the fluent builder calls) requires exclusive access,
//! which the consuming builder signatures enforce at compile time.

pub mod error;
pub mod outcome;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use outcome::{Outcome, kind_of};
pub use traits::{BoxedConstraint, Constraint};

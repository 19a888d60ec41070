//! Prelude module for convenient imports.
//!
//! A single `use datashape::prelude::*;` brings in the field
//! constructors, the schema type, the core trait and outcome types, and
//! every built-in constraint.
//!
//! # Examples
//!
//! ```
//! use datashape::prelude::*;
//! use serde_json::json;
//!
//! let login = schema![
//!     string("handle").not_null().alphanumeric().min_length(3),
//!     boolean("remember_me"),
//! ];
//! assert!(login.test(&json!({"handle": "juanc", "remember_me": true})));
//! ```

// ============================================================================
// FOUNDATION: core trait, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    BoxedConstraint, Constraint, Outcome, ValidationError, ValidationErrors, kind_of,
};

// ============================================================================
// FIELDS AND SCHEMA
// ============================================================================

pub use crate::field::Field;
pub use crate::fields::{
    BooleanField, FloatField, IntegerField, StringField, boolean, float, integer, string,
};
pub use crate::schema::Schema;

// ============================================================================
// CONSTRAINTS: all built-ins
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::constraints::*;

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{constraint, schema};

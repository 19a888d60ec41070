//! Built-in constraints
//!
//! Ready-made pipeline steps, grouped by the field variant that exposes
//! them:
//!
//! - **All variants**: the type checks ([`IsString`], [`IsInteger`],
//!   [`IsFloat`], [`IsBoolean`]) and [`NotNull`]
//! - **String**: [`MinLength`], [`MaxLength`], [`Alphabetical`],
//!   [`Numeric`], [`Alphanumeric`], [`Enumerated`], [`Email`]
//! - **Integer / Float**: [`Positive`], [`NotZero`], [`Range`]
//!
//! Each comes with a snake_case factory function matching the
//! builder-method names; the field variants call these internally, and
//! they can also be attached directly through
//! [`must`](crate::Field::must) or combined with custom constraints.
//! Everything here is declared with the [`constraint!`](crate::constraint)
//! macro except where a transform is involved (none of the built-ins
//! transform).

pub mod nullable;
pub mod numeric;
pub mod string;
pub mod types;

pub use nullable::{NotNull, not_null};
pub use numeric::{NotZero, Positive, Range, not_zero, positive, range};
pub use string::{
    Alphabetical, Alphanumeric, Email, Enumerated, MaxLength, MinLength, Numeric, alphabetical,
    alphanumeric, email, enumerated, max_length, min_length, numeric,
};
pub use types::{IsBoolean, IsFloat, IsInteger, IsString, is_boolean, is_float, is_integer, is_string};

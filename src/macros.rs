//! Macros for declaring constraints with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`] — create a complete constraint (struct + `Constraint`
//!   impl + factory fn) from a `rule`/`error` pair
//! - [`schema!`] — build a [`Schema`](crate::Schema) from mixed field
//!   variants
//!
//! # Examples
//!
//! ```rust,ignore
//! use datashape::constraint;
//! use datashape::foundation::ValidationError;
//!
//! // Unit constraint (no configuration)
//! constraint! {
//!     pub NotEmpty;
//!     rule(name, value) { value.as_str().is_some_and(|s| !s.is_empty()) }
//!     error(name, value) {
//!         ValidationError::new("not_empty", format!("{name} must not be empty"))
//!     }
//!     fn not_empty();
//! }
//!
//! // Configured constraint
//! constraint! {
//!     pub MinLength { min: usize };
//!     rule(self, name, value) {
//!         value.as_str().is_some_and(|s| s.chars().count() >= self.min)
//!     }
//!     error(self, name, value) {
//!         ValidationError::new("min_length", format!("{name} has a min length of {}", self.min))
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a complete constraint: struct definition, [`Constraint`]
/// implementation, constructor, and factory function.
///
/// The `rule` block receives the field name and the candidate value
/// (`&str`, `&Value`) and returns `bool`; a true result yields
/// [`Outcome::Unchanged`], a false result evaluates the `error` block and
/// yields [`Outcome::Failure`]. The generated failure is automatically
/// tagged with the field name via `with_field`, so `error` blocks only
/// build the code and message. Constraints that transform the running
/// value implement [`Constraint`] by hand instead.
///
/// `#[derive(Debug, Clone)]` is always applied; add extra derives via
/// `#[derive(...)]`.
///
/// [`Constraint`]: crate::foundation::Constraint
/// [`Outcome::Unchanged`]: crate::foundation::Outcome::Unchanged
/// [`Outcome::Failure`]: crate::foundation::Outcome::Failure
#[macro_export]
macro_rules! constraint {
    // ── Unit constraint (no fields) + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($rname:ident, $rval:ident) $rule:block
        error($ename:ident, $eval:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn evaluate(&self, $rname: &str, $rval: &$crate::Value) -> $crate::foundation::Outcome {
                if $rule {
                    $crate::foundation::Outcome::Unchanged
                } else {
                    let ($ename, $eval) = ($rname, $rval);
                    $crate::foundation::Outcome::Failure($err.with_field($ename.to_owned()))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $rname:ident, $rval:ident) $rule:block
        error($self2:ident, $ename:ident, $eval:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $rname, $rval) $rule
            error($self2, $ename, $eval) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $rname:ident, $rval:ident) $rule:block
        error($self2:ident, $ename:ident, $eval:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn evaluate(&$self_, $rname: &str, $rval: &$crate::Value) -> $crate::foundation::Outcome {
                if $rule {
                    $crate::foundation::Outcome::Unchanged
                } else {
                    let ($ename, $eval) = ($rname, $rval);
                    $crate::foundation::Outcome::Failure($err.with_field($ename.to_owned()))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`Schema`](crate::Schema) from a comma-separated list of
/// fields of any variant.
///
/// ```rust,ignore
/// let cowboy = schema![
///     string("birthplace"),
///     string("catchphrase").not_null(),
///     integer("age").not_null().positive().not_zero(),
/// ];
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::Schema::new(::core::iter::empty::<$crate::Field>())
    };
    ($($field:expr),+ $(,)?) => {
        $crate::Schema::new([$($crate::Field::from($field)),+])
    };
}

// ============================================================================
// TESTS
// ============================================================================

//! Macros for creating evaluators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`evaluator!`] — Create a complete leaf evaluator (struct + Evaluate
//!   impl + factory fn)
//! - [`evaluators!`] — Build a boxed child list for a combinator
//!
//! # Examples
//!
//! ```rust,ignore
//! use crossval::evaluator;
//! use crossval::config::Value;
//!
//! evaluator! {
//!     pub AtLeast { min: i64 } for Value::Int => (n) as "int";
//!     rule(self, n) { *n >= self.min }
//!     detail(self, n) { format!("must be at least {}, got {n}", self.min) }
//!     fn at_least(min: i64);
//! }
//! ```

// ============================================================================
// EVALUATOR MACRO
// ============================================================================

/// Creates a complete leaf evaluator: struct definition, `Evaluate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// The generated evaluator follows the leaf discipline: a `Null` or
/// `Unknown` anchor passes silently (presence is [`Required`]'s job, unknown
/// values settle later), and a known value that does not match the declared
/// variant is a definition bug, reported as a `Value Type Mismatch`.
///
/// [`Required`]: crate::validators::Required
///
/// # Variants
///
/// **Struct with fields + factory fn**:
/// ```rust,ignore
/// evaluator! {
///     pub AtLeast { min: i64 } for Value::Int => (n) as "int";
///     rule(self, n) { *n >= self.min }
///     detail(self, n) { format!("must be at least {}, got {n}", self.min) }
///     fn at_least(min: i64);
/// }
/// ```
///
/// **Struct with fields, no factory**:
/// ```rust,ignore
/// evaluator! {
///     pub AtLeast { min: i64 } for Value::Int => (n) as "int";
///     rule(self, n) { *n >= self.min }
///     detail(self, n) { format!("must be at least {}, got {n}", self.min) }
/// }
/// ```
#[macro_export]
macro_rules! evaluator {
    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? }
            for $variant:path => ($bind:ident) as $kind:literal;
        rule($self_:ident, $inp:ident) $rule:block
        detail($self2:ident, $einp:ident) $detail:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::evaluator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $variant => ($bind) as $kind;
            rule($self_, $inp) $rule
            detail($self2, $einp) $detail
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields, no factory ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? }
            for $variant:path => ($bind:ident) as $kind:literal;
        rule($self_:ident, $inp:ident) $rule:block
        detail($self2:ident, $einp:ident) $detail:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Evaluate for $name {
            fn evaluate(
                &$self_,
                request: &$crate::foundation::Request<'_>,
            ) -> $crate::foundation::Diagnostics {
                let $crate::config::TypedValue::Known(value) = &request.value else {
                    return $crate::foundation::Diagnostics::new();
                };
                match value {
                    $variant($bind) => {
                        let $inp = $bind;
                        if $rule {
                            $crate::foundation::Diagnostics::new()
                        } else {
                            let $einp = $inp;
                            $crate::foundation::Diagnostic::error(
                                request.path.clone(),
                                "Invalid Attribute Value",
                                $detail,
                            )
                            .into()
                        }
                    }
                    other => $crate::foundation::Diagnostic::type_mismatch(
                        request.path.clone(),
                        format!(
                            "expected a {} value, the schema supplied a {}",
                            $kind,
                            other.kind()
                        ),
                    )
                    .into(),
                }
            }
        }
    };
}

// ============================================================================
// EVALUATORS MACRO
// ============================================================================

/// Builds the boxed child list a combinator takes.
///
/// ```rust,ignore
/// let checks = any(evaluators![
///     required(),
///     conflicts_with([PathExpression::root("legacy")]),
/// ]);
/// ```
#[macro_export]
macro_rules! evaluators {
    ($($child:expr),* $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($child) as ::std::boxed::Box<dyn $crate::foundation::Evaluate>),*
        ]
    };
}

// ============================================================================
// TESTS
// ============================================================================

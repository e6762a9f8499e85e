//! Combinators for composing evaluators
//!
//! Boolean composition over [`Evaluate`](crate::foundation::Evaluate)
//! implementations. Children are type-erased, so leaves, cross-attribute
//! evaluators, and nested combinators all mix freely:
//!
//! ```rust,ignore
//! let checks = any(evaluators![
//!     all(evaluators![required(), at_least(1)]),
//!     conflicts_with([PathExpression::root("legacy")]),
//! ]);
//! ```
//!
//! [`All`] is conjunction and reports everything, [`Any`] is disjunction and
//! stays quiet as soon as one child passes, [`AnyWithAllWarnings`] is
//! disjunction that still surfaces every child's warnings.

pub mod all;
pub mod any;
pub mod any_with_all_warnings;

pub use all::{All, all};
pub use any::{Any, any};
pub use any_with_all_warnings::{AnyWithAllWarnings, any_with_all_warnings};

use std::fmt;

use crate::foundation::Evaluate;

/// Renders a combinator's children for `Debug` output.
///
/// Boxed trait objects have no derived `Debug`; the evaluator names are the
/// useful part anyway.
pub(crate) fn fmt_children(
    f: &mut fmt::Formatter<'_>,
    combinator: &str,
    children: &[Box<dyn Evaluate>],
) -> fmt::Result {
    write!(f, "{combinator}")?;
    let mut dbg = f.debug_list();
    for child in children {
        dbg.entry(&child.name());
    }
    dbg.finish()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};

    /// Child that always passes.
    pub(crate) struct Pass;

    impl Evaluate for Pass {
        fn evaluate(&self, _request: &Request<'_>) -> Diagnostics {
            Diagnostics::new()
        }
    }

    /// Child that always fails with one error carrying the given summary.
    pub(crate) struct Fail(pub &'static str);

    impl Evaluate for Fail {
        fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
            Diagnostic::error(request.path.clone(), self.0, "always fails").into()
        }
    }

    /// Child that passes but leaves a warning behind.
    pub(crate) struct Warn(pub &'static str);

    impl Evaluate for Warn {
        fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
            Diagnostic::warning(request.path.clone(), self.0, "advisory").into()
        }
    }
}

//! Core validation types and traits
//!
//! The fundamental building blocks of the subsystem:
//!
//! - **Traits**: [`Evaluate`], [`EvaluateExt`] — the one-method capability
//!   implemented by every leaf validator, constraint evaluator, and
//!   combinator;
//! - **Request**: [`Request`] — the per-call view of the anchor attribute and
//!   the configuration snapshot;
//! - **Diagnostics**: [`Diagnostic`], [`Diagnostics`], [`Severity`],
//!   [`Origin`] — severity-tagged findings keyed to attribute paths.
//!
//! # Architecture
//!
//! Evaluators are pure functions of their request. Combinators hold
//! homogeneous collections of `Box<dyn Evaluate>` — composition, not
//! inheritance — so arbitrary validators nest into boolean expressions:
//!
//! ```rust,ignore
//! let checks = any(evaluators![
//!     all(evaluators![required(), at_least(1)]),
//!     conflicts_with([PathExpression::root("legacy")]),
//! ]);
//! ```

pub mod diagnostics;
pub mod traits;

pub use diagnostics::{Diagnostic, Diagnostics, Origin, Severity};
pub use traits::{Evaluate, EvaluateExt, Request};

/// Runs one evaluator against one attribute.
///
/// Convenience entry point for hosts and tests; equivalent to calling
/// [`Evaluate::evaluate`] directly.
#[must_use = "diagnostics must be checked"]
pub fn evaluate<E: Evaluate>(evaluator: &E, request: &Request<'_>) -> Diagnostics {
    evaluator.evaluate(request)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigTree, TypedValue};
    use crate::path::AttributePath;

    struct AlwaysFails;

    impl Evaluate for AlwaysFails {
        fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
            Diagnostic::error(request.path.clone(), "Always Fails", "by construction").into()
        }
    }

    #[test]
    fn evaluate_helper_matches_direct_call() {
        let tree = ConfigTree::new();
        let request = Request::new(&tree, AttributePath::root("bar"), TypedValue::Null);
        assert_eq!(
            evaluate(&AlwaysFails, &request),
            AlwaysFails.evaluate(&request)
        );
    }
}

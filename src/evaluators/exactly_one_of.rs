//! ExactlyOneOf — exactly one attribute in the group must be configured
//!
//! Stricter sibling of [`AtLeastOneOf`](super::AtLeastOneOf): zero configured
//! members is an error, and so is more than one.

use crate::evaluators::{distinct_paths, expression_set, lookup, resolve_targets};
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Validates that exactly one attribute out of the anchor and the target
/// expressions is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactlyOneOf {
    expressions: Vec<PathExpression>,
}

impl ExactlyOneOf {
    /// Creates the evaluator from the companion expressions.
    #[must_use]
    pub fn new(expressions: impl IntoIterator<Item = PathExpression>) -> Self {
        Self {
            expressions: expressions.into_iter().collect(),
        }
    }
}

impl Evaluate for ExactlyOneOf {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        // An unknown anchor may or may not count toward the group; the
        // verdict has to wait for it to settle.
        if request.value.is_unknown() {
            return Diagnostics::new();
        }

        let (paths, mut diagnostics) = resolve_targets(request, &self.expressions);

        let mut configured = usize::from(!request.value.is_null());
        for path in distinct_paths(paths, Some(&request.path)) {
            let Some(value) = lookup(request.config, &path, &mut diagnostics) else {
                continue;
            };
            if value.is_unknown() {
                // The count cannot be pinned down yet; only authoring bugs
                // found so far survive the deferral.
                return diagnostics;
            }
            if !value.is_null() {
                configured += 1;
            }
        }

        if configured != 1 {
            let set = expression_set(&request.expression, &self.expressions);
            let detail = if configured == 0 {
                format!("Exactly one of these attributes must be specified: {set}")
            } else {
                format!("{configured} attributes specified when one (and only one) of {set} is required")
            };
            diagnostics.push(Diagnostic::error(
                request.path.clone(),
                "Invalid Attribute Combination",
                detail,
            ));
        }
        diagnostics
    }
}

/// Creates an [`ExactlyOneOf`] evaluator.
#[must_use]
pub fn exactly_one_of(expressions: impl IntoIterator<Item = PathExpression>) -> ExactlyOneOf {
    ExactlyOneOf::new(expressions)
}

// ============================================================================
// TESTS
// ============================================================================

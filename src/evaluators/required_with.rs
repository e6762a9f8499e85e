//! RequiredWith — configuring the anchor requires its companions
//!
//! The inverse direction of [`ConflictsWith`](super::ConflictsWith): once the
//! anchor is set, every target attribute must be set as well.

use crate::evaluators::{distinct_paths, lookup, resolve_targets};
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Validates that every target attribute is configured whenever the anchor
/// is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredWith {
    expressions: Vec<PathExpression>,
}

impl RequiredWith {
    /// Creates the evaluator from the required companion expressions.
    #[must_use]
    pub fn new(expressions: impl IntoIterator<Item = PathExpression>) -> Self {
        Self {
            expressions: expressions.into_iter().collect(),
        }
    }
}

impl Evaluate for RequiredWith {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        // The requirement only kicks in for a configured anchor.
        if request.value.is_null() {
            return Diagnostics::new();
        }

        let (paths, mut diagnostics) = resolve_targets(request, &self.expressions);

        let mut findings = Diagnostics::new();
        for path in distinct_paths(paths, Some(&request.path)) {
            let Some(value) = lookup(request.config, &path, &mut diagnostics) else {
                continue;
            };
            if value.is_unknown() {
                // A target may yet be filled in at apply time; hold every
                // verdict until the tree settles. Authoring bugs stay.
                return diagnostics;
            }
            if value.is_null() {
                findings.push(Diagnostic::error(
                    request.path.clone(),
                    "Invalid Attribute Combination",
                    format!(
                        "Attribute \"{path}\" must be specified when \"{anchor}\" is specified.",
                        anchor = request.path,
                    ),
                ));
            }
        }
        diagnostics.append(findings);
        diagnostics
    }
}

/// Creates a [`RequiredWith`] evaluator.
#[must_use]
pub fn required_with(expressions: impl IntoIterator<Item = PathExpression>) -> RequiredWith {
    RequiredWith::new(expressions)
}

// ============================================================================
// TESTS
// ============================================================================

//! DifferentFrom — the anchor's value must differ from its targets'
//!
//! Unlike the presence-based evaluators, this one compares actual values: a
//! configured anchor may not hold the same value as any configured target.

use crate::evaluators::{distinct_paths, lookup, resolve_targets};
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Validates that the anchor's value differs from every target's value.
///
/// Values of different kinds are simply different; comparing a string
/// against an int is a pass, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentFrom {
    expressions: Vec<PathExpression>,
}

impl DifferentFrom {
    /// Creates the evaluator from the expressions to compare against.
    #[must_use]
    pub fn new(expressions: impl IntoIterator<Item = PathExpression>) -> Self {
        Self {
            expressions: expressions.into_iter().collect(),
        }
    }
}

impl Evaluate for DifferentFrom {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        // No value, nothing to compare. An unknown anchor could still end up
        // equal to a target, so the comparison waits for it.
        if request.value.is_null() || request.value.is_unknown() {
            return Diagnostics::new();
        }

        let (paths, mut diagnostics) = resolve_targets(request, &self.expressions);

        let mut findings = Diagnostics::new();
        for path in distinct_paths(paths, Some(&request.path)) {
            let Some(value) = lookup(request.config, &path, &mut diagnostics) else {
                continue;
            };
            if value.is_unknown() {
                // Any verdict could flip once this settles.
                return diagnostics;
            }
            if request.value.known_eq(&value) {
                findings.push(Diagnostic::error(
                    request.path.clone(),
                    "Invalid Attribute Combination",
                    format!(
                        "Attribute \"{path}\" cannot have the same value as \"{anchor}\": {value}.",
                        anchor = request.path,
                        value = request.value,
                    ),
                ));
            }
        }
        diagnostics.append(findings);
        diagnostics
    }
}

/// Creates a [`DifferentFrom`] evaluator.
#[must_use]
pub fn different_from(expressions: impl IntoIterator<Item = PathExpression>) -> DifferentFrom {
    DifferentFrom::new(expressions)
}

// ============================================================================
// TESTS
// ============================================================================

//! AtLeastOneOf — the anchor or one of its companions must be configured
//!
//! Attached to an attribute that belongs to a group out of which at least one
//! member must be set. The anchor is the implicit first participant: if it is
//! configured the check passes without resolving anything else.

use crate::evaluators::{distinct_paths, expression_set, lookup, resolve_targets};
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Validates that at least one attribute out of the anchor and the target
/// expressions is configured.
///
/// # Examples
///
/// ```rust,ignore
/// // On attribute "bar": one of bar, foo, baz must be set.
/// let validator = at_least_one_of([
///     PathExpression::root("foo"),
///     PathExpression::root("baz"),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtLeastOneOf {
    expressions: Vec<PathExpression>,
}

impl AtLeastOneOf {
    /// Creates the evaluator from the companion expressions.
    #[must_use]
    pub fn new(expressions: impl IntoIterator<Item = PathExpression>) -> Self {
        Self {
            expressions: expressions.into_iter().collect(),
        }
    }
}

impl Evaluate for AtLeastOneOf {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        // A configured (or not-yet-known) anchor satisfies the group on its
        // own; the targets are not even resolved.
        if !request.value.is_null() {
            return Diagnostics::new();
        }

        let (paths, mut diagnostics) = resolve_targets(request, &self.expressions);

        let mut any_present = false;
        let mut any_unknown = false;
        for path in distinct_paths(paths, None) {
            let Some(value) = lookup(request.config, &path, &mut diagnostics) else {
                continue;
            };
            if value.is_unknown() {
                any_unknown = true;
            } else if !value.is_null() {
                any_present = true;
            }
        }

        // A target that is not yet known may satisfy the group at apply
        // time; no verdict until it settles.
        if any_unknown || any_present {
            return diagnostics;
        }

        diagnostics.push(Diagnostic::error(
            request.path.clone(),
            "Missing Attribute Configuration",
            format!(
                "At least one of these attributes must be specified: {}",
                expression_set(&request.expression, &self.expressions)
            ),
        ));
        diagnostics
    }
}

/// Creates an [`AtLeastOneOf`] evaluator.
#[must_use]
pub fn at_least_one_of(expressions: impl IntoIterator<Item = PathExpression>) -> AtLeastOneOf {
    AtLeastOneOf::new(expressions)
}

// ============================================================================
// TESTS
// ============================================================================

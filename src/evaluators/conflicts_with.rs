//! ConflictsWith — mutually exclusive attributes
//!
//! When the anchor is configured, none of the target attributes may be. Each
//! configured target earns its own diagnostic, so the practitioner sees every
//! clash at once.

use crate::evaluators::{distinct_paths, lookup, resolve_targets};
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Validates that none of the target attributes is configured while the
/// anchor is.
///
/// An unknown target is skipped this pass rather than failing the whole
/// check: the conflict may never materialize, and the other targets still
/// deserve their verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictsWith {
    expressions: Vec<PathExpression>,
}

impl ConflictsWith {
    /// Creates the evaluator from the conflicting expressions.
    #[must_use]
    pub fn new(expressions: impl IntoIterator<Item = PathExpression>) -> Self {
        Self {
            expressions: expressions.into_iter().collect(),
        }
    }
}

impl Evaluate for ConflictsWith {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        // An unconfigured anchor conflicts with nothing. Unknown is not null:
        // it will hold some value, so the clash is already certain.
        if request.value.is_null() {
            return Diagnostics::new();
        }

        let (paths, mut diagnostics) = resolve_targets(request, &self.expressions);

        for path in distinct_paths(paths, Some(&request.path)) {
            let Some(value) = lookup(request.config, &path, &mut diagnostics) else {
                continue;
            };
            if value.is_null() || value.is_unknown() {
                continue;
            }
            diagnostics.push(Diagnostic::error(
                request.path.clone(),
                "Invalid Attribute Combination",
                format!(
                    "Attribute \"{path}\" cannot be specified when \"{anchor}\" is specified.",
                    anchor = request.path,
                ),
            ));
        }
        diagnostics
    }
}

/// Creates a [`ConflictsWith`] evaluator.
#[must_use]
pub fn conflicts_with(expressions: impl IntoIterator<Item = PathExpression>) -> ConflictsWith {
    ConflictsWith::new(expressions)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigTree, TypedValue, Value};
    use crate::path::AttributePath;

    fn request_for<'a>(tree: &'a ConfigTree, attr: &'static str) -> Request<'a> {
        let path = AttributePath::root(attr);
        let value = tree.get(&path).unwrap();
        Request::new(tree, path, value)
    }

    #[test]
    fn null_anchor_never_conflicts() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::Null)
            .with_attr("foo", TypedValue::known("value"));
        let validator = conflicts_with([PathExpression::root("foo")]);
        assert!(validator.evaluate(&request_for(&tree, "bar")).is_empty());
    }

    #[test]
    fn each_configured_target_gets_its_own_error() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::known(true))
            .with_attr("foo", TypedValue::known("value"))
            .with_attr("baz", TypedValue::known(7_i64));
        let validator =
            conflicts_with([PathExpression::root("foo"), PathExpression::root("baz")]);
        let diags = validator.evaluate(&request_for(&tree, "bar"));
        assert_eq!(diags.error_count(), 2);
        assert!(diags.as_slice()[0].detail.contains("\"foo\""));
        assert!(diags.as_slice()[1].detail.contains("\"baz\""));
    }

    #[test]
    fn errors_attach_to_the_anchor() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::known(true))
            .with_attr("foo", TypedValue::known("value"));
        let validator = conflicts_with([PathExpression::root("foo")]);
        let diags = validator.evaluate(&request_for(&tree, "bar"));
        assert_eq!(diags.as_slice()[0].path, AttributePath::root("bar"));
    }

    #[test]
    fn unknown_target_is_skipped_not_fatal() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::known(true))
            .with_attr("foo", TypedValue::Unknown)
            .with_attr("baz", TypedValue::known(7_i64));
        let validator =
            conflicts_with([PathExpression::root("foo"), PathExpression::root("baz")]);
        let diags = validator.evaluate(&request_for(&tree, "bar"));
        // "baz" still clashes even though "foo" has no verdict yet.
        assert_eq!(diags.error_count(), 1);
        assert!(diags.as_slice()[0].detail.contains("\"baz\""));
    }

    #[test]
    fn duplicate_expressions_report_one_conflict() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::known(true))
            .with_attr("foo", TypedValue::known("value"));
        let validator =
            conflicts_with([PathExpression::root("foo"), PathExpression::root("foo")]);
        assert_eq!(
            validator.evaluate(&request_for(&tree, "bar")).error_count(),
            1
        );
    }

    #[test]
    fn wildcard_reports_each_clashing_element() {
        let tree = ConfigTree::new()
            .with_attr("bar", TypedValue::known(true))
            .with_attr(
                "rules",
                TypedValue::Known(Value::List(vec![
                    TypedValue::known("a"),
                    TypedValue::Null,
                    TypedValue::known("b"),
                ])),
            );
        let validator = conflicts_with([PathExpression::root("rules").any_index()]);
        let diags = validator.evaluate(&request_for(&tree, "bar"));
        assert_eq!(diags.error_count(), 2);
        assert!(diags.as_slice()[0].detail.contains("rules[0]"));
        assert!(diags.as_slice()[1].detail.contains("rules[2]"));
    }
}

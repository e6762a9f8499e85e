//! PreferWriteOnlyAttribute — nudge towards a write-only alternative
//!
//! Some attributes carry secrets that end up persisted in state unless the
//! practitioner uses the write-only twin. This evaluator attaches to the
//! persisted attribute and emits a warning whenever it is configured while
//! the client is capable of write-only handling.

use crate::evaluators::resolve_targets;
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
use crate::path::PathExpression;

/// Warns that a write-only alternative to the anchor attribute exists.
///
/// This is the only evaluator gated on the request's
/// [`write_only_supported`](Request::write_only_supported) flag: clients
/// without write-only handling cannot act on the advice, so none is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferWriteOnlyAttribute {
    expression: PathExpression,
}

impl PreferWriteOnlyAttribute {
    /// Creates the evaluator from the expression of the write-only twin.
    #[must_use]
    pub fn new(expression: PathExpression) -> Self {
        Self { expression }
    }
}

impl Evaluate for PreferWriteOnlyAttribute {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        if !request.write_only_supported {
            return Diagnostics::new();
        }
        // Advice only applies to a configured anchor. Unknown gets no advice
        // either; the warning would repeat once the value settles anyway.
        if request.value.is_null() || request.value.is_unknown() {
            return Diagnostics::new();
        }

        let expressions = [self.expression.clone()];
        let (paths, mut diagnostics) = resolve_targets(request, &expressions);

        // The twin must exist in the schema for the advice to make sense; an
        // empty resolution that was not already flagged is flagged here.
        if paths.is_empty() {
            if diagnostics.is_empty() {
                diagnostics.push(Diagnostic::invalid_expression(
                    request.path.clone(),
                    format!(
                        "expression \"{}\" does not resolve to an attribute of the schema",
                        self.expression
                    ),
                ));
            }
            return diagnostics;
        }

        diagnostics.push(Diagnostic::warning(
            request.path.clone(),
            "Available Write-Only Attribute Alternative",
            format!(
                "The attribute \"{twin}\" is a write-only alternative to \"{anchor}\". \
                 Use it to keep the value out of persisted state.",
                twin = paths[0],
                anchor = request.path,
            ),
        ));
        diagnostics
    }
}

/// Creates a [`PreferWriteOnlyAttribute`] evaluator.
#[must_use]
pub fn prefer_write_only_attribute(expression: PathExpression) -> PreferWriteOnlyAttribute {
    PreferWriteOnlyAttribute::new(expression)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigTree, TypedValue};
    use crate::foundation::Severity;
    use crate::path::AttributePath;

    fn request_for<'a>(tree: &'a ConfigTree, attr: &'static str) -> Request<'a> {
        let path = AttributePath::root(attr);
        let value = tree.get(&path).unwrap();
        Request::new(tree, path, value)
    }

    fn tree() -> ConfigTree {
        ConfigTree::new()
            .with_attr("password", TypedValue::known("hunter2"))
            .with_attr("password_wo", TypedValue::Null)
    }

    #[test]
    fn warns_when_the_client_supports_write_only() {
        let tree = tree();
        let validator = prefer_write_only_attribute(PathExpression::root("password_wo"));
        let request = request_for(&tree, "password").with_write_only_support(true);
        let diags = validator.evaluate(&request);
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.error_count(), 0);
        assert_eq!(diags.as_slice()[0].severity, Severity::Warning);
        assert!(diags.as_slice()[0].detail.contains("password_wo"));
    }

    #[test]
    fn silent_without_client_support() {
        let tree = tree();
        let validator = prefer_write_only_attribute(PathExpression::root("password_wo"));
        assert!(validator.evaluate(&request_for(&tree, "password")).is_empty());
    }

    #[test]
    fn silent_for_a_null_anchor() {
        let tree = ConfigTree::new()
            .with_attr("password", TypedValue::Null)
            .with_attr("password_wo", TypedValue::known("hunter2"));
        let validator = prefer_write_only_attribute(PathExpression::root("password_wo"));
        let request = request_for(&tree, "password").with_write_only_support(true);
        assert!(validator.evaluate(&request).is_empty());
    }

    #[test]
    fn silent_for_an_unknown_anchor() {
        let tree = ConfigTree::new()
            .with_attr("password", TypedValue::Unknown)
            .with_attr("password_wo", TypedValue::Null);
        let validator = prefer_write_only_attribute(PathExpression::root("password_wo"));
        let request = request_for(&tree, "password").with_write_only_support(true);
        assert!(validator.evaluate(&request).is_empty());
    }

    #[test]
    fn missing_twin_is_a_definition_bug() {
        let tree = ConfigTree::new().with_attr("password", TypedValue::known("hunter2"));
        let validator = prefer_write_only_attribute(PathExpression::root("no_such"));
        let request = request_for(&tree, "password").with_write_only_support(true);
        let diags = validator.evaluate(&request);
        assert_eq!(diags.len(), 1);
        assert!(diags.as_slice()[0].is_definition_bug());
    }
}

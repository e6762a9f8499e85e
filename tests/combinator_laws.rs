//! Combinator laws over the public API.
//!
//! `All` is ordered concatenation, `Any` keeps exactly the first passing
//! child's diagnostics, `AnyWithAllWarnings` forgives errors but never drops
//! a warning. The children here are real evaluators, not stubs, so the laws
//! are exercised the way a schema author would hit them.

use pretty_assertions::assert_eq;

use crossval::prelude::*;

fn request_for<'a>(tree: &'a ConfigTree, attr: &'static str) -> Request<'a> {
    let path = AttributePath::root(attr);
    let value = tree.get(&path).unwrap();
    Request::new(tree, path, value)
}

fn failing_tree() -> ConfigTree {
    // "bar" is set while both companions it conflicts with are set too.
    ConfigTree::new()
        .with_attr("bar", TypedValue::known("bar value"))
        .with_attr("foo", TypedValue::known(1_i64))
        .with_attr("baz", TypedValue::known(2_i64))
}

#[test]
fn all_concatenates_in_order() {
    let tree = failing_tree();
    let request = request_for(&tree, "bar");

    let v1 = conflicts_with([PathExpression::root("foo")]);
    let v2 = conflicts_with([PathExpression::root("baz")]);

    let mut expected = v1.evaluate(&request);
    expected.append(v2.evaluate(&request));

    let combined = all(evaluators![v1, v2]);
    assert_eq!(combined.evaluate(&request), expected);
}

#[test]
fn all_is_associative() {
    let tree = failing_tree();
    let request = request_for(&tree, "bar");

    let left = all(evaluators![
        all(evaluators![
            conflicts_with([PathExpression::root("foo")]),
            conflicts_with([PathExpression::root("baz")]),
        ]),
        required_with([PathExpression::root("missing")]),
    ]);
    let right = all(evaluators![
        conflicts_with([PathExpression::root("foo")]),
        all(evaluators![
            conflicts_with([PathExpression::root("baz")]),
            required_with([PathExpression::root("missing")]),
        ]),
    ]);
    assert_eq!(left.evaluate(&request), right.evaluate(&request));
}

#[test]
fn any_returns_the_passing_childs_diagnostics_exactly() {
    let tree = failing_tree();
    let request = request_for(&tree, "bar");

    // First child fails (foo is configured), second passes (bar is set, so
    // the at-least-one-of group is satisfied).
    let combined = any(evaluators![
        conflicts_with([PathExpression::root("foo")]),
        at_least_one_of([PathExpression::root("foo")]),
    ]);
    let expected = at_least_one_of([PathExpression::root("foo")]).evaluate(&request);
    assert_eq!(combined.evaluate(&request), expected);
}

#[test]
fn any_with_every_child_failing_reports_all() {
    let tree = failing_tree();
    let request = request_for(&tree, "bar");

    let combined = any(evaluators![
        conflicts_with([PathExpression::root("foo")]),
        conflicts_with([PathExpression::root("baz")]),
    ]);
    assert_eq!(combined.evaluate(&request).error_count(), 2);
}

#[test]
fn any_with_all_warnings_forgives_errors_when_one_child_passes() {
    let tree = ConfigTree::new()
        .with_attr("password", TypedValue::known("hunter2"))
        .with_attr("password_wo", TypedValue::Null)
        .with_attr("legacy", TypedValue::known(true));
    let request = request_for(&tree, "password").with_write_only_support(true);

    // Child 1 fails (legacy is configured), child 2 passes with a warning.
    let combined = any_with_all_warnings(evaluators![
        conflicts_with([PathExpression::root("legacy")]),
        prefer_write_only_attribute(PathExpression::root("password_wo")),
    ]);
    let diags = combined.evaluate(&request);
    assert_eq!(diags.error_count(), 0);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn nested_combinators_compose() {
    let tree = ConfigTree::new()
        .with_attr("count", TypedValue::known(4_i64))
        .with_attr("legacy", TypedValue::Null);
    let request = request_for(&tree, "count");

    // "count in 1..=3, or legacy mode with any count".
    let combined = any(evaluators![
        all(evaluators![at_least(1), at_most(3)]),
        all(evaluators![required(), at_least_one_of([PathExpression::root("legacy")])]),
    ]);
    // count=4 fails the range but is itself configured, so the second arm
    // passes.
    assert_eq!(combined.evaluate(&request).len(), 0);
}

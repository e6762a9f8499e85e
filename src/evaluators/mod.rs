//! Cross-attribute constraint evaluators
//!
//! The core of the crate: validators whose verdict depends on *other*
//! attributes than the one they are attached to (the anchor). Each evaluator
//! is configured with a set of path expressions, resolves them against the
//! live configuration tree through the
//! [resolver](crate::path::resolver::resolve), fetches the target values, and
//! applies its verdict logic.
//!
//! All of them share the "defer on unknown" discipline: when a verdict would
//! require a value that is still [`Unknown`](crate::config::TypedValue),
//! the evaluator produces no validation findings this pass rather than
//! guessing. Definition-origin diagnostics (unresolvable expressions, type
//! mismatches) are returned regardless — they are authoring bugs, not
//! verdicts, and every later pass would reproduce them.

pub mod at_least_one_of;
pub mod conflicts_with;
pub mod different_from;
pub mod exactly_one_of;
pub mod prefer_write_only;
pub mod required_with;

pub use at_least_one_of::{AtLeastOneOf, at_least_one_of};
pub use conflicts_with::{ConflictsWith, conflicts_with};
pub use different_from::{DifferentFrom, different_from};
pub use exactly_one_of::{ExactlyOneOf, exactly_one_of};
pub use prefer_write_only::{PreferWriteOnlyAttribute, prefer_write_only_attribute};
pub use required_with::{RequiredWith, required_with};

use crate::config::{ConfigTree, TypedValue};
use crate::foundation::{Diagnostics, Request};
use crate::path::resolver::resolve;
use crate::path::{AttributePath, PathExpression};

/// Resolves an evaluator's target expressions against the request's tree.
pub(crate) fn resolve_targets(
    request: &Request<'_>,
    expressions: &[PathExpression],
) -> (Vec<AttributePath>, Diagnostics) {
    resolve(&request.path, &request.expression, expressions, request.config)
}

/// Reads one resolved target, converting navigation failures into
/// definition diagnostics. A failed read never aborts the evaluator; the
/// caller simply has no value for that target.
pub(crate) fn lookup(
    config: &ConfigTree,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> Option<TypedValue> {
    match config.get(path) {
        Ok(value) => Some(value),
        Err(error) => {
            diagnostics.push(error.into());
            None
        }
    }
}

/// Deduplicates resolved paths, preserving order.
///
/// Callers may reference the same attribute twice, and several expressions
/// can expand to overlapping paths; evaluators must report exactly one
/// diagnostic per distinct conflict. `exclude` drops paths equal to the
/// anchor, which is the same attribute and never its own target.
pub(crate) fn distinct_paths(
    paths: Vec<AttributePath>,
    exclude: Option<&AttributePath>,
) -> Vec<AttributePath> {
    let mut distinct: Vec<AttributePath> = Vec::with_capacity(paths.len());
    for path in paths {
        if exclude == Some(&path) {
            continue;
        }
        if !distinct.contains(&path) {
            distinct.push(path);
        }
    }
    distinct
}

/// Renders the participating expression set for an error detail, with the
/// anchor's own expression first.
pub(crate) fn expression_set(anchor: &PathExpression, targets: &[PathExpression]) -> String {
    let mut rendered = format!("[{anchor}");
    for target in targets {
        rendered.push_str(", ");
        rendered.push_str(&target.to_string());
    }
    rendered.push(']');
    rendered
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_paths_drops_duplicates_and_anchor() {
        let anchor = AttributePath::root("bar");
        let paths = vec![
            AttributePath::root("foo"),
            AttributePath::root("bar"),
            AttributePath::root("foo"),
            AttributePath::root("baz"),
        ];
        assert_eq!(
            distinct_paths(paths, Some(&anchor)),
            vec![AttributePath::root("foo"), AttributePath::root("baz")]
        );
    }

    #[test]
    fn expression_set_puts_the_anchor_first() {
        let anchor = PathExpression::root("bar");
        let targets = vec![PathExpression::root("foo"), PathExpression::root("baz")];
        assert_eq!(expression_set(&anchor, &targets), "[bar, foo, baz]");
    }
}

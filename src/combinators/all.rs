//! All — every child must pass

use std::fmt;

use crate::combinators::fmt_children;
use crate::foundation::{Diagnostics, Evaluate, Request};

/// Runs every child and reports every diagnostic.
///
/// Attaching several validators to one attribute already means "all of
/// them"; this combinator exists to express conjunction *inside* a
/// disjunction, such as `any(all(a, b), c)`.
pub struct All {
    children: Vec<Box<dyn Evaluate>>,
}

impl All {
    /// Creates the combinator from its children.
    #[must_use]
    pub fn new(children: Vec<Box<dyn Evaluate>>) -> Self {
        Self { children }
    }
}

impl Evaluate for All {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for child in &self.children {
            diagnostics.append(child.evaluate(request));
        }
        diagnostics
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_children(f, "All", &self.children)
    }
}

/// Creates an [`All`] combinator.
#[must_use]
pub fn all(children: Vec<Box<dyn Evaluate>>) -> All {
    All::new(children)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::test_support::{Fail, Pass, Warn};
    use crate::config::{ConfigTree, TypedValue};
    use crate::foundation::EvaluateExt;
    use crate::path::AttributePath;

    fn request(tree: &ConfigTree) -> Request<'_> {
        Request::new(tree, AttributePath::root("bar"), TypedValue::Null)
    }

    #[test]
    fn concatenates_in_child_order() {
        let tree = ConfigTree::new();
        let combined = all(vec![Fail("first").boxed(), Pass.boxed(), Fail("second").boxed()]);
        let diags = combined.evaluate(&request(&tree));
        assert_eq!(diags.error_count(), 2);
        assert_eq!(diags.as_slice()[0].summary, "first");
        assert_eq!(diags.as_slice()[1].summary, "second");
    }

    #[test]
    fn keeps_warnings_alongside_errors() {
        let tree = ConfigTree::new();
        let combined = all(vec![Warn("advice").boxed(), Fail("broken").boxed()]);
        let diags = combined.evaluate(&request(&tree));
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn empty_child_list_passes() {
        let tree = ConfigTree::new();
        assert!(all(vec![]).evaluate(&request(&tree)).is_empty());
    }

    #[test]
    fn debug_lists_child_names() {
        let rendered = format!("{:?}", all(vec![Pass.boxed()]));
        assert!(rendered.starts_with("All["));
        assert!(rendered.contains("Pass"));
    }
}

//! AnyWithAllWarnings — disjunction that keeps every child's warnings

use std::fmt;

use crate::combinators::fmt_children;
use crate::foundation::{Diagnostics, Evaluate, Request};

/// Runs every child; passes if at least one produced no errors, but unlike
/// [`Any`](super::Any) never drops a warning.
///
/// Every child runs regardless of outcome. When one passed, the errors are
/// forgiven and only the warnings of all children are reported; when none
/// passed, everything is.
pub struct AnyWithAllWarnings {
    children: Vec<Box<dyn Evaluate>>,
}

impl AnyWithAllWarnings {
    /// Creates the combinator from its children.
    #[must_use]
    pub fn new(children: Vec<Box<dyn Evaluate>>) -> Self {
        Self { children }
    }
}

impl Evaluate for AnyWithAllWarnings {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        let mut accumulated = Diagnostics::new();
        let mut any_passed = self.children.is_empty();
        for child in &self.children {
            let diagnostics = child.evaluate(request);
            if !diagnostics.has_errors() {
                any_passed = true;
            }
            accumulated.append(diagnostics);
        }
        if any_passed {
            accumulated.warnings_only()
        } else {
            accumulated
        }
    }
}

impl fmt::Debug for AnyWithAllWarnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_children(f, "AnyWithAllWarnings", &self.children)
    }
}

/// Creates an [`AnyWithAllWarnings`] combinator.
#[must_use]
pub fn any_with_all_warnings(children: Vec<Box<dyn Evaluate>>) -> AnyWithAllWarnings {
    AnyWithAllWarnings::new(children)
}

// ============================================================================
// TESTS
// ============================================================================

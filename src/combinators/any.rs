//! Any — at least one child must pass

use std::fmt;

use crate::combinators::fmt_children;
use crate::foundation::{Diagnostics, Evaluate, Request};

/// Runs children in order and passes as soon as one produces no errors.
///
/// The passing child's diagnostics are returned as-is, so its warnings
/// survive; everything accumulated from earlier failing children is
/// discarded. If every child fails, all of their diagnostics are reported.
///
/// Warnings from children *after* the first passing one are never seen; use
/// [`AnyWithAllWarnings`](super::AnyWithAllWarnings) when every child's
/// advice matters.
pub struct Any {
    children: Vec<Box<dyn Evaluate>>,
}

impl Any {
    /// Creates the combinator from its children.
    #[must_use]
    pub fn new(children: Vec<Box<dyn Evaluate>>) -> Self {
        Self { children }
    }
}

impl Evaluate for Any {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        let mut accumulated = Diagnostics::new();
        for child in &self.children {
            let diagnostics = child.evaluate(request);
            if !diagnostics.has_errors() {
                return diagnostics;
            }
            accumulated.append(diagnostics);
        }
        accumulated
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_children(f, "Any", &self.children)
    }
}

/// Creates an [`Any`] combinator.
#[must_use]
pub fn any(children: Vec<Box<dyn Evaluate>>) -> Any {
    Any::new(children)
}

// ============================================================================
// TESTS
// ============================================================================

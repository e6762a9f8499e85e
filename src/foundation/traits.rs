//! Core traits for the validation system
//!
//! This module defines the one-method capability every validator implements:
//! leaf checks, cross-attribute constraint evaluators, and the combinators
//! that compose them are all the same thing to the host — an [`Evaluate`].

use crate::config::{ConfigTree, TypedValue};
use crate::foundation::Diagnostics;
use crate::path::{AttributePath, PathExpression};

// ============================================================================
// REQUEST
// ============================================================================

/// Everything an evaluator gets to see for one validation call.
///
/// The host invokes an evaluator once per attribute per validation pass with
/// the attribute's own path and current value plus a read-only view of the
/// whole configuration snapshot. All inputs travel through the request; there
/// is no ambient state.
///
/// # Examples
///
/// ```rust
/// use crossval::config::{ConfigTree, TypedValue};
/// use crossval::foundation::Request;
/// use crossval::path::AttributePath;
///
/// let tree = ConfigTree::new().with_attr("bar", TypedValue::known(1_i64));
/// let request = Request::new(&tree, AttributePath::root("bar"), TypedValue::known(1_i64));
/// assert!(!request.write_only_supported);
/// ```
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// The full configuration snapshot for this pass.
    pub config: &'a ConfigTree,

    /// The anchor: the attribute this evaluator is attached to.
    pub path: AttributePath,

    /// The anchor's path as an expression, used to rebase relative target
    /// expressions.
    pub expression: PathExpression,

    /// The anchor's current value.
    pub value: TypedValue,

    /// Whether the host's client supports write-only attributes. Evaluators
    /// that suggest write-only alternatives are no-ops without it.
    pub write_only_supported: bool,
}

impl<'a> Request<'a> {
    /// Builds a request for an attribute; the anchor expression is derived
    /// from the path.
    #[must_use]
    pub fn new(config: &'a ConfigTree, path: AttributePath, value: TypedValue) -> Self {
        let expression = PathExpression::from(&path);
        Self {
            config,
            path,
            expression,
            value,
            write_only_supported: false,
        }
    }

    /// Sets the write-only client capability flag.
    #[must_use]
    pub fn with_write_only_support(mut self, supported: bool) -> Self {
        self.write_only_supported = supported;
        self
    }
}

// ============================================================================
// CORE EVALUATOR TRAIT
// ============================================================================

/// The one-method capability implemented by every validator.
///
/// An evaluator is a pure function of its request: it holds no mutable state
/// across calls, and the host may invoke validations for many attributes
/// concurrently, so implementations must be `Send + Sync` and reentrant.
///
/// An empty [`Diagnostics`] return means "no verdict against this
/// configuration" — the checks passed, or the evaluator deferred because a
/// required value is still [`Unknown`](crate::config::TypedValue::Unknown).
/// The two are indistinguishable at this pass, by design; the host re-invokes
/// validation on a later pass once unknowns settle.
///
/// # Examples
///
/// ```rust
/// use crossval::foundation::{Diagnostic, Diagnostics, Evaluate, Request};
///
/// struct Forbidden;
///
/// impl Evaluate for Forbidden {
///     fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
///         if request.value.is_null() {
///             Diagnostics::new()
///         } else {
///             Diagnostic::error(
///                 request.path.clone(),
///                 "Invalid Attribute",
///                 "This attribute may not be configured.",
///             )
///             .into()
///         }
///     }
/// }
/// ```
pub trait Evaluate: Send + Sync {
    /// Runs the validator against one attribute.
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics;

    /// Returns the name of this evaluator, for debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T: Evaluate + ?Sized> Evaluate for Box<T> {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        (**self).evaluate(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Evaluate + ?Sized> Evaluate for &T {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        (**self).evaluate(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// EVALUATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods for every [`Evaluate`] implementation.
pub trait EvaluateExt: Evaluate + Sized {
    /// Erases the concrete type for use in a combinator's child list.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let children = vec![conflicts_with([expr]).boxed(), required().boxed()];
    /// let combined = any(children);
    /// ```
    fn boxed(self) -> Box<dyn Evaluate>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Evaluate> EvaluateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

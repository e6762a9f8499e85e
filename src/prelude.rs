//! Prelude module for convenient imports.
//!
//! Provides a single `use crossval::prelude::*;` import that brings in all
//! commonly needed traits, types, evaluators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use crossval::prelude::*;
//!
//! let checks = any(evaluators![
//!     required(),
//!     at_least_one_of([PathExpression::root("fallback")]),
//! ]);
//! ```

// ============================================================================
// FOUNDATION: Core traits and diagnostics
// ============================================================================

pub use crate::foundation::{
    Diagnostic, Diagnostics, Evaluate, EvaluateExt, Origin, Request, Severity,
};

// ============================================================================
// MODEL: Values, trees, paths
// ============================================================================

pub use crate::config::{ConfigTree, TypedValue, Value};
pub use crate::path::{AttributePath, PathExpression};

// ============================================================================
// EVALUATORS: Cross-attribute constraints and leaves
// ============================================================================

pub use crate::evaluators::{
    AtLeastOneOf, ConflictsWith, DifferentFrom, ExactlyOneOf, PreferWriteOnlyAttribute,
    RequiredWith, at_least_one_of, conflicts_with, different_from, exactly_one_of,
    prefer_write_only_attribute, required_with,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, Any, AnyWithAllWarnings, all, any, any_with_all_warnings,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{evaluator, evaluators};

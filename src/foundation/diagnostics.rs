//! Diagnostic model for validation results
//!
//! Evaluators never fail with a Rust error; they describe what they found as
//! severity-tagged [`Diagnostic`] values keyed to an attribute path, collected
//! into an ordered [`Diagnostics`] set. An empty set means "no verdict against
//! the configuration this pass" — either the checks passed or the evaluator
//! deferred on an unknown value.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static summaries.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::AttributePath;

// ============================================================================
// SEVERITY AND ORIGIN
// ============================================================================

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The configuration is invalid and must be fixed.
    Error,
    /// The configuration works but should be reconsidered.
    Warning,
}

/// What a diagnostic is actually about.
///
/// Validation failures and validator-authoring bugs are never conflated:
/// tooling needs to tell "the configuration is wrong" apart from "the
/// validator definition itself is wrong".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// An expected practitioner mistake in the supplied configuration.
    Configuration,
    /// A bug in the validator definition: an expression that resolves to no
    /// schema attribute, or a value whose runtime type does not match its
    /// declared type.
    Definition,
}

// ============================================================================
// DIAGNOSTIC
// ============================================================================

/// A single severity-tagged message keyed to an attribute path.
///
/// Diagnostics are plain value objects; evaluators create them and the host's
/// reporting layer renders them.
///
/// # Examples
///
/// ```rust
/// use crossval::foundation::Diagnostic;
/// use crossval::path::AttributePath;
///
/// let diag = Diagnostic::error(
///     AttributePath::root("bar"),
///     "Invalid Attribute Combination",
///     "Attribute \"foo\" cannot be specified when \"bar\" is specified.",
/// );
/// assert!(diag.is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: Severity,

    /// Configuration mistake or validator-definition bug.
    pub origin: Origin,

    /// Short, stable headline, e.g. `"Invalid Attribute Combination"`.
    pub summary: Cow<'static, str>,

    /// Human-readable explanation naming the offending attributes.
    pub detail: Cow<'static, str>,

    /// The attribute this diagnostic is attached to.
    pub path: AttributePath,
}

impl Diagnostic {
    /// Creates an `Error` diagnostic about the supplied configuration.
    pub fn error(
        path: AttributePath,
        summary: impl Into<Cow<'static, str>>,
        detail: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            origin: Origin::Configuration,
            summary: summary.into(),
            detail: detail.into(),
            path,
        }
    }

    /// Creates a `Warning` diagnostic about the supplied configuration.
    pub fn warning(
        path: AttributePath,
        summary: impl Into<Cow<'static, str>>,
        detail: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            origin: Origin::Configuration,
            summary: summary.into(),
            detail: detail.into(),
            path,
        }
    }

    /// Creates a definition-bug diagnostic for a path expression that does
    /// not resolve to any attribute of the schema.
    pub fn invalid_expression(path: AttributePath, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: Severity::Error,
            origin: Origin::Definition,
            summary: Cow::Borrowed("Invalid Path Expression"),
            detail: detail.into(),
            path,
        }
    }

    /// Creates a definition-bug diagnostic for a value whose runtime type
    /// does not match what the validator expected to read.
    pub fn type_mismatch(path: AttributePath, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: Severity::Error,
            origin: Origin::Definition,
            summary: Cow::Borrowed("Value Type Mismatch"),
            detail: detail.into(),
            path,
        }
    }

    /// Returns true if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Returns true if this diagnostic reports a validator-definition bug
    /// rather than a configuration mistake.
    #[must_use]
    pub fn is_definition_bug(&self) -> bool {
        self.origin == Origin::Definition
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity}[{}]: {}", self.path, self.summary)?;
        if !self.detail.is_empty() {
            write!(f, " — {}", self.detail)?;
        }
        Ok(())
    }
}

// ============================================================================
// DIAGNOSTICS COLLECTION
// ============================================================================

/// An ordered collection of diagnostics produced by one validation call.
///
/// Order is meaningful: combinators concatenate child results in child order
/// and tests assert on it.
///
/// # Examples
///
/// ```rust
/// use crossval::foundation::{Diagnostic, Diagnostics};
/// use crossval::path::AttributePath;
///
/// let mut diags = Diagnostics::new();
/// diags.push(Diagnostic::warning(AttributePath::root("foo"), "Deprecated", ""));
/// assert_eq!(diags.warning_count(), 1);
/// assert!(!diags.has_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Appends every diagnostic from `other`, preserving order.
    pub fn append(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of `Error` diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    /// Returns the number of `Warning` diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_warning()).count()
    }

    /// Returns true if at least one diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    /// Drops every error, keeping only warnings.
    #[must_use]
    pub fn warnings_only(self) -> Self {
        self.entries
            .into_iter()
            .filter(Diagnostic::is_warning)
            .collect()
    }

    /// Iterates over the diagnostics in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns the diagnostics as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Consumes the collection, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            entries: vec![diagnostic],
        }
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} diagnostic(s) ({} error(s), {} warning(s)):",
            self.len(),
            self.error_count(),
            self.warning_count()
        )?;
        for (i, diagnostic) in self.entries.iter().enumerate() {
            writeln!(f, "  {}. {diagnostic}", i + 1)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn error() -> Diagnostic {
        Diagnostic::error(AttributePath::root("foo"), "Bad", "details")
    }

    fn warning() -> Diagnostic {
        Diagnostic::warning(AttributePath::root("foo"), "Iffy", "details")
    }

    #[test]
    fn counts_by_severity() {
        let diags: Diagnostics = vec![error(), warning(), error()].into_iter().collect();
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.error_count(), 2);
        assert_eq!(diags.warning_count(), 1);
        assert!(diags.has_errors());
    }

    #[test]
    fn warnings_only_drops_errors() {
        let diags: Diagnostics = vec![error(), warning(), error()].into_iter().collect();
        let filtered = diags.warnings_only();
        assert_eq!(filtered.len(), 1);
        assert!(!filtered.has_errors());
        assert_eq!(filtered.as_slice()[0].summary, "Iffy");
    }

    #[test]
    fn append_preserves_order() {
        let mut left = Diagnostics::from(error());
        let right = Diagnostics::from(warning());
        left.append(right);
        assert!(left.as_slice()[0].is_error());
        assert!(left.as_slice()[1].is_warning());
    }

    #[test]
    fn origin_is_tracked_separately_from_severity() {
        let bug = Diagnostic::invalid_expression(AttributePath::root("foo"), "no such attribute");
        assert!(bug.is_error());
        assert!(bug.is_definition_bug());

        let mistake = error();
        assert!(mistake.is_error());
        assert!(!mistake.is_definition_bug());
    }

    #[test]
    fn display_names_path_and_summary() {
        let rendered = error().to_string();
        assert!(rendered.contains("foo"));
        assert!(rendered.contains("Bad"));
    }

    #[test]
    fn zero_alloc_static_strings() {
        let diag = error();
        assert!(matches!(diag.summary, Cow::Borrowed(_)));
        assert!(matches!(diag.detail, Cow::Borrowed(_)));
    }
}

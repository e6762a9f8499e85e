//! Single-attribute leaf validators
//!
//! Checks whose verdict depends only on the anchor's own value. They exist
//! mostly as building blocks for the [combinators](crate::combinators): a
//! cross-attribute rule like "either `count` is at least 1 or `legacy` is
//! set" needs leaves to express its arms.
//!
//! All leaves share one discipline: `Null` and `Unknown` anchors pass
//! silently. Presence is [`Required`]'s job, and unknown values get their
//! verdict once they settle. A known value of the wrong kind is a
//! definition bug, not a configuration error.

use regex::Regex;

use crate::config::Value;
use crate::evaluator;
use crate::foundation::{Diagnostic, Diagnostics, Evaluate, Request};

evaluator! {
    /// Validates that an int attribute is at least `min`.
    pub AtLeast { min: i64 } for Value::Int => (n) as "int";
    rule(self, n) { *n >= self.min }
    detail(self, n) { format!("value must be at least {}, got {n}", self.min) }
    fn at_least(min: i64);
}

evaluator! {
    /// Validates that an int attribute is at most `max`.
    pub AtMost { max: i64 } for Value::Int => (n) as "int";
    rule(self, n) { *n <= self.max }
    detail(self, n) { format!("value must be at most {}, got {n}", self.max) }
    fn at_most(max: i64);
}

evaluator! {
    /// Validates that a string attribute's character count lies in
    /// `min..=max`.
    pub LengthBetween { min: usize, max: usize } for Value::String => (s) as "string";
    rule(self, s) {
        let length = s.chars().count();
        length >= self.min && length <= self.max
    }
    detail(self, s) {
        format!(
            "string length must be between {} and {}, got {}",
            self.min,
            self.max,
            s.chars().count(),
        )
    }
    fn length_between(min: usize, max: usize);
}

evaluator! {
    /// Validates that a string attribute matches a compiled pattern.
    pub MatchesPattern { pattern: Regex } for Value::String => (s) as "string";
    rule(self, s) { self.pattern.is_match(s) }
    detail(self, s) { format!("value \"{s}\" must match pattern {}", self.pattern) }
    fn matches_pattern(pattern: Regex);
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that the attribute is configured.
///
/// The one leaf that does not pass on `Null`. An `Unknown` anchor still
/// passes: it will hold a value, whatever it turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required;

impl Evaluate for Required {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        if request.value.is_null() {
            Diagnostic::error(
                request.path.clone(),
                "Missing Attribute Configuration",
                "This attribute must be specified.",
            )
            .into()
        } else {
            Diagnostics::new()
        }
    }
}

/// Creates a [`Required`] evaluator.
#[must_use]
pub const fn required() -> Required {
    Required
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that the attribute's value is one of an allowed set.
///
/// Works across value kinds, so it is written by hand rather than through
/// [`evaluator!`](crate::evaluator): an allowed set of strings against an
/// int anchor is simply a failed match, never a type mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Value>,
}

impl OneOf {
    /// Creates the evaluator from the allowed values.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = Value>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl Evaluate for OneOf {
    fn evaluate(&self, request: &Request<'_>) -> Diagnostics {
        let Some(value) = request.value.as_known() else {
            return Diagnostics::new();
        };
        if self.allowed.contains(value) {
            return Diagnostics::new();
        }
        let allowed = self
            .allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Diagnostic::error(
            request.path.clone(),
            "Invalid Attribute Value",
            format!("value must be one of [{allowed}], got {value}"),
        )
        .into()
    }
}

/// Creates a [`OneOf`] evaluator.
#[must_use]
pub fn one_of(allowed: impl IntoIterator<Item = Value>) -> OneOf {
    OneOf::new(allowed)
}

// ============================================================================
// TESTS
// ============================================================================

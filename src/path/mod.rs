//! Concrete attribute paths
//!
//! An [`AttributePath`] addresses exactly one location in the configuration
//! tree: an ordered sequence of steps, each an attribute name, a list/set
//! index, or a map key. Paths are immutable value objects; two paths are
//! equal iff their step sequences are equal.
//!
//! Patterns over paths (wildcards, relative steps) live in
//! [`expression`](crate::path::expression); walking patterns against a live
//! tree lives in [`resolver`](crate::path::resolver).

pub mod expression;
pub mod resolver;

pub use expression::{ExpressionError, ExpressionStep, PathExpression};

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// STEP
// ============================================================================

/// One step of a concrete attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// An attribute of an object, by name.
    Name(Cow<'static, str>),
    /// An element of a list or set, by position.
    Index(usize),
    /// An entry of a map, by key.
    Key(Cow<'static, str>),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Name(name) => write!(f, "{name}"),
            Step::Index(index) => write!(f, "[{index}]"),
            Step::Key(key) => write!(f, "[\"{key}\"]"),
        }
    }
}

// ============================================================================
// ATTRIBUTE PATH
// ============================================================================

/// An ordered sequence of steps identifying one location in the tree.
///
/// Built fluently from the root:
///
/// ```rust
/// use crossval::path::AttributePath;
///
/// let path = AttributePath::root("network").index(0).attr("cidr");
/// assert_eq!(path.to_string(), "network[0].cidr");
/// ```
///
/// Paths are cheap to clone; steps are stored inline for the common short
/// case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AttributePath {
    steps: SmallVec<[Step; 4]>,
}

impl AttributePath {
    /// The empty path, addressing the configuration root itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path consisting of a single top-level attribute name.
    #[must_use]
    pub fn root(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            steps: std::iter::once(Step::Name(name.into())).collect(),
        }
    }

    /// Extends the path with an attribute-name step.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.steps.push(Step::Name(name.into()));
        self
    }

    /// Extends the path with a list/set index step.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(Step::Index(index));
        self
    }

    /// Extends the path with a map-key step.
    #[must_use]
    pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.steps.push(Step::Key(key.into()));
        self
    }

    /// Drops the last step, addressing the enclosing container.
    ///
    /// The empty path is its own parent.
    #[must_use]
    pub fn parent(mut self) -> Self {
        self.steps.pop();
        self
    }

    /// Appends a single step.
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// The steps of this path, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for AttributePath {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("<root>");
        }
        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 && matches!(step, Step::Name(_)) {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

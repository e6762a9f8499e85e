//! Path expressions: patterns over attribute paths
//!
//! A [`PathExpression`] describes one or more locations in the configuration
//! tree. Unlike a concrete [`AttributePath`](crate::path::AttributePath), an
//! expression may contain wildcard steps (any list element, any map key) and
//! may be *relative*: anchored to the attribute a validator is attached to
//! rather than to the tree root. Relative expressions must be merged with the
//! anchor's expression before they can be resolved.
//!
//! The vocabulary is deliberately fixed and small; there is no user-facing
//! expression DSL.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::path::{AttributePath, Step};

// ============================================================================
// EXPRESSION STEP
// ============================================================================

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionStep {
    /// Step up to the enclosing container. Only meaningful in relative
    /// expressions; merging applies it against the anchor.
    Parent,
    /// An attribute of an object, by name.
    Name(Cow<'static, str>),
    /// An element of a list or set, by position.
    Index(usize),
    /// An entry of a map, by key.
    Key(Cow<'static, str>),
    /// Every element of a list or set.
    AnyIndex,
    /// Every entry of a map.
    AnyKey,
}

impl fmt::Display for ExpressionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionStep::Parent => f.write_str("<"),
            ExpressionStep::Name(name) => write!(f, "{name}"),
            ExpressionStep::Index(index) => write!(f, "[{index}]"),
            ExpressionStep::Key(key) => write!(f, "[\"{key}\"]"),
            ExpressionStep::AnyIndex => f.write_str("[*]"),
            ExpressionStep::AnyKey => f.write_str("[\"*\"]"),
        }
    }
}

// ============================================================================
// EXPRESSION ERRORS
// ============================================================================

/// Errors from merging a relative expression with its anchor.
///
/// These indicate validator-authoring bugs, not configuration mistakes; the
/// resolver converts them into `Definition`-origin diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A relative expression stepped above the configuration root.
    #[error("expression \"{expression}\" steps above the configuration root")]
    EscapesRoot {
        /// Rendered form of the offending relative expression.
        expression: String,
    },
}

// ============================================================================
// PATH EXPRESSION
// ============================================================================

/// A pattern over attribute paths, relative or absolute.
///
/// # Examples
///
/// ```rust
/// use crossval::path::PathExpression;
///
/// // Absolute: the "cidr" attribute of every "network" block.
/// let absolute = PathExpression::root("network").any_index().attr("cidr");
/// assert_eq!(absolute.to_string(), "network[*].cidr");
///
/// // Relative: a sibling of the anchor attribute.
/// let sibling = PathExpression::relative().parent().attr("other");
/// assert!(sibling.is_relative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathExpression {
    relative: bool,
    steps: SmallVec<[ExpressionStep; 4]>,
}

impl PathExpression {
    /// An absolute expression starting at a top-level attribute.
    #[must_use]
    pub fn root(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            relative: false,
            steps: std::iter::once(ExpressionStep::Name(name.into())).collect(),
        }
    }

    /// An empty relative expression, anchored at the validated attribute.
    #[must_use]
    pub fn relative() -> Self {
        Self {
            relative: true,
            steps: SmallVec::new(),
        }
    }

    /// Extends the expression with an attribute-name step.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.steps.push(ExpressionStep::Name(name.into()));
        self
    }

    /// Extends the expression with a list/set index step.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(ExpressionStep::Index(index));
        self
    }

    /// Extends the expression with a map-key step.
    #[must_use]
    pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.steps.push(ExpressionStep::Key(key.into()));
        self
    }

    /// Extends the expression with a wildcard over list/set elements.
    #[must_use]
    pub fn any_index(mut self) -> Self {
        self.steps.push(ExpressionStep::AnyIndex);
        self
    }

    /// Extends the expression with a wildcard over map keys.
    #[must_use]
    pub fn any_key(mut self) -> Self {
        self.steps.push(ExpressionStep::AnyKey);
        self
    }

    /// Extends the expression with a step up to the enclosing container.
    #[must_use]
    pub fn parent(mut self) -> Self {
        self.steps.push(ExpressionStep::Parent);
        self
    }

    /// True if this expression must be merged with an anchor before
    /// resolution.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// The steps of this expression, in order.
    #[must_use]
    pub fn steps(&self) -> &[ExpressionStep] {
        &self.steps
    }

    /// Rebases this expression onto `anchor`.
    ///
    /// Absolute expressions pass through unchanged. Relative expressions
    /// start from the anchor's steps; each [`ExpressionStep::Parent`] pops
    /// one step, every other step is appended.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::EscapesRoot`] when parent steps pop past
    /// the configuration root — a validator-authoring bug.
    pub fn merge(&self, anchor: &PathExpression) -> Result<PathExpression, ExpressionError> {
        if !self.relative {
            return Ok(self.clone());
        }

        let mut steps = anchor.steps.clone();
        for step in &self.steps {
            match step {
                ExpressionStep::Parent => {
                    if steps.pop().is_none() {
                        return Err(ExpressionError::EscapesRoot {
                            expression: self.to_string(),
                        });
                    }
                }
                other => steps.push(other.clone()),
            }
        }

        Ok(PathExpression {
            relative: anchor.relative,
            steps,
        })
    }
}

impl From<&AttributePath> for PathExpression {
    fn from(path: &AttributePath) -> Self {
        Self {
            relative: false,
            steps: path
                .steps()
                .iter()
                .map(|step| match step {
                    Step::Name(name) => ExpressionStep::Name(name.clone()),
                    Step::Index(index) => ExpressionStep::Index(*index),
                    Step::Key(key) => ExpressionStep::Key(key.clone()),
                })
                .collect(),
        }
    }
}

impl From<AttributePath> for PathExpression {
    fn from(path: AttributePath) -> Self {
        Self::from(&path)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str(if self.relative { "<self>" } else { "<root>" });
        }
        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 && matches!(step, ExpressionStep::Name(_) | ExpressionStep::Parent) {
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

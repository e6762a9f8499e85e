//! Configuration values and the configuration tree
//!
//! The practitioner-supplied configuration is a rooted tree of typed values,
//! snapshotted once per validation pass and read-only for its duration. Every
//! position in the tree holds a [`TypedValue`] — the tri-state at the heart
//! of the whole subsystem:
//!
//! - [`TypedValue::Null`]: explicitly absent;
//! - [`TypedValue::Unknown`]: not yet determined (computed at a later stage);
//! - [`TypedValue::Known`]: a concrete, comparable [`Value`].
//!
//! Modeling the tri-state as an enum keeps the "skip vs. defer vs. error"
//! branches in the evaluators exhaustive and compiler-checked.

pub mod json;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::Diagnostic;
use crate::path::{AttributePath, Step};

// ============================================================================
// VALUE
// ============================================================================

/// A concrete configuration value.
///
/// Equality is derived: two values of different variants are simply unequal.
/// Comparing across incompatible types is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A 64-bit integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence, addressed by index.
    List(Vec<TypedValue>),
    /// An unordered collection, addressed by position in the snapshot.
    Set(Vec<TypedValue>),
    /// String-keyed entries, addressed by key.
    Map(BTreeMap<String, TypedValue>),
    /// A nested block with named attributes.
    Object(BTreeMap<String, TypedValue>),
}

impl Value {
    /// A short name for the value's kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "\"{s}\""),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}

// ============================================================================
// TYPED VALUE
// ============================================================================

/// The tri-state a configured value occupies at validation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TypedValue {
    /// Explicitly absent from the configuration.
    #[default]
    Null,
    /// Not yet determined; settled on a later pass.
    Unknown,
    /// A concrete value.
    Known(Value),
}

impl TypedValue {
    /// Wraps a concrete value.
    pub fn known(value: impl Into<Value>) -> Self {
        TypedValue::Known(value.into())
    }

    /// True for `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// True for `Unknown`.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypedValue::Unknown)
    }

    /// The concrete value, if known.
    #[must_use]
    pub fn as_known(&self) -> Option<&Value> {
        match self {
            TypedValue::Known(value) => Some(value),
            _ => None,
        }
    }

    /// True only when both sides are `Known` and their values are equal.
    ///
    /// Null and Unknown never equal anything, including themselves: equality
    /// is defined only between concrete values.
    #[must_use]
    pub fn known_eq(&self, other: &TypedValue) -> bool {
        match (self, other) {
            (TypedValue::Known(a), TypedValue::Known(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        TypedValue::Known(value)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Null => f.write_str("null"),
            TypedValue::Unknown => f.write_str("(known after apply)"),
            TypedValue::Known(value) => write!(f, "{value}"),
        }
    }
}

// ============================================================================
// PATH ERRORS
// ============================================================================

/// Errors from reading a concrete path out of the tree.
///
/// Every variant is a validator-definition problem — the expression addressed
/// something the tree does not have, or the wrong kind of node. The calling
/// evaluator converts the error into a `Definition`-origin diagnostic and
/// treats the value as unavailable; it must still report whatever independent
/// findings it can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A name step addressed an attribute the object does not declare.
    #[error("attribute \"{path}\" does not exist in the configuration")]
    UnknownAttribute {
        /// The full path of the missing attribute.
        path: AttributePath,
    },

    /// A key step addressed a map entry that is not present.
    #[error("map \"{path}\" has no key \"{key}\"")]
    UnknownKey {
        /// Path of the map being read.
        path: AttributePath,
        /// The missing key.
        key: String,
    },

    /// An index step was out of bounds.
    #[error("index {index} is out of bounds at \"{path}\" (length {len})")]
    IndexOutOfBounds {
        /// Path of the collection being read.
        path: AttributePath,
        /// The requested index.
        index: usize,
        /// The collection length.
        len: usize,
    },

    /// A step was applied to a node of the wrong kind, e.g. an index step
    /// into an object.
    #[error("cannot apply step \"{step}\" to {kind} value at \"{path}\"")]
    StepMismatch {
        /// Path of the node being read.
        path: AttributePath,
        /// Rendered form of the offending step.
        step: String,
        /// Kind of the node actually found there.
        kind: &'static str,
    },
}

impl From<PathError> for Diagnostic {
    fn from(error: PathError) -> Self {
        match &error {
            PathError::UnknownAttribute { path } => {
                Diagnostic::invalid_expression(path.clone(), error.to_string())
            }
            PathError::UnknownKey { path, .. }
            | PathError::IndexOutOfBounds { path, .. }
            | PathError::StepMismatch { path, .. } => {
                Diagnostic::type_mismatch(path.clone(), error.to_string())
            }
        }
    }
}

// ============================================================================
// CONFIG TREE
// ============================================================================

/// The full practitioner-supplied configuration for one validation pass.
///
/// The tree is schema-shaped: attributes that are declared but not set are
/// present with a `Null` value; names absent from the tree do not exist in
/// the schema at all.
///
/// # Examples
///
/// ```rust
/// use crossval::config::{ConfigTree, TypedValue};
/// use crossval::path::AttributePath;
///
/// let tree = ConfigTree::new()
///     .with_attr("bar", TypedValue::known("bar value"))
///     .with_attr("foo", TypedValue::Null);
///
/// let value = tree.get(&AttributePath::root("bar")).unwrap();
/// assert!(!value.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigTree {
    root: BTreeMap<String, TypedValue>,
}

/// Where a tree walk currently stands: inside the pseudo-object root or at a
/// value node.
enum Cursor<'a> {
    Root(&'a BTreeMap<String, TypedValue>),
    Node(&'a TypedValue),
}

impl ConfigTree {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        self.root.insert(name.into(), value.into());
        self
    }

    /// The top-level attributes.
    #[must_use]
    pub fn attrs(&self) -> &BTreeMap<String, TypedValue> {
        &self.root
    }

    /// Reads the value at a concrete path.
    ///
    /// Walking into a `Null` container yields `Null` and walking into an
    /// `Unknown` container yields `Unknown`: nothing beneath an undetermined
    /// node is determined either.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] when the path addresses something the tree
    /// does not have — a missing attribute, a missing map key, an index out
    /// of bounds, or a step applied to the wrong kind of node.
    pub fn get(&self, path: &AttributePath) -> Result<TypedValue, PathError> {
        let mut cursor = Cursor::Root(&self.root);
        let mut walked = AttributePath::empty();

        for step in path.steps() {
            let node = match cursor {
                Cursor::Root(attrs) => {
                    let Step::Name(name) = step else {
                        return Err(PathError::StepMismatch {
                            path: walked,
                            step: step.to_string(),
                            kind: "object",
                        });
                    };
                    walked = walked.attr(name.clone());
                    attrs
                        .get(name.as_ref())
                        .ok_or_else(|| PathError::UnknownAttribute {
                            path: walked.clone(),
                        })?
                }
                Cursor::Node(value) => match value {
                    // Nothing beneath an absent or undetermined node is any
                    // more determined than the node itself.
                    TypedValue::Null => return Ok(TypedValue::Null),
                    TypedValue::Unknown => return Ok(TypedValue::Unknown),
                    TypedValue::Known(known) => {
                        Self::step_into(known, step, &mut walked)?
                    }
                },
            };
            cursor = Cursor::Node(node);
        }

        match cursor {
            Cursor::Root(_) => Ok(TypedValue::Known(Value::Object(self.root.clone()))),
            Cursor::Node(value) => Ok(value.clone()),
        }
    }

    fn step_into<'a>(
        value: &'a Value,
        step: &Step,
        walked: &mut AttributePath,
    ) -> Result<&'a TypedValue, PathError> {
        match (step, value) {
            (Step::Name(name), Value::Object(attrs)) => {
                *walked = walked.clone().attr(name.clone());
                attrs
                    .get(name.as_ref())
                    .ok_or_else(|| PathError::UnknownAttribute {
                        path: walked.clone(),
                    })
            }
            (Step::Index(index), Value::List(elements) | Value::Set(elements)) => {
                let slot = elements
                    .get(*index)
                    .ok_or_else(|| PathError::IndexOutOfBounds {
                        path: walked.clone(),
                        index: *index,
                        len: elements.len(),
                    })?;
                *walked = walked.clone().index(*index);
                Ok(slot)
            }
            (Step::Key(key), Value::Map(entries)) => {
                let slot = entries.get(key.as_ref()).ok_or_else(|| PathError::UnknownKey {
                    path: walked.clone(),
                    key: key.to_string(),
                })?;
                *walked = walked.clone().key(key.clone());
                Ok(slot)
            }
            (step, other) => Err(PathError::StepMismatch {
                path: walked.clone(),
                step: step.to_string(),
                kind: other.kind(),
            }),
        }
    }
}

impl FromIterator<(String, TypedValue)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, TypedValue)>>(iter: I) -> Self {
        Self {
            root: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ConfigTree {
        ConfigTree::new()
            .with_attr("name", TypedValue::known("demo"))
            .with_attr("count", TypedValue::known(3_i64))
            .with_attr("disabled", TypedValue::Null)
            .with_attr("arn", TypedValue::Unknown)
            .with_attr(
                "rules",
                TypedValue::Known(Value::List(vec![
                    TypedValue::Known(Value::Object(BTreeMap::from([
                        ("port".to_owned(), TypedValue::known(80_i64)),
                        ("proto".to_owned(), TypedValue::known("tcp")),
                    ]))),
                    TypedValue::Known(Value::Object(BTreeMap::from([
                        ("port".to_owned(), TypedValue::known(443_i64)),
                        ("proto".to_owned(), TypedValue::Null),
                    ]))),
                ])),
            )
            .with_attr(
                "tags",
                TypedValue::Known(Value::Map(BTreeMap::from([(
                    "env".to_owned(),
                    TypedValue::known("prod"),
                )]))),
            )
    }

    #[test]
    fn get_top_level_attribute() {
        let tree = sample_tree();
        let value = tree.get(&AttributePath::root("name")).unwrap();
        assert_eq!(value, TypedValue::known("demo"));
    }

    #[test]
    fn get_nested_list_element_attribute() {
        let tree = sample_tree();
        let path = AttributePath::root("rules").index(1).attr("port");
        assert_eq!(tree.get(&path).unwrap(), TypedValue::known(443_i64));
    }

    #[test]
    fn get_map_entry() {
        let tree = sample_tree();
        let path = AttributePath::root("tags").key("env");
        assert_eq!(tree.get(&path).unwrap(), TypedValue::known("prod"));
    }

    #[test]
    fn missing_attribute_is_a_path_error() {
        let tree = sample_tree();
        let err = tree.get(&AttributePath::root("nope")).unwrap_err();
        assert!(matches!(err, PathError::UnknownAttribute { .. }));
    }

    #[test]
    fn index_into_object_is_a_step_mismatch() {
        let tree = sample_tree();
        let path = AttributePath::root("tags").index(0);
        let err = tree.get(&path).unwrap_err();
        assert!(matches!(err, PathError::StepMismatch { .. }));
    }

    #[test]
    fn index_out_of_bounds_reports_length() {
        let tree = sample_tree();
        let path = AttributePath::root("rules").index(5);
        let err = tree.get(&path).unwrap_err();
        assert_eq!(
            err,
            PathError::IndexOutOfBounds {
                path: AttributePath::root("rules"),
                index: 5,
                len: 2,
            }
        );
    }

    #[test]
    fn walking_into_unknown_yields_unknown() {
        let tree = sample_tree();
        let path = AttributePath::root("arn").attr("anything").index(7);
        assert_eq!(tree.get(&path).unwrap(), TypedValue::Unknown);
    }

    #[test]
    fn walking_into_null_yields_null() {
        let tree = sample_tree();
        let path = AttributePath::root("disabled").attr("anything");
        assert_eq!(tree.get(&path).unwrap(), TypedValue::Null);
    }

    #[test]
    fn known_eq_only_compares_concrete_values() {
        assert!(TypedValue::known(1_i64).known_eq(&TypedValue::known(1_i64)));
        assert!(!TypedValue::known(1_i64).known_eq(&TypedValue::known("1")));
        assert!(!TypedValue::Null.known_eq(&TypedValue::Null));
        assert!(!TypedValue::Unknown.known_eq(&TypedValue::Unknown));
    }

    #[test]
    fn cross_type_equality_is_simply_unequal() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::String("true".into()), Value::Bool(true));
    }

    #[test]
    fn path_errors_become_definition_diagnostics() {
        let tree = sample_tree();
        let err = tree.get(&AttributePath::root("nope")).unwrap_err();
        let diag = Diagnostic::from(err);
        assert!(diag.is_definition_bug());
        assert!(diag.is_error());
    }
}

//! Path expression resolution
//!
//! Turns the path expressions configured on a constraint evaluator into
//! concrete [`AttributePath`]s against the live configuration tree: relative
//! expressions are first merged with the anchor's expression, then wildcard
//! steps are expanded by walking the tree and enumerating every matching
//! sibling.
//!
//! Resolution failures come in two distinct flavors, mirroring the two
//! diagnostic origins:
//!
//! - an expression that names a non-existent attribute (or escapes the root)
//!   is a validator-authoring bug and produces a `Definition` diagnostic;
//! - a wildcard over a `Null` or empty collection legitimately matches
//!   nothing and produces no paths and no diagnostics.
//!
//! A wildcard over an `Unknown` collection cannot be enumerated; it yields
//! the collection's own path, whose value reads back `Unknown`, so the
//! calling evaluator defers.
//!
//! The resolver never deduplicates: callers may reference the same attribute
//! twice, and the evaluators own the one-diagnostic-per-distinct-conflict
//! guarantee.

use std::collections::BTreeMap;

use crate::config::{ConfigTree, TypedValue, Value};
use crate::foundation::{Diagnostic, Diagnostics};
use crate::path::{AttributePath, ExpressionStep, PathExpression};

/// One branch of the expansion walk.
struct Branch<'a> {
    path: AttributePath,
    node: Node<'a>,
}

/// Where a branch currently stands in the tree.
#[derive(Clone, Copy)]
enum Node<'a> {
    /// The pseudo-object holding the top-level attributes.
    Root(&'a BTreeMap<String, TypedValue>),
    /// A value node.
    Value(&'a TypedValue),
    /// Everything beneath an `Unknown` node; paths may still extend, their
    /// values all read back `Unknown`.
    Unknown,
}

/// Resolves every target expression against the tree.
///
/// Relative targets are merged with `anchor_expression` before expansion.
/// Returned paths keep the target order; diagnostics collect every
/// authoring bug encountered (merge failures, unresolvable names). Both are
/// returned together — a bad expression never aborts resolution of its
/// siblings.
#[must_use]
pub fn resolve(
    anchor_path: &AttributePath,
    anchor_expression: &PathExpression,
    targets: &[PathExpression],
    config: &ConfigTree,
) -> (Vec<AttributePath>, Diagnostics) {
    let mut paths = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for target in targets {
        let merged = match target.merge(anchor_expression) {
            Ok(merged) => merged,
            Err(error) => {
                diagnostics.push(Diagnostic::invalid_expression(
                    anchor_path.clone(),
                    error.to_string(),
                ));
                continue;
            }
        };
        expand(&merged, config, &mut paths, &mut diagnostics, anchor_path);
    }

    (paths, diagnostics)
}

/// Expands one merged (absolute) expression, appending matches to `paths`.
fn expand(
    expression: &PathExpression,
    config: &ConfigTree,
    paths: &mut Vec<AttributePath>,
    diagnostics: &mut Diagnostics,
    anchor_path: &AttributePath,
) {
    let mut frontier = vec![Branch {
        path: AttributePath::empty(),
        node: Node::Root(config.attrs()),
    }];
    // Set when a branch dies on a structural miss (missing name or key, bad
    // index, wrong node kind) as opposed to an empty collection.
    let mut structural_miss = false;

    for step in expression.steps() {
        let mut next = Vec::with_capacity(frontier.len());
        for branch in frontier {
            apply_step(branch, step, &mut next, &mut structural_miss);
        }
        frontier = next;
        if frontier.is_empty() {
            break;
        }
    }

    if frontier.is_empty() && structural_miss {
        diagnostics.push(Diagnostic::invalid_expression(
            anchor_path.clone(),
            format!("expression \"{expression}\" does not resolve to an attribute of the schema"),
        ));
        return;
    }

    paths.extend(frontier.into_iter().map(|branch| branch.path));
}

fn apply_step<'a>(
    branch: Branch<'a>,
    step: &ExpressionStep,
    next: &mut Vec<Branch<'a>>,
    structural_miss: &mut bool,
) {
    static NULL: TypedValue = TypedValue::Null;

    let Branch { path, node } = branch;

    // Unwrap the tri-state once; Null and Unknown containers short-circuit.
    let known = match node {
        Node::Root(attrs) => {
            match step {
                ExpressionStep::Name(name) => {
                    if let Some(value) = attrs.get(name.as_ref()) {
                        next.push(Branch {
                            path: path.attr(name.clone()),
                            node: Node::Value(value),
                        });
                    } else {
                        *structural_miss = true;
                    }
                }
                // Only named attributes exist at the root.
                _ => *structural_miss = true,
            }
            return;
        }
        Node::Unknown | Node::Value(TypedValue::Unknown) => {
            // Wildcards cannot enumerate an unknown collection; the branch
            // keeps the collection's own path so the value reads Unknown.
            // Literal steps extend the path, still reading Unknown.
            let path = match step {
                ExpressionStep::AnyIndex | ExpressionStep::AnyKey => path,
                ExpressionStep::Name(name) => path.attr(name.clone()),
                ExpressionStep::Index(index) => path.index(*index),
                ExpressionStep::Key(key) => path.key(key.clone()),
                ExpressionStep::Parent => path.parent(),
            };
            next.push(Branch {
                path,
                node: Node::Unknown,
            });
            return;
        }
        Node::Value(TypedValue::Null) => {
            match step {
                // A null collection has no elements to enumerate.
                ExpressionStep::AnyIndex | ExpressionStep::AnyKey => {}
                // Literal steps extend the path; the value reads Null.
                ExpressionStep::Name(name) => next.push(Branch {
                    path: path.attr(name.clone()),
                    node: Node::Value(&NULL),
                }),
                ExpressionStep::Index(index) => next.push(Branch {
                    path: path.index(*index),
                    node: Node::Value(&NULL),
                }),
                ExpressionStep::Key(key) => next.push(Branch {
                    path: path.key(key.clone()),
                    node: Node::Value(&NULL),
                }),
                ExpressionStep::Parent => next.push(Branch {
                    path: path.parent(),
                    node: Node::Value(&NULL),
                }),
            }
            return;
        }
        Node::Value(TypedValue::Known(known)) => known,
    };

    match (step, known) {
        (ExpressionStep::Name(name), Value::Object(attrs)) => {
            if let Some(value) = attrs.get(name.as_ref()) {
                next.push(Branch {
                    path: path.attr(name.clone()),
                    node: Node::Value(value),
                });
            } else {
                *structural_miss = true;
            }
        }
        (ExpressionStep::Index(index), Value::List(elements) | Value::Set(elements)) => {
            if let Some(value) = elements.get(*index) {
                next.push(Branch {
                    path: path.index(*index),
                    node: Node::Value(value),
                });
            } else {
                *structural_miss = true;
            }
        }
        (ExpressionStep::Key(key), Value::Map(entries)) => {
            if let Some(value) = entries.get(key.as_ref()) {
                next.push(Branch {
                    path: path.key(key.clone()),
                    node: Node::Value(value),
                });
            } else {
                *structural_miss = true;
            }
        }
        (ExpressionStep::AnyIndex, Value::List(elements) | Value::Set(elements)) => {
            next.extend(elements.iter().enumerate().map(|(index, value)| Branch {
                path: path.clone().index(index),
                node: Node::Value(value),
            }));
        }
        (ExpressionStep::AnyKey, Value::Map(entries)) => {
            next.extend(entries.iter().map(|(key, value)| Branch {
                path: path.clone().key(key.clone()),
                node: Node::Value(value),
            }));
        }
        // Parent steps are consumed during merging; one surviving here means
        // the merged expression walked above its own root.
        (ExpressionStep::Parent, _) => *structural_miss = true,
        _ => *structural_miss = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

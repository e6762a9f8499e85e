//! JSON convenience constructors for configuration trees.
//!
//! Hosts and test fixtures usually have configuration lying around as JSON;
//! this module turns it into the crate's value model without hand-building
//! trees.
//!
//! JSON is less expressive than the model: `null` maps to
//! [`TypedValue::Null`] (JSON has no way to say "unknown"), objects map to
//! [`Value::Object`] (build [`Value::Map`] or [`Value::Set`] directly when
//! the distinction matters), and numbers map to `Int` when they fit in an
//! `i64`, `Float` otherwise.
//!
//! # Examples
//!
//! ```rust
//! use crossval::config::json::tree_from_json;
//! use serde_json::json;
//!
//! let tree = tree_from_json(json!({
//!     "name": "web",
//!     "count": 3,
//!     "legacy": null,
//! })).unwrap();
//! assert_eq!(tree.attrs().len(), 3);
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::{ConfigTree, TypedValue, Value};

/// Errors from converting JSON into a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// The document root must be an object; attributes live under names.
    #[error("configuration root must be a JSON object, got {got}")]
    RootNotAnObject {
        /// The kind of JSON value actually found at the root.
        got: &'static str,
    },
}

/// Builds a [`ConfigTree`] from a JSON document.
///
/// # Errors
///
/// Returns [`JsonError::RootNotAnObject`] unless the document root is an
/// object.
pub fn tree_from_json(document: serde_json::Value) -> Result<ConfigTree, JsonError> {
    let serde_json::Value::Object(entries) = document else {
        return Err(JsonError::RootNotAnObject {
            got: json_kind(&document),
        });
    };
    Ok(entries
        .into_iter()
        .map(|(name, value)| (name, typed_value_from_json(value)))
        .collect())
}

/// Converts one JSON value into a [`TypedValue`].
#[must_use]
pub fn typed_value_from_json(value: serde_json::Value) -> TypedValue {
    match value {
        serde_json::Value::Null => TypedValue::Null,
        serde_json::Value::Bool(b) => TypedValue::Known(Value::Bool(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => TypedValue::Known(Value::Int(i)),
            None => TypedValue::Known(Value::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        serde_json::Value::String(s) => TypedValue::Known(Value::String(s)),
        serde_json::Value::Array(items) => TypedValue::Known(Value::List(
            items.into_iter().map(typed_value_from_json).collect(),
        )),
        serde_json::Value::Object(entries) => TypedValue::Known(Value::Object(
            entries
                .into_iter()
                .map(|(name, value)| (name, typed_value_from_json(value)))
                .collect::<BTreeMap<_, _>>(),
        )),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::AttributePath;
    use serde_json::json;

    #[test]
    fn scalars_round_trip_into_the_model() {
        let tree = tree_from_json(json!({
            "enabled": true,
            "count": 3,
            "ratio": 0.5,
            "name": "web",
        }))
        .unwrap();
        assert_eq!(
            tree.get(&AttributePath::root("enabled")).unwrap(),
            TypedValue::known(true)
        );
        assert_eq!(
            tree.get(&AttributePath::root("count")).unwrap(),
            TypedValue::known(3_i64)
        );
        assert_eq!(
            tree.get(&AttributePath::root("ratio")).unwrap(),
            TypedValue::known(0.5_f64)
        );
        assert_eq!(
            tree.get(&AttributePath::root("name")).unwrap(),
            TypedValue::known("web")
        );
    }

    #[test]
    fn null_maps_to_null() {
        let tree = tree_from_json(json!({ "legacy": null })).unwrap();
        assert!(tree.get(&AttributePath::root("legacy")).unwrap().is_null());
    }

    #[test]
    fn nested_structures_are_navigable() {
        let tree = tree_from_json(json!({
            "network": [{ "cidr": "10.0.0.0/16" }],
        }))
        .unwrap();
        let path = AttributePath::root("network").index(0).attr("cidr");
        assert_eq!(tree.get(&path).unwrap(), TypedValue::known("10.0.0.0/16"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert_eq!(
            tree_from_json(json!([1, 2, 3])),
            Err(JsonError::RootNotAnObject { got: "array" })
        );
    }

    #[test]
    fn large_numbers_fall_back_to_float() {
        let value = typed_value_from_json(json!(1e300));
        assert_eq!(value, TypedValue::known(1e300_f64));
    }
}

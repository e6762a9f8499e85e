//! # crossval
//!
//! Cross-attribute constraint validation for hierarchical configuration
//! schemas.
//!
//! ## Quick Start
//!
//! ```rust
//! use crossval::prelude::*;
//!
//! // On attribute "certificate": it conflicts with an inline PEM and, once
//! // configured, requires a key alongside.
//! let checks = all(evaluators![
//!     conflicts_with([PathExpression::root("certificate_pem")]),
//!     required_with([PathExpression::root("private_key")]),
//! ]);
//!
//! let tree = ConfigTree::new()
//!     .with_attr("certificate", TypedValue::known("arn:acm:..."))
//!     .with_attr("certificate_pem", TypedValue::Null)
//!     .with_attr("private_key", TypedValue::known("arn:kms:..."));
//! let value = tree.get(&AttributePath::root("certificate")).unwrap();
//! let request = Request::new(&tree, AttributePath::root("certificate"), value);
//! assert!(checks.evaluate(&request).is_empty());
//! ```
//!
//! ## Model
//!
//! Configuration values are tri-state ([`config::TypedValue`]): null,
//! unknown, or a known [`config::Value`]. Evaluators never guess about
//! unknowns; they return no findings and the host revalidates once the tree
//! settles.
//!
//! Findings are [`foundation::Diagnostic`]s, tagged with a severity and an
//! origin: configuration mistakes for the practitioner, definition bugs for
//! the schema author. The two are never conflated.
//!
//! ## Built-in Evaluators
//!
//! - **Cross-attribute**: [`AtLeastOneOf`](evaluators::AtLeastOneOf),
//!   [`ExactlyOneOf`](evaluators::ExactlyOneOf),
//!   [`ConflictsWith`](evaluators::ConflictsWith),
//!   [`RequiredWith`](evaluators::RequiredWith),
//!   [`DifferentFrom`](evaluators::DifferentFrom),
//!   [`PreferWriteOnlyAttribute`](evaluators::PreferWriteOnlyAttribute)
//! - **Combinators**: [`All`](combinators::All), [`Any`](combinators::Any),
//!   [`AnyWithAllWarnings`](combinators::AnyWithAllWarnings)
//! - **Leaves**: [`Required`](validators::Required),
//!   [`OneOf`](validators::OneOf), [`AtLeast`](validators::AtLeast),
//!   [`AtMost`](validators::AtMost),
//!   [`LengthBetween`](validators::LengthBetween),
//!   [`MatchesPattern`](validators::MatchesPattern)
//!
//! Use the [`evaluator!`] macro for zero-boilerplate leaf evaluators, or
//! implement [`Evaluate`](foundation::Evaluate) manually for complex cases.

pub mod combinators;
pub mod config;
pub mod evaluators;
pub mod foundation;
mod macros;
pub mod path;
pub mod prelude;
pub mod validators;

//! # bulwark-validator
//!
//! Rule-driven validation of whole object graphs.
//!
//! Types describe themselves to the validator through [`Validatable`]: a
//! value is absent, a leaf, a nullable wrapper, or a node with a size, items
//! and rule-carrying fields. [`GraphValidator`] walks that description and
//! reports *every* violation with a path such as `$.items[2].name`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bulwark_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Order {
//!     #[validate(required)]
//!     customer: Option<String>,
//!
//!     #[validate(min_items = 1, max_items = 50, items_required)]
//!     lines: Vec<Option<Line>>,
//!
//!     note: String, // no rule: neither checked nor visited
//! }
//!
//! let report = validate(&order);
//! if !report.is_valid() {
//!     eprintln!("{}", report.format(Some("order rejected")));
//! }
//! ```
//!
//! ## Rules
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `required` | absent / `None` is an error |
//! | `min_items = N`, `max_items = N` | collection size bounds |
//! | `items_required` | absent collection items are errors |
//! | `enumerable = false` | do not visit collection items |
//! | `rename = "Name"` | path segment used for the field |
//!
//! The walk assumes an acyclic graph. Set
//! [`ValidatorConfig::max_depth`] to bound it.

// Lets the derive's `::bulwark_validator` paths resolve inside this crate.
extern crate self as bulwark_validator;

pub mod config;
pub mod foundation;
mod graph;
mod impls;
pub mod prelude;
pub mod report;

pub use config::{ConfigError, ValidatorConfig};
pub use foundation::{
    FieldNode, FieldPath, Node, Shape, Validatable, ValidationError, ValidationRule, codes,
};
pub use graph::{GraphValidator, validate};
pub use report::{ValidationReport, format_errors};

#[cfg(feature = "derive")]
pub use bulwark_validator_macros::Validatable;

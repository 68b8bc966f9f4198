//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use bulwark_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Batch {
//!     #[validate(min_items = 1, items_required)]
//!     jobs: Vec<Option<Job>>,
//! }
//!
//! assert!(validate(&batch).is_valid());
//! ```

pub use crate::config::{ConfigError, ValidatorConfig};
pub use crate::foundation::{Node, Shape, Validatable, ValidationError, ValidationRule};
pub use crate::graph::{GraphValidator, validate};
pub use crate::report::{ValidationReport, format_errors};

#[cfg(feature = "derive")]
pub use bulwark_validator_macros::Validatable;

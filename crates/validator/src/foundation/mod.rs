//! Building blocks shared by the walk, the derive and hand-written impls.
//!
//! - **Shape model**: [`Validatable`], [`Shape`], [`Node`], [`FieldNode`]
//! - **Rules**: [`ValidationRule`]
//! - **Errors**: [`ValidationError`], [`codes`]
//! - **Paths**: [`FieldPath`]

mod error;
mod path;
mod rule;
mod traits;

pub use error::{ValidationError, codes};
pub use path::FieldPath;
pub use rule::ValidationRule;
pub use traits::{FieldNode, Node, Shape, Validatable};

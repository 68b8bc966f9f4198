//! # bulwark-guard
//!
//! Guard clauses that validate object graphs and raise typed errors.
//!
//! This crate ties [`bulwark_error`] and [`bulwark_validator`] together and
//! re-exports both, so most code only needs the prelude:
//!
//! ```rust,ignore
//! use bulwark_guard::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Transfer {
//!     #[validate(required)]
//!     account: Option<String>,
//!     #[validate(min_items = 1)]
//!     legs: Vec<Leg>,
//! }
//!
//! fn post(transfer: &Transfer, limit: u64) -> Result<(), Raised<ArgumentError>> {
//!     if_is_not_valid::<ArgumentError, _>(transfer, Some("posting transfer"))?;
//!     Raise::<ArgumentError>::if_true_msg(transfer.total() > limit, "over limit")?;
//!     Ok(())
//! }
//! ```
//!
//! The derive refers to `::bulwark_validator`. Crates that depend on this
//! crate alone point it at the re-export with
//! `#[validate(crate = "bulwark_guard::validator")]`.

mod guard;
pub mod prelude;

pub use bulwark_error as error;
pub use bulwark_validator as validator;

pub use guard::{Guard, if_is_not_valid, if_is_valid};

//! # bulwark-error
//!
//! Typed error raising for guard clauses.
//!
//! A guard clause decides *whether* to fail; this crate decides *how* to build
//! the error it fails with. Error kinds describe the constructors they offer
//! through a [`ConstructorSet`], and [`Raise`] picks the right one at the
//! call site:
//!
//! ```rust,ignore
//! use bulwark_error::{ErrorKind, ConstructorSet, Raise, raise_args};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("quota exceeded: {0}")]
//! struct QuotaExceeded(String);
//!
//! impl ErrorKind for QuotaExceeded {
//!     fn constructors() -> ConstructorSet<Self> {
//!         ConstructorSet::new()
//!             .no_args(|| QuotaExceeded("no details".into()))
//!             .message(QuotaExceeded)
//!     }
//! }
//!
//! Raise::<QuotaExceeded>::if_true_msg(used > limit, "tenant over limit")?;
//! ```
//!
//! When the requested constructor shape does not exist the raise still
//! fails, but with [`ThrowerMisconfigured`] so a wrongly chosen error kind is
//! never mistaken for the condition the guard was checking.

pub mod args;
pub mod cache;
pub mod constructor;
pub mod kinds;
pub mod misconfigured;
pub mod raise;

pub use args::RaiseArgs;
pub use cache::KindEntry;
pub use constructor::{
    Access, ArgList, ArgValue, Cause, Constructor, ConstructorHandle, ConstructorSet, ErrorKind,
    Signature,
};
pub use kinds::{ArgumentError, ArgumentNullError, InvalidOperationError};
pub use misconfigured::{MisconfigurationReason, ThrowerMisconfigured};
pub use raise::{Raise, Raised};

/// Result alias for guard clauses raising `E`.
pub type RaiseResult<E> = Result<(), Raised<E>>;

//! # bulwark-validator-macros
//!
//! `#[derive(Validatable)]` for `bulwark-validator`. Use it through the
//! re-export in `bulwark_validator` rather than depending on this crate.
//!
//! ```ignore
//! use bulwark_validator::Validatable;
//!
//! #[derive(Validatable)]
//! #[validate(rename_all = "PascalCase")]
//! pub struct Shipment {
//!     #[validate(required)]
//!     carrier: Option<String>,
//!
//!     #[validate(min_items = 1, max_items = 20, items_required)]
//!     parcels: Vec<Option<Parcel>>,
//!
//!     #[validate(rename = "ETA")]
//!     eta: Option<u64>,
//!
//!     internal_note: String, // not validated
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod support;
mod validatable;

/// Derive macro for the `Validatable` trait.
///
/// # Attributes
///
/// ## Container attributes (`#[validate(...)]` on the type)
///
/// - `rename_all = "..."` - Path segment casing for fields: `PascalCase`, `camelCase` or `snake_case` (default: the field name as written)
/// - `crate = "..."` - Path to `bulwark_validator` when it is re-exported (default: `::bulwark_validator`)
///
/// ## Field attributes
///
/// Only fields carrying `#[validate]` or `#[validate(...)]` are checked and
/// descended into.
///
/// - `required` - `None` is an error
/// - `min_items = N` / `max_items = N` - Inclusive bounds on a collection's item count
/// - `items_required` - `None` items of a collection are errors
/// - `enumerable = false` - Do not visit the items of a collection
/// - `rename = "..."` - Path segment for this field
///
/// Structs with named fields become objects, tuple structs use the field
/// index as the segment, and unit structs are leaves. Enums without fields
/// are leaves and count as value types, so `Option<MyEnum>` reports
/// `required, found null`.
#[proc_macro_derive(Validatable, attributes(validate))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    validatable::derive(input)
}

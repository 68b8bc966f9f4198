//! `Validatable` for std types.

mod collection;
mod pointer;
mod scalar;

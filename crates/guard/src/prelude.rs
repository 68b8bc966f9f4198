//! Prelude module for convenient imports.

pub use crate::guard::{Guard, if_is_not_valid, if_is_valid};

pub use bulwark_error::{
    ArgumentError, ArgumentNullError, ConstructorSet, ErrorKind, InvalidOperationError, Raise,
    RaiseArgs, RaiseResult, Raised, ThrowerMisconfigured, raise_args,
};
pub use bulwark_validator::{
    GraphValidator, Validatable, ValidationError, ValidationReport, ValidationRule,
    ValidatorConfig, format_errors, validate,
};

//! The error reported when an error kind cannot be built as requested.

use thiserror::Error;

/// Why a raise could not construct the requested error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MisconfigurationReason {
    /// The kind was registered as non-instantiable.
    #[error("non-instantiable error kind")]
    NonInstantiable,

    /// No public or internal `()` constructor is registered.
    #[error("missing no-args constructor")]
    MissingNoArgsConstructor,

    /// Neither a `(message, cause)` nor a `(message)` constructor is registered.
    #[error("missing message constructor")]
    MissingMessageConstructor,

    /// An argument was absent, so the constructor signature cannot be inferred.
    #[error("null argument breaks type inference (argument {index})")]
    NullArgument {
        /// Zero-based position of the first absent argument.
        index: usize,
    },

    /// A constructor matched by signature but refused the argument values.
    ///
    /// The tuple [`ArgList`](crate::ArgList) impls never refuse; this comes
    /// from hand-written impls whose `from_values` rejects some values.
    #[error("constructor rejected its arguments")]
    ConstructorRejected,
}

/// Raised instead of the requested error kind when that kind cannot be built.
///
/// This is always a programming error at the guard site (wrong error kind or
/// wrong argument shape), never a data error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("thrower misconfigured for `{kind}`: {reason}")]
pub struct ThrowerMisconfigured {
    kind: &'static str,
    reason: MisconfigurationReason,
}

impl ThrowerMisconfigured {
    /// Creates a misconfiguration report for the named error kind.
    pub fn new(kind: &'static str, reason: MisconfigurationReason) -> Self {
        Self { kind, reason }
    }

    /// Creates a report naming `E` via [`std::any::type_name`].
    pub fn for_kind<E: ?Sized>(reason: MisconfigurationReason) -> Self {
        Self::new(std::any::type_name::<E>(), reason)
    }

    /// Type name of the error kind that could not be built.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Diagnostic reason.
    pub fn reason(&self) -> MisconfigurationReason {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_reason() {
        let err = ThrowerMisconfigured::new("my::Kind", MisconfigurationReason::MissingNoArgsConstructor);
        assert_eq!(
            err.to_string(),
            "thrower misconfigured for `my::Kind`: missing no-args constructor"
        );
    }

    #[test]
    fn null_argument_reports_index() {
        let reason = MisconfigurationReason::NullArgument { index: 2 };
        assert_eq!(
            reason.to_string(),
            "null argument breaks type inference (argument 2)"
        );
    }

    #[test]
    fn for_kind_uses_type_name() {
        let err = ThrowerMisconfigured::for_kind::<std::io::Error>(
            MisconfigurationReason::NonInstantiable,
        );
        assert!(err.kind().ends_with("io::error::Error"));
        assert_eq!(err.reason(), MisconfigurationReason::NonInstantiable);
    }
}

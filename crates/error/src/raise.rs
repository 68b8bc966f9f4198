//! The typed thrower.

use crate::args::RaiseArgs;
use crate::cache::KindEntry;
use crate::constructor::{ArgValue, Cause, ConstructorHandle, ErrorKind};
use crate::misconfigured::{MisconfigurationReason, ThrowerMisconfigured};
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// RAISED
// ============================================================================

/// Outcome of a raise: the requested error kind, or a report that it could
/// not be built.
#[derive(Debug)]
pub enum Raised<E> {
    /// The error kind the guard asked for.
    Kind(E),
    /// The error kind could not be built as requested.
    Misconfigured(ThrowerMisconfigured),
}

impl<E> Raised<E> {
    /// The raised error kind, if construction succeeded.
    pub fn kind(&self) -> Option<&E> {
        match self {
            Self::Kind(error) => Some(error),
            Self::Misconfigured(_) => None,
        }
    }

    /// The misconfiguration report, if construction failed.
    pub fn misconfiguration(&self) -> Option<&ThrowerMisconfigured> {
        match self {
            Self::Kind(_) => None,
            Self::Misconfigured(report) => Some(report),
        }
    }

    /// Whether construction failed.
    pub fn is_misconfigured(&self) -> bool {
        matches!(self, Self::Misconfigured(_))
    }

    /// Splits into the error kind or the misconfiguration report.
    pub fn into_kind(self) -> Result<E, ThrowerMisconfigured> {
        match self {
            Self::Kind(error) => Ok(error),
            Self::Misconfigured(report) => Err(report),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(error) => fmt::Display::fmt(error, f),
            Self::Misconfigured(report) => fmt::Display::fmt(report, f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Raised<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Kind(error) => error.source(),
            Self::Misconfigured(report) => report.source(),
        }
    }
}

impl<E> From<ThrowerMisconfigured> for Raised<E> {
    fn from(report: ThrowerMisconfigured) -> Self {
        Self::Misconfigured(report)
    }
}

// ============================================================================
// RAISE
// ============================================================================

/// Raises `E` when a guard condition holds.
///
/// Three construction paths exist, each with a `true` and a `false`
/// polarity:
///
/// | Call | Constructor used |
/// |------|------------------|
/// | [`if_true`](Self::if_true) | `()` |
/// | [`if_true_msg`](Self::if_true_msg) | `(String, Option<Cause>)`, else `(String,)` |
/// | [`if_true_with`](Self::if_true_with) | exact match on the argument types, else `()` |
///
/// Nothing is resolved or built while the condition does not trigger.
///
/// # Examples
///
/// ```rust,ignore
/// use bulwark_error::{ArgumentError, Raise, raise_args};
///
/// fn set_port(port: u16) -> Result<(), Raised<ArgumentError>> {
///     Raise::<ArgumentError>::if_true_msg(port == 0, "port must be non-zero")?;
///     Raise::<ArgumentError>::if_false_with(
///         port >= 1024,
///         raise_args!["privileged port".to_string(), "port".to_string()],
///     )?;
///     Ok(())
/// }
/// ```
pub struct Raise<E>(PhantomData<fn() -> E>);

impl<E: ErrorKind> Raise<E> {
    /// Raises `E` via its `()` constructor when `condition` is true.
    pub fn if_true(condition: bool) -> Result<(), Raised<E>> {
        if condition { Err(Self::build()) } else { Ok(()) }
    }

    /// Raises `E` via its `()` constructor when `condition` is false.
    pub fn if_false(condition: bool) -> Result<(), Raised<E>> {
        Self::if_true(!condition)
    }

    /// Raises `E` via its message constructor when `condition` is true.
    pub fn if_true_msg(condition: bool, message: impl Into<String>) -> Result<(), Raised<E>> {
        if condition {
            Err(Self::build_msg(message))
        } else {
            Ok(())
        }
    }

    /// Raises `E` via its message constructor when `condition` is false.
    pub fn if_false_msg(condition: bool, message: impl Into<String>) -> Result<(), Raised<E>> {
        Self::if_true_msg(!condition, message)
    }

    /// Raises `E` via the constructor matching `args` when `condition` is true.
    pub fn if_true_with(condition: bool, args: RaiseArgs) -> Result<(), Raised<E>> {
        if condition {
            Err(Self::build_with(args))
        } else {
            Ok(())
        }
    }

    /// Raises `E` via the constructor matching `args` when `condition` is false.
    pub fn if_false_with(condition: bool, args: RaiseArgs) -> Result<(), Raised<E>> {
        Self::if_true_with(!condition, args)
    }

    /// The cached constructor entry for `E`.
    pub fn entry() -> std::sync::Arc<KindEntry<E>> {
        KindEntry::get()
    }

    /// Builds `E` with its `()` constructor.
    pub fn build() -> Raised<E> {
        let entry = KindEntry::<E>::get();
        if entry.is_non_instantiable() {
            return misconfigured(&entry, MisconfigurationReason::NonInstantiable);
        }
        match entry.no_args() {
            Some(handle) => invoke(&entry, handle, Vec::new()),
            None => misconfigured(&entry, MisconfigurationReason::MissingNoArgsConstructor),
        }
    }

    /// Builds `E` with its message constructor.
    pub fn build_msg(message: impl Into<String>) -> Raised<E> {
        let entry = KindEntry::<E>::get();
        if entry.is_non_instantiable() {
            return misconfigured(&entry, MisconfigurationReason::NonInstantiable);
        }
        let Some(handle) = entry.message() else {
            return misconfigured(&entry, MisconfigurationReason::MissingMessageConstructor);
        };

        let mut values: Vec<ArgValue> = vec![Box::new(message.into())];
        if entry.message_arity() == 2 {
            values.push(Box::new(None::<Cause>));
        }
        invoke(&entry, handle, values)
    }

    /// Builds `E` with the constructor whose signature matches `args`.
    ///
    /// Falls back to [`build`](Self::build) when no constructor matches.
    pub fn build_with(args: RaiseArgs) -> Raised<E> {
        let entry = KindEntry::<E>::get();
        if entry.is_non_instantiable() {
            return misconfigured(&entry, MisconfigurationReason::NonInstantiable);
        }
        if let Some(index) = args.first_null() {
            return misconfigured(&entry, MisconfigurationReason::NullArgument { index });
        }
        let Some(signature) = args.signature() else {
            return misconfigured(&entry, MisconfigurationReason::NullArgument { index: 0 });
        };

        match entry.constructors().find(&signature) {
            Some(handle) => invoke(&entry, handle, args.into_values()),
            None => {
                tracing::debug!(
                    kind = entry.kind(),
                    %signature,
                    "no constructor matches the arguments, falling back to no-args"
                );
                Self::build()
            }
        }
    }
}

fn invoke<E>(entry: &KindEntry<E>, handle: ConstructorHandle, values: Vec<ArgValue>) -> Raised<E> {
    match entry.constructors().get(handle).and_then(|c| c.invoke(values)) {
        Some(error) => Raised::Kind(error),
        None => misconfigured(entry, MisconfigurationReason::ConstructorRejected),
    }
}

fn misconfigured<E>(entry: &KindEntry<E>, reason: MisconfigurationReason) -> Raised<E> {
    tracing::warn!(kind = entry.kind(), %reason, "cannot raise error kind");
    Raised::Misconfigured(ThrowerMisconfigured::for_kind::<E>(reason))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::{ArgList, ConstructorSet, Signature};
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    enum Probe {
        #[error("empty")]
        Empty,
        #[error("message: {0}")]
        Message(String),
        #[error("message with cause: {0}")]
        MessageWithCause(String, bool),
        #[error("code {0}")]
        Code(u32),
    }

    impl ErrorKind for Probe {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new()
                .no_args(|| Probe::Empty)
                .message(Probe::Message)
                .message_with_cause(|m, cause| Probe::MessageWithCause(m, cause.is_some()))
                .public(|(code,): (u32,)| Probe::Code(code))
        }
    }

    #[derive(Debug, Error)]
    #[error("abstract")]
    struct Abstract;

    impl ErrorKind for Abstract {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::non_instantiable()
        }
    }

    #[derive(Debug, Error)]
    #[error("bare")]
    struct Bare;

    impl ErrorKind for Bare {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new().private(|(): ()| Bare)
        }
    }

    fn reason<E: fmt::Debug>(raised: Result<(), Raised<E>>) -> MisconfigurationReason {
        raised
            .unwrap_err()
            .misconfiguration()
            .map(ThrowerMisconfigured::reason)
            .unwrap()
    }

    #[test]
    fn false_condition_never_raises() {
        assert!(Raise::<Abstract>::if_true(false).is_ok());
        assert!(Raise::<Abstract>::if_false_msg(true, "x").is_ok());
        assert!(Raise::<Abstract>::if_true_with(false, RaiseArgs::new().null_arg()).is_ok());
    }

    #[test]
    fn no_args_path() {
        let raised = Raise::<Probe>::if_true(true).unwrap_err();
        assert_eq!(raised.kind(), Some(&Probe::Empty));
    }

    #[test]
    fn message_path_prefers_cause_shape() {
        let raised = Raise::<Probe>::if_false_msg(false, "boom").unwrap_err();
        assert_eq!(
            raised.into_kind().unwrap(),
            Probe::MessageWithCause("boom".into(), false)
        );
    }

    #[test]
    fn args_path_matches_exact_signature() {
        let raised = Raise::<Probe>::if_true_with(true, RaiseArgs::new().arg(7_u32)).unwrap_err();
        assert_eq!(raised.kind(), Some(&Probe::Code(7)));
    }

    #[test]
    fn args_path_falls_back_to_no_args() {
        // u64 is not u32: exact matching only.
        let raised = Raise::<Probe>::if_true_with(true, RaiseArgs::new().arg(7_u64)).unwrap_err();
        assert_eq!(raised.kind(), Some(&Probe::Empty));
    }

    #[test]
    fn args_path_with_string_selects_message_constructor() {
        let raised =
            Raise::<Probe>::if_true_with(true, RaiseArgs::new().arg("hi".to_string())).unwrap_err();
        assert_eq!(raised.kind(), Some(&Probe::Message("hi".into())));
    }

    /// Positive port numbers only; `0` matches the signature but is refused.
    struct Port(u32);

    impl ArgList for Port {
        fn signature() -> Signature {
            Signature::empty().with::<u32>()
        }

        fn from_values(values: Vec<ArgValue>) -> Option<Self> {
            let (port,) = <(u32,)>::from_values(values)?;
            (port != 0).then_some(Self(port))
        }
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("port {0}")]
    struct PortError(u32);

    impl ErrorKind for PortError {
        fn constructors() -> ConstructorSet<Self> {
            ConstructorSet::new()
                .no_args(|| PortError(0))
                .public(|Port(port): Port| PortError(port))
        }
    }

    #[test]
    fn refusing_arg_list_is_misconfigured() {
        let raised = Raise::<PortError>::build_with(RaiseArgs::new().arg(8080_u32));
        assert_eq!(raised.kind(), Some(&PortError(8080)));

        let raised = Raise::<PortError>::if_true_with(true, RaiseArgs::new().arg(0_u32));
        assert_eq!(reason(raised), MisconfigurationReason::ConstructorRejected);
    }

    #[test]
    fn misconfiguration_names_the_kind() {
        let raised = Raise::<Abstract>::build();
        let report = raised.misconfiguration().unwrap();
        assert_eq!(report.kind(), std::any::type_name::<Abstract>());
    }

    #[test]
    fn abstract_kind_is_misconfigured_on_every_path() {
        assert_eq!(
            reason(Raise::<Abstract>::if_true(true)),
            MisconfigurationReason::NonInstantiable
        );
        assert_eq!(
            reason(Raise::<Abstract>::if_true_msg(true, "m")),
            MisconfigurationReason::NonInstantiable
        );
        assert_eq!(
            reason(Raise::<Abstract>::if_true_with(true, RaiseArgs::new().arg(1_u8))),
            MisconfigurationReason::NonInstantiable
        );
    }

    #[test]
    fn private_constructors_are_not_used() {
        assert_eq!(
            reason(Raise::<Bare>::if_true(true)),
            MisconfigurationReason::MissingNoArgsConstructor
        );
        assert_eq!(
            reason(Raise::<Bare>::if_true_msg(true, "m")),
            MisconfigurationReason::MissingMessageConstructor
        );
    }

    #[test]
    fn null_argument_is_misconfigured() {
        let args = RaiseArgs::new().arg(1_u32).null_arg();
        assert_eq!(
            reason(Raise::<Probe>::if_true_with(true, args)),
            MisconfigurationReason::NullArgument { index: 1 }
        );
    }

    #[test]
    fn display_is_transparent() {
        let raised = Raise::<Probe>::build_msg("disk full");
        assert_eq!(raised.to_string(), "message with cause: disk full");

        let raised = Raise::<Bare>::build();
        assert!(raised.to_string().contains("missing no-args constructor"));
    }
}

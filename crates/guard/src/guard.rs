//! Validation guards.

use bulwark_error::{ErrorKind, Raise, RaiseResult};
use bulwark_validator::{GraphValidator, Validatable, ValidationReport};
use std::marker::PhantomData;

/// Raises `E` when `value` breaks any of its validation rules.
///
/// The error is built through the message path with the formatted report,
/// `prefix` leading the header when given:
///
/// ```text
/// creating order - Following paths failed the validation checks:
///  >> $.Lines: minimum item count is 1, found 0
/// ```
///
/// # Examples
///
/// ```rust,ignore
/// use bulwark_guard::prelude::*;
///
/// fn submit(order: &Order) -> Result<(), Raised<ArgumentError>> {
///     if_is_not_valid::<ArgumentError, _>(order, Some("creating order"))?;
///     // ...
///     Ok(())
/// }
/// ```
pub fn if_is_not_valid<E, T>(value: &T, prefix: Option<&str>) -> RaiseResult<E>
where
    E: ErrorKind,
    T: Validatable + ?Sized,
{
    Guard::<E>::new().if_is_not_valid(value, prefix)
}

/// Raises `E` with `message` when `value` passes every validation rule.
pub fn if_is_valid<E, T>(value: &T, message: impl Into<String>) -> RaiseResult<E>
where
    E: ErrorKind,
    T: Validatable + ?Sized,
{
    Guard::<E>::new().if_is_valid(value, message)
}

// ============================================================================
// GUARD
// ============================================================================

/// Validation guards bound to one error kind and one validator.
///
/// Use this over the free functions to validate with a custom
/// [`ValidatorConfig`](bulwark_validator::ValidatorConfig), e.g. a different
/// root placeholder or a depth bound.
///
/// ```rust,ignore
/// let guard = Guard::<ArgumentError>::with_validator(
///     GraphValidator::with_config(ValidatorConfig::default().with_root("order"))?,
/// );
/// guard.if_is_not_valid(&order, None)?;
/// ```
pub struct Guard<E> {
    validator: GraphValidator,
    _kind: PhantomData<fn() -> E>,
}

impl<E: ErrorKind> Guard<E> {
    /// Creates a guard using the default validator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_validator(GraphValidator::new())
    }

    /// Creates a guard using `validator`.
    #[must_use]
    pub fn with_validator(validator: GraphValidator) -> Self {
        Self {
            validator,
            _kind: PhantomData,
        }
    }

    /// The validator this guard checks with.
    #[must_use]
    pub fn validator(&self) -> &GraphValidator {
        &self.validator
    }

    /// See [`if_is_not_valid`].
    pub fn if_is_not_valid<T>(&self, value: &T, prefix: Option<&str>) -> RaiseResult<E>
    where
        T: Validatable + ?Sized,
    {
        let report = self.check(value);
        if report.is_valid() {
            return Ok(());
        }
        tracing::debug!(
            kind = std::any::type_name::<E>(),
            errors = report.len(),
            "validation guard raising"
        );
        Err(Raise::<E>::build_msg(report.format(prefix)))
    }

    /// See [`if_is_valid`].
    pub fn if_is_valid<T>(&self, value: &T, message: impl Into<String>) -> RaiseResult<E>
    where
        T: Validatable + ?Sized,
    {
        Raise::<E>::if_true_msg(self.check(value).is_valid(), message)
    }

    fn check<T: Validatable + ?Sized>(&self, value: &T) -> ValidationReport {
        self.validator.validate(&value)
    }
}

impl<E: ErrorKind> Default for Guard<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("kind", &std::any::type_name::<E>())
            .field("validator", &self.validator)
            .finish()
    }
}

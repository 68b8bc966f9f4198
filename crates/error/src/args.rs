//! Heterogeneous argument lists for the arbitrary-constructor raise path.

use crate::constructor::{ArgValue, Signature};
use std::any::{Any, TypeId};
use std::fmt;

struct Slot {
    value: Option<ArgValue>,
    ty: Option<(TypeId, &'static str)>,
}

/// Ordered arguments for [`Raise::if_true_with`](crate::Raise::if_true_with).
///
/// Each argument records its exact type, so the list can be matched against
/// the constructors an error kind registers. An absent argument (see
/// [`RaiseArgs::null_arg`]) has no type; raising with one present always
/// fails with
/// [`MisconfigurationReason::NullArgument`](crate::MisconfigurationReason::NullArgument).
///
/// # Examples
///
/// ```rust,ignore
/// use bulwark_error::{RaiseArgs, raise_args};
///
/// let args = raise_args!["limit".to_string(), 42_u32];
/// let same = RaiseArgs::new().arg("limit".to_string()).arg(42_u32);
/// ```
#[derive(Default)]
pub struct RaiseArgs {
    slots: Vec<Slot>,
}

impl RaiseArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a present argument of type `T`.
    #[must_use = "builder methods must be chained or built"]
    pub fn arg<T: Any + Send>(mut self, value: T) -> Self {
        self.slots.push(Slot {
            value: Some(Box::new(value)),
            ty: Some((TypeId::of::<T>(), std::any::type_name::<T>())),
        });
        self
    }

    /// Appends an absent argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn null_arg(mut self) -> Self {
        self.slots.push(Slot {
            value: None,
            ty: None,
        });
        self
    }

    /// Appends `value` if present, an absent argument otherwise.
    #[must_use = "builder methods must be chained or built"]
    pub fn opt_arg<T: Any + Send>(self, value: Option<T>) -> Self {
        match value {
            Some(value) => self.arg(value),
            None => self.null_arg(),
        }
    }

    /// Number of arguments, present or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the first absent argument.
    pub fn first_null(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.value.is_none())
    }

    /// Signature of the arguments, or `None` if any is absent.
    pub fn signature(&self) -> Option<Signature> {
        let mut signature = Signature::empty();
        for slot in &self.slots {
            let (id, name) = slot.ty?;
            signature.push_raw(id, name);
        }
        Some(signature)
    }

    pub(crate) fn into_values(self) -> Vec<ArgValue> {
        self.slots.into_iter().filter_map(|slot| slot.value).collect()
    }
}

impl fmt::Debug for RaiseArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.slots
                    .iter()
                    .map(|slot| slot.ty.map_or("<null>", |(_, name)| name)),
            )
            .finish()
    }
}

/// Builds a [`RaiseArgs`] from a comma-separated list of expressions.
///
/// ```rust,ignore
/// Raise::<ArgumentError>::if_true_with(
///     port == 0,
///     raise_args!["port must be non-zero".to_string(), "port".to_string()],
/// )?;
/// ```
#[macro_export]
macro_rules! raise_args {
    () => {
        $crate::RaiseArgs::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::RaiseArgs::new()$(.arg($value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::ArgList;

    #[test]
    fn signature_matches_static_tuple() {
        let args = RaiseArgs::new().arg("a".to_string()).arg(3_u8);
        assert_eq!(args.signature(), Some(<(String, u8)>::signature()));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn null_argument_has_no_signature() {
        let args = RaiseArgs::new().arg(1_i32).null_arg().arg(2_i32);
        assert_eq!(args.first_null(), Some(1));
        assert_eq!(args.signature(), None);
    }

    #[test]
    fn opt_arg_maps_none_to_null() {
        let args = RaiseArgs::new().opt_arg(Some(5_u16)).opt_arg::<u16>(None);
        assert_eq!(args.first_null(), Some(1));
    }

    #[test]
    fn macro_builds_in_order() {
        let args = crate::raise_args![1_i64, "x".to_string()];
        assert_eq!(args.signature(), Some(<(i64, String)>::signature()));
        assert!(crate::raise_args![].is_empty());
    }

    #[test]
    fn debug_lists_type_names() {
        let args = RaiseArgs::new().arg(1_u8).null_arg();
        assert_eq!(format!("{args:?}"), r#"["u8", "<null>"]"#);
    }
}

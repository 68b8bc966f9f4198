//! Leaves: scalars and strings.

use crate::foundation::{Shape, Validatable};
use std::borrow::Cow;

// ============================================================================
// VALUE TYPES
// ============================================================================

macro_rules! impl_value_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validatable for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Leaf
                }

                #[inline]
                fn is_value_type() -> bool {
                    true
                }
            }
        )*
    };
}

impl_value_leaf!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// ============================================================================
// STRINGS
// ============================================================================

impl Validatable for str {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Validatable for String {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Validatable for Cow<'_, str> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }
}

// ============================================================================
// OPTION
// ============================================================================

impl<T: Validatable> Validatable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) if T::is_value_type() => Shape::Nullable(Some(value)),
            Some(value) => value.shape(),
            None if T::is_value_type() => Shape::Nullable(None),
            None => Shape::Absent,
        }
    }
}

//! Transparent wrappers: the walk sees straight through them.

use crate::foundation::{Shape, Validatable};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_transparent {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Validatable + ?Sized> Validatable for $ptr<T> {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }
            }
        )*
    };
}

impl_transparent!(Box, Rc, Arc);

impl<T: Validatable + ?Sized> Validatable for &T {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointers_delegate() {
        assert!(matches!(Box::new(vec![1_i32]).shape(), Shape::Node(_)));
        assert!(matches!(Arc::new(5_u8).shape(), Shape::Leaf));
        assert!(matches!(Rc::<str>::from("x").shape(), Shape::Leaf));
        assert!(matches!((&None::<String>).shape(), Shape::Absent));
    }

    #[test]
    fn boxed_scalar_in_option_is_absent_not_null() {
        assert!(!<Box<i32>>::is_value_type());
        assert!(matches!(None::<Box<i32>>.shape(), Shape::Absent));
    }
}

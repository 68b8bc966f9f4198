//! Sized, enumerable collections.

use crate::foundation::{Node, Shape, Validatable};
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::BuildHasher;

impl<T: Validatable> Validatable for [T] {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

impl<T: Validatable, const N: usize> Validatable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

impl<T: Validatable> Validatable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

impl<T: Validatable> Validatable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

impl<T: Validatable> Validatable for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

// Item order, and so error order, follows the set's iteration order.
impl<T: Validatable, S: BuildHasher> Validatable for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Node::sequence(self).into()
    }
}

//! Unbounded and repeated sources.
use std::iter;

use either::Either;

use crate::{
    element::{Element, Placeholder},
    sequence::Sequence,
};

impl Sequence<i64> {
    /// Infinite ascending integers from `start`.
    pub fn integers(start: i64) -> Self {
        Sequence::new(start..)
    }
}

impl<T: Element> Sequence<T> {
    /// `length` copies of `value`, or infinitely many when `length` is `None`.
    pub fn repeat(value: T, length: Option<usize>) -> Self {
        let copies = iter::repeat(value);
        Sequence::new(match length {
            Some(length) => Either::Left(copies.take(length)),
            None => Either::Right(copies),
        })
    }
}

impl<T: Placeholder> Sequence<T> {
    /// [`Sequence::repeat`] of the element type's "no value" marker.
    pub fn nones(length: Option<usize>) -> Self {
        Self::repeat(T::placeholder(), length)
    }
}

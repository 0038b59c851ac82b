//! Positional edits and concatenation.
use std::iter;

use crate::{
    element::Element,
    sequence::{IntoSequence, Sequence},
};

impl<T: Element> Sequence<T> {
    /// Replace the element at `index` by `value`. An index past the end leaves the sequence
    /// unchanged.
    pub fn substitute(&self, index: usize, value: T) -> Self {
        let mut value = Some(value);
        Sequence::new(self.iter().enumerate().map(move |(position, item)| {
            if position == index {
                value.take().unwrap_or(item)
            } else {
                item
            }
        }))
    }

    /// Splice `value` before position `index`. An index past the end appends it.
    pub fn insert(&self, index: usize, value: T) -> Self {
        let mut cursor = self.iter();
        let mut value = Some(value);
        Sequence::new(iter::from_fn(move || {
            if cursor.position() == index {
                if let Some(value) = value.take() {
                    return Some(value);
                }
            }
            cursor.next().or_else(|| value.take())
        }))
    }

    pub fn append(&self, value: T) -> Self {
        Sequence::new(self.iter().chain(iter::once(value)))
    }

    pub fn prepend(&self, value: T) -> Self {
        Sequence::new(iter::once(value).chain(self.iter()))
    }

    /// Concatenate `other` after `self`. `other` is not touched before `self` ends.
    pub fn extend(&self, other: impl IntoSequence<T>) -> Self {
        Sequence::new(self.iter().chain(other.into_sequence()))
    }

    /// Concatenate any number of sequences, in order.
    pub fn chain<I>(sequences: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoSequence<T>,
    {
        let sequences: Vec<Sequence<T>> = sequences
            .into_iter()
            .map(IntoSequence::into_sequence)
            .collect();
        Sequence::new(sequences.into_iter().flatten())
    }

    /// `count` back-to-back copies of the sequence.
    pub fn times(&self, count: usize) -> Self {
        Self::chain(iter::repeat_n(self.clone(), count))
    }
}

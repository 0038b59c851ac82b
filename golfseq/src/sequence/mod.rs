//! The memoizing cache-over-producer engine.
//!
//! A [`Sequence`] wraps a one-shot producer (any `Iterator`) in an append-only buffer. Values
//! are pulled from the producer only when a consumer asks for a position that has not been
//! realized yet; every consumer then reads the same buffered value at that position.
//!
//! Lifecycle of the shared state:
//!  - `producer: Some(_)`: the sequence is open, more values may follow.
//!  - `producer: None`: the producer signalled end-of-data and was dropped. The buffer length
//!    is now the logical length of the sequence and never changes again.
//!
//! Cloning a [`Sequence`] is cheap and yields a handle to the *same* sequence (same buffer,
//! same producer). Independent traversals are obtained with [`Sequence::iter`], each returning
//! a [`Cursor`] that tracks its own read position into the shared buffer.
//!
//! Operations documented as *eager* ([`Sequence::exhaust`], [`Sequence::len`], negative
//! [`Sequence::get`], negative-step [`Sequence::slice`], [`Sequence::reversed`]) drain the
//! producer completely and never return on an infinite producer.
//!
//! # A note on concurrency
//! The shared state sits behind a `parking_lot::Mutex`, so a sequence may be handed to other
//! threads. The lock is held while the producer computes its next value; a producer MUST NOT
//! pull from the sequence it is producing for, which would deadlock.
//!
//! Example
//! ```
//! use golfseq::prelude::*;
//!
//! let squares = Sequence::integers(0).map(|x| x * x);
//! assert_eq!(squares.get(4).unwrap(), 16);
//! assert!(!squares.is_finished());
//!
//! let digits = Sequence::from_vec((0..10).collect::<Vec<i64>>());
//! assert_eq!(digits.get(13).unwrap(), 3);
//! assert_eq!(digits.get(-1).unwrap(), 9);
//! ```
mod compare;
mod cursor;
mod slice;

pub use compare::IntoSequence;
pub(crate) use compare::{lockstep, try_lockstep};
pub use cursor::Cursor;
pub use slice::Slice;

use std::{cmp::Ordering, fmt, sync::Arc};

use log::{debug, trace};
use parking_lot::Mutex;

use crate::{
    element::Element,
    error::{SeqError, SeqResult},
};

pub(crate) type Producer<T> = Box<dyn Iterator<Item = T> + Send>;

/// Memoized hash of a sequence, computed once on first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashSlot {
    /// The sequence was still open when first hashed; it hashes to its domain sentinel.
    Sentinel,
    /// The sequence was finished when first hashed; hash of its full content.
    Content(u64),
}

struct Cache<T> {
    buffer: Vec<T>,
    producer: Option<Producer<T>>,
    hash: Option<HashSlot>,
}

impl<T> Cache<T> {
    #[inline]
    fn is_finished(&self) -> bool {
        self.producer.is_none()
    }

    /// Pull a single value from the producer into the buffer. Returns `false` once the
    /// producer is exhausted.
    fn drain(&mut self) -> bool {
        let Some(producer) = self.producer.as_mut() else {
            return false;
        };

        match producer.next() {
            Some(item) => {
                self.buffer.push(item);
                true
            }
            None => {
                self.producer = None;
                trace!("Producer exhausted after {} elements.", self.buffer.len());
                false
            }
        }
    }

    /// Realize the buffer up to and including `index`. Returns `false` if the producer ended
    /// before that position.
    fn realize_to(&mut self, index: usize) -> bool {
        while self.buffer.len() <= index {
            if !self.drain() {
                return false;
            }
        }
        true
    }

    fn exhaust(&mut self) {
        if let Some(producer) = self.producer.take() {
            let before = self.buffer.len();
            self.buffer.extend(producer);
            trace!(
                "Producer exhausted after {} elements ({} pulled eagerly).",
                self.buffer.len(),
                self.buffer.len() - before
            );
        }
    }
}

/// A lazy, memoizing, re-iterable sequence.
///
/// See the [module documentation](self) for the semantics of the shared buffer.
pub struct Sequence<T> {
    cache: Arc<Mutex<Cache<T>>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<T: Element> Sequence<T> {
    /// Wrap a producer. Nothing is pulled at construction time.
    pub fn new<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self {
            cache: Arc::new(Mutex::new(Cache {
                buffer: Vec::new(),
                producer: Some(Box::new(producer.into_iter())),
                hash: None,
            })),
        }
    }

    /// Wrap an already materialized collection. The sequence is finished from the start.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            cache: Arc::new(Mutex::new(Cache {
                buffer: items,
                producer: None,
                hash: None,
            })),
        }
    }

    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Return `true` if both handles designate the same sequence instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cache, &other.cache)
    }

    /// Independent view over the sequence, starting at position 0.
    pub fn iter(&self) -> Cursor<T> {
        Cursor::new(self.clone())
    }

    /// Read the value at `index`, realizing the buffer forward if needed. Never wraps.
    pub(crate) fn fetch(&self, index: usize) -> Option<T> {
        let mut cache = self.cache.lock();
        if cache.realize_to(index) {
            Some(cache.buffer[index].clone())
        } else {
            None
        }
    }

    /// Return `true` if the sequence holds an element at `index`, pulling at most up to it.
    pub(crate) fn reaches(&self, index: usize) -> bool {
        self.cache.lock().realize_to(index)
    }

    /// Run `f` over the fully realized buffer. `f` must not touch this sequence again.
    pub(crate) fn with_exhausted<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let mut cache = self.cache.lock();
        if !cache.is_finished() {
            debug!(
                "Forcing full realization of a sequence ({} elements realized so far).",
                cache.buffer.len()
            );
            cache.exhaust();
        }
        f(&cache.buffer)
    }

    /// `true` once the producer has been fully drained.
    pub fn is_finished(&self) -> bool {
        self.cache.lock().is_finished()
    }

    /// Number of elements realized so far. Never pulls.
    pub fn realized(&self) -> usize {
        self.cache.lock().buffer.len()
    }

    /// Eager: drain the producer completely. Idempotent.
    pub fn exhaust(&self) -> &Self {
        self.with_exhausted(|_| ());
        self
    }

    /// Eager: total number of elements.
    pub fn len(&self) -> usize {
        self.with_exhausted(<[T]>::len)
    }

    /// Eager: copy of every element.
    pub fn to_vec(&self) -> Vec<T> {
        self.with_exhausted(<[T]>::to_vec)
    }

    /// Lazily check whether the sequence has no element (pulls at most one value).
    pub fn is_empty(&self) -> bool {
        !self.reaches(0)
    }

    /// Boolean coercion: `true` iff the sequence has at least one element.
    pub fn truthy(&self) -> bool {
        !self.is_empty()
    }

    /// Compare lengths without realizing more than needed.
    ///
    /// Both sides are walked in lockstep; the first one to run out decides the verdict.
    pub fn length_cmp<I: IntoIterator>(&self, other: I) -> Ordering {
        let mut lhs = self.iter();
        let mut rhs = other.into_iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(_), Some(_)) => {}
            }
        }
    }

    /// Compare the length with `n`, as if against a sequence of `n` placeholders.
    pub fn length_cmp_int(&self, n: usize) -> Ordering {
        let mut cache = self.cache.lock();
        if cache.realize_to(n) {
            Ordering::Greater
        } else {
            cache.buffer.len().cmp(&n)
        }
    }

    /// Index into the sequence.
    ///
    /// - `index >= 0` within reach: plain read, realizing forward as needed.
    /// - `index >= 0` past the end of a finished sequence: wraps modulo the length.
    /// - `index < 0`: eager, counts from the end.
    pub fn get(&self, index: isize) -> SeqResult<T> {
        let mut cache = self.cache.lock();

        if index >= 0 {
            let position = index as usize;
            if cache.realize_to(position) {
                return Ok(cache.buffer[position].clone());
            }

            // The producer ended before `position`: the sequence is finished, wrap around.
            let length = cache.buffer.len();
            if length == 0 {
                return Err(SeqError::EmptySequence { index });
            }
            Ok(cache.buffer[position % length].clone())
        } else {
            if !cache.is_finished() {
                debug!("Negative index {index} forces full realization.");
                cache.exhaust();
            }

            let length = cache.buffer.len();
            let position = length as isize + index;
            if position < 0 {
                return Err(SeqError::IndexOutOfRange { index, length });
            }
            Ok(cache.buffer[position as usize].clone())
        }
    }

    /// Slice the sequence. Nonnegative steps over nonnegative bounds stay lazy; anything that
    /// needs the total length (negative step or negative bound) is eager.
    pub fn slice(&self, slice: impl Into<Slice>) -> SeqResult<Self> {
        let slice = slice.into();
        if let Some((start, stop, step)) = slice.forward()? {
            let source = self.clone();
            let mut position = start;
            return Ok(Sequence::new(std::iter::from_fn(move || {
                if stop.is_some_and(|stop| position >= stop) {
                    return None;
                }
                let item = source.fetch(position)?;
                position = position.saturating_add(step);
                Some(item)
            })));
        }

        let length = self.len();
        let positions = slice.positions(length)?;
        let items = self.with_exhausted(|buffer| {
            positions
                .into_iter()
                .map(|position| buffer[position].clone())
                .collect()
        });
        Ok(Self::from_vec(items))
    }

    /// Lazy prefix of at most `n` elements.
    pub fn take(&self, n: usize) -> Self {
        Sequence::new(self.iter().take(n))
    }

    /// Lazy suffix starting after the first `n` elements.
    pub fn skip(&self, n: usize) -> Self {
        let source = self.clone();
        let mut position = n;
        Sequence::new(std::iter::from_fn(move || {
            let item = source.fetch(position)?;
            position += 1;
            Some(item)
        }))
    }

    /// Eager: the elements in reverse order.
    pub fn reversed(&self) -> Self {
        Self::from_vec(self.with_exhausted(|buffer| buffer.iter().rev().cloned().collect()))
    }

    /// Repeat the sequence indefinitely. An empty sequence cycles to an empty sequence.
    pub fn cycle(&self) -> Self {
        let source = self.clone();
        let mut cursor = source.iter();
        Sequence::new(std::iter::from_fn(move || match cursor.next() {
            Some(item) => Some(item),
            None if cursor.position() == 0 => None,
            None => {
                cursor = source.iter();
                cursor.next()
            }
        }))
    }

    /// Lazily apply `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: Element,
        F: FnMut(T) -> U + Send + 'static,
    {
        Sequence::new(self.iter().map(f))
    }

    /// Lazily keep the elements matching `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        Sequence::new(self.iter().filter(predicate))
    }

    /// Lazily pair up elements of two sequences, stopping at the shorter one.
    pub fn zip<U: Element>(&self, other: &Sequence<U>) -> Sequence<(T, U)> {
        Sequence::new(self.iter().zip(other.iter()))
    }
}

impl<T: Element> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(items.into())
    }
}

impl<T: Element> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Element> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(self)
    }
}

impl<T: Element> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Prints the realized part only; an open sequence is rendered as `<lazy [..] ..>` so that
/// formatting never pulls from the producer.
impl<T: Element + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.lock();
        if cache.is_finished() {
            T::fmt_sequence(&cache.buffer, f)
        } else {
            f.write_str("<lazy ")?;
            T::fmt_sequence(&cache.buffer, f)?;
            f.write_str(" ..>")
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Element + serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_exhausted(|buffer| serializer.collect_seq(buffer))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Element + serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_drains_once_and_marks_finished() {
        let seq = Sequence::new(0..3u8);
        assert_eq!(seq.realized(), 0);
        assert!(seq.reaches(2));
        assert!(!seq.is_finished());
        assert!(!seq.reaches(3));
        assert!(seq.is_finished());
        assert_eq!(seq.realized(), 3);
    }

    #[test]
    fn debug_does_not_pull() {
        let seq = Sequence::new(0..3u8);
        assert_eq!(seq.fetch(0), Some(0));
        assert_eq!(format!("{seq:?}"), "<lazy [0] ..>");
        assert_eq!(seq.realized(), 1);
        seq.exhaust();
        assert_eq!(format!("{seq:?}"), "[0, 1, 2]");
    }

    #[test]
    fn cycle_of_empty_is_empty() {
        let seq = Sequence::<u8>::empty().cycle();
        assert!(seq.is_empty());
    }
}

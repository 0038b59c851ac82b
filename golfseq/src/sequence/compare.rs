//! Lazy equality, lexicographic ordering and hashing of sequences.
//!
//! All comparisons walk both operands in lockstep and stop at the first position that settles
//! the verdict, so comparing two infinite sequences that differ somewhere terminates.
use std::{
    cmp::Ordering,
    hash::{DefaultHasher, Hash, Hasher},
    ops::{Range, RangeInclusive},
};

use crate::{
    element::Element,
    sequence::{HashSlot, Sequence},
};

/// Inputs that can be coerced into a [`Sequence`]: the "sequence-like" capability accepted by
/// every operation taking another sequence as argument.
pub trait IntoSequence<T> {
    fn into_sequence(self) -> Sequence<T>;
}

impl<T: Element> IntoSequence<T> for Sequence<T> {
    fn into_sequence(self) -> Sequence<T> {
        self
    }
}

impl<T: Element> IntoSequence<T> for &Sequence<T> {
    fn into_sequence(self) -> Sequence<T> {
        self.clone()
    }
}

impl<T: Element> IntoSequence<T> for Vec<T> {
    fn into_sequence(self) -> Sequence<T> {
        Sequence::from_vec(self)
    }
}

impl<T: Element, const N: usize> IntoSequence<T> for [T; N] {
    fn into_sequence(self) -> Sequence<T> {
        Sequence::from(self)
    }
}

impl<T: Element> IntoSequence<T> for &[T] {
    fn into_sequence(self) -> Sequence<T> {
        Sequence::from_vec(self.to_vec())
    }
}

impl<T: Element> IntoSequence<T> for Range<T>
where
    Range<T>: Iterator<Item = T>,
{
    fn into_sequence(self) -> Sequence<T> {
        Sequence::new(self)
    }
}

impl<T: Element> IntoSequence<T> for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    fn into_sequence(self) -> Sequence<T> {
        Sequence::new(self)
    }
}

/// Walk `lhs` and `rhs` in lockstep. `cmp` decides each position: `Some(Equal)` moves on, any
/// other answer is returned as is. When one side ends first it is the lesser one.
pub(crate) fn lockstep<A, B, F>(mut lhs: A, mut rhs: B, mut cmp: F) -> Option<Ordering>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(&A::Item, &B::Item) -> Option<Ordering>,
{
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some(x), Some(y)) => match cmp(&x, &y) {
                Some(Ordering::Equal) => {}
                verdict => return verdict,
            },
        }
    }
}

/// Same as [`lockstep`] for a fallible per-position comparison.
pub(crate) fn try_lockstep<A, B, E, F>(mut lhs: A, mut rhs: B, mut cmp: F) -> Result<Ordering, E>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(&A::Item, &B::Item) -> Result<Ordering, E>,
{
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ok(Ordering::Equal),
            (None, Some(_)) => return Ok(Ordering::Less),
            (Some(_), None) => return Ok(Ordering::Greater),
            (Some(x), Some(y)) => match cmp(&x, &y)? {
                Ordering::Equal => {}
                verdict => return Ok(verdict),
            },
        }
    }
}

fn equal_by<A, B>(lhs: A, rhs: B, eq: impl Fn(&A::Item, &B::Item) -> bool) -> bool
where
    A: Iterator,
    B: Iterator,
{
    lockstep(lhs, rhs, |x, y| eq(x, y).then_some(Ordering::Equal)) == Some(Ordering::Equal)
}

impl<T: Element + PartialEq> Sequence<T> {
    /// Lazy equality against anything sequence-like.
    pub fn equals(&self, other: impl IntoSequence<T>) -> bool {
        *self == other.into_sequence()
    }
}

impl<T: Element + Ord> Sequence<T> {
    /// Lazy lexicographic comparison against anything sequence-like.
    pub fn compare(&self, other: impl IntoSequence<T>) -> Ordering {
        self.cmp(&other.into_sequence())
    }
}

impl<T: Element + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || equal_by(self.iter(), other.iter(), |x, y| x == y)
    }
}

impl<T: Element + Eq> Eq for Sequence<T> {}

impl<T: Element + PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        equal_by(self.iter(), other.iter(), |x, y| x == *y)
    }
}

impl<T: Element + PartialEq> PartialEq<&[T]> for Sequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: Element + PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Element + PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Element + PartialEq> PartialEq<Sequence<T>> for Vec<T> {
    fn eq(&self, other: &Sequence<T>) -> bool {
        *other == self[..]
    }
}

impl<T: Element + PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ptr_eq(other) {
            return Some(Ordering::Equal);
        }
        lockstep(self.iter(), other.iter(), |x, y| x.partial_cmp(y))
    }
}

impl<T: Element + Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        lockstep(self.iter(), other.iter(), |x, y| Some(x.cmp(y))).unwrap_or(Ordering::Equal)
    }
}

impl<T: Element + PartialOrd> PartialOrd<Vec<T>> for Sequence<T> {
    fn partial_cmp(&self, other: &Vec<T>) -> Option<Ordering> {
        lockstep(self.iter(), other.iter(), |x, y| x.partial_cmp(*y))
    }
}

impl<T: Element + Hash> Sequence<T> {
    /// Memoized hash of the sequence.
    ///
    /// The first request fixes the value for the lifetime of the sequence: a finished
    /// sequence hashes its whole content, an open one hashes to the sentinel of its
    /// [`Domain`](crate::element::Domain) so that hashing never pulls from the producer.
    /// Consequently two unequal open sequences may share a hash; equality resolves them.
    ///
    /// The memo also makes this hash depend on when it was first requested: a sequence
    /// hashed while open keeps the sentinel after it finishes, so it may differ from the
    /// hash of an equal sequence that was already finished when first hashed. Only
    /// sequences hashed in the finished state are guaranteed equal hashes when equal.
    pub fn hash_value(&self) -> u64 {
        let mut cache = self.cache.lock();
        let slot = match cache.hash {
            Some(slot) => slot,
            None => {
                let slot = if cache.is_finished() {
                    let mut hasher = DefaultHasher::new();
                    T::DOMAIN.seed().hash(&mut hasher);
                    cache.buffer.hash(&mut hasher);
                    HashSlot::Content(hasher.finish())
                } else {
                    HashSlot::Sentinel
                };
                cache.hash = Some(slot);
                slot
            }
        };

        match slot {
            HashSlot::Sentinel => T::DOMAIN.seed(),
            HashSlot::Content(hash) => hash,
        }
    }
}

/// Writes only the domain seed. Content cannot be hashed without pulling, and equal
/// sequences must land in the same bucket whatever state they are in, so hashed collections
/// of sequences fall back on equality.
impl<T: Element> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(T::DOMAIN.seed());
    }
}

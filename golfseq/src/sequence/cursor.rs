use std::iter::FusedIterator;

use crate::{element::Element, sequence::Sequence};

/// Independently positioned view over a [`Sequence`].
///
/// A cursor behind the realized frontier replays buffered values; a cursor at the frontier
/// pulls exactly one value from the shared producer per call to `next`. Any number of cursors
/// may be interleaved over the same sequence.
pub struct Cursor<T> {
    sequence: Sequence<T>,
    position: usize,
}

impl<T: Element> Cursor<T> {
    pub(crate) fn new(sequence: Sequence<T>) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    /// Index of the element the next call to `next` returns.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            position: self.position,
        }
    }
}

impl<T: Element> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.sequence.fetch(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let item = self.sequence.fetch(self.position.saturating_add(n))?;
        self.position += n + 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.realized().saturating_sub(self.position);
        if self.sequence.is_finished() {
            (remaining, Some(remaining))
        } else {
            (remaining, None)
        }
    }
}

impl<T: Element> FusedIterator for Cursor<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloned_cursor_keeps_position() {
        let seq = Sequence::new(0..5u8);
        let mut a = seq.iter();
        a.next();
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(2));
        assert_eq!(b.position(), 3);
    }

    #[test]
    fn nth_skips_without_extra_pulls() {
        let seq = Sequence::new(0..10u8);
        let mut cursor = seq.iter();
        assert_eq!(cursor.nth(3), Some(3));
        assert_eq!(seq.realized(), 4);
        assert_eq!(cursor.next(), Some(4));
        assert_eq!(cursor.nth(10), None);
    }

    #[test]
    fn size_hint_is_exact_once_finished() {
        let seq = Sequence::from_vec(vec![1u8, 2, 3]);
        let mut cursor = seq.iter();
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
    }
}

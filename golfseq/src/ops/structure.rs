//! Structural transformations: flattening, prefixes, deduplication, stripping and splitting.
use std::{collections::HashSet, hash::Hash, iter};

use smallvec::{SmallVec, smallvec};

use crate::{
    element::{Element, Nested},
    sequence::{Cursor, IntoSequence, Sequence},
};

impl<T: Nested> Sequence<T> {
    /// Unnest elements that are themselves sequences, down to `max_depth` levels (unbounded
    /// when `None`). Scalar elements pass through unchanged.
    pub fn flatten(&self, max_depth: Option<usize>) -> Self {
        let mut stack: SmallVec<(Cursor<T>, usize), 4> = smallvec![(self.iter(), 0)];
        Sequence::new(iter::from_fn(move || {
            loop {
                let (cursor, depth) = stack.last_mut()?;
                let depth = *depth;
                match cursor.next() {
                    None => {
                        stack.pop();
                    }
                    Some(item) => {
                        if max_depth.is_none_or(|max_depth| depth < max_depth) {
                            if let Some(inner) = item.as_nested() {
                                stack.push((inner.iter(), depth + 1));
                                continue;
                            }
                        }
                        return Some(item);
                    }
                }
            }
        }))
    }
}

impl<T: Element> Sequence<T> {
    /// Every prefix by increasing length, starting with the empty one if `include_empty`.
    pub fn prefixes(&self, include_empty: bool) -> Sequence<Sequence<T>> {
        let source = self.clone();
        let mut length = usize::from(!include_empty);
        Sequence::new(iter::from_fn(move || {
            if length > 0 && !source.reaches(length - 1) {
                return None;
            }
            let prefix = source.take(length);
            length += 1;
            Some(prefix)
        }))
    }
}

impl<T: Element + Hash + Eq> Sequence<T> {
    /// First-occurrence deduplication, tracking seen elements in a hash set.
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        Sequence::new(self.iter().filter(move |item| seen.insert(item.clone())))
    }
}

impl<T: Element + PartialEq> Sequence<T> {
    /// First-occurrence deduplication for element types that are not hashable: every new
    /// element is checked against all kept ones.
    pub fn unique_by_eq(&self) -> Self {
        let mut seen: Vec<T> = Vec::new();
        Sequence::new(self.iter().filter(move |item| {
            if seen.contains(item) {
                false
            } else {
                seen.push(item.clone());
                true
            }
        }))
    }

    /// Drop leading elements found in `remove`.
    pub fn lstrip(&self, remove: impl IntoSequence<T>) -> Self {
        let remove = remove.into_sequence();
        Sequence::new(self.iter().skip_while(move |item| remove.contains(item)))
    }

    /// Eager: drop trailing elements found in `remove`.
    pub fn rstrip(&self, remove: impl IntoSequence<T>) -> Self {
        let remove = remove.into_sequence().to_vec();
        Sequence::from_vec(self.with_exhausted(|buffer| {
            let end = buffer
                .iter()
                .rposition(|item| !remove.contains(item))
                .map_or(0, |last| last + 1);
            buffer[..end].to_vec()
        }))
    }

    /// Eager: drop leading and trailing elements found in `remove`.
    pub fn strip(&self, remove: impl IntoSequence<T>) -> Self {
        let remove = remove.into_sequence();
        self.lstrip(&remove).rstrip(&remove)
    }

    /// Split into the maximal runs of elements not found in `delimiters`. Runs of delimiters
    /// (including leading and trailing ones) never produce empty segments.
    ///
    /// Both the outer sequence and each segment are lazy: a segment is handed out as soon as
    /// its first element is known, and the scan to its end is deferred until the next segment
    /// is requested.
    pub fn split(&self, delimiters: impl IntoSequence<T>) -> Sequence<Sequence<T>> {
        let source = self.clone();
        let delimiters = delimiters.into_sequence();
        let mut position = 0;
        let mut inside_segment = false;

        Sequence::new(iter::from_fn(move || {
            if inside_segment {
                while let Some(item) = source.fetch(position) {
                    if delimiters.contains(&item) {
                        break;
                    }
                    position += 1;
                }
            }

            loop {
                let item = source.fetch(position)?;
                if !delimiters.contains(&item) {
                    break;
                }
                position += 1;
            }

            inside_segment = true;
            Some(segment(source.clone(), position, delimiters.clone()))
        }))
    }
}

fn segment<T: Element + PartialEq>(
    source: Sequence<T>,
    start: usize,
    delimiters: Sequence<T>,
) -> Sequence<T> {
    let mut position = start;
    Sequence::new(iter::from_fn(move || {
        let item = source.fetch(position)?;
        if delimiters.contains(&item) {
            return None;
        }
        position += 1;
        Some(item)
    }))
}

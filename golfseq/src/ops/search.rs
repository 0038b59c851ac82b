//! Element and substring search, and the replacements built on top of it.
//!
//! Substring search is the naive `O(n·m)` scan: at each candidate start the pattern is
//! compared element by element against the source. Better algorithms need to look ahead in
//! the source, which would defeat laziness over open-ended inputs.
use crate::{
    element::Element,
    sequence::{Cursor, IntoSequence, Sequence},
};

/// Start positions of non-overlapping occurrences of `pattern` in `source`.
struct SubstringMatches<T> {
    source: Sequence<T>,
    pattern: Sequence<T>,
    start: usize,
}

impl<T: Element + PartialEq> Iterator for SubstringMatches<T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            // A match may start right past the last element (empty pattern), not further.
            if self.start > 0 && !self.source.reaches(self.start - 1) {
                return None;
            }

            let at = self.start;
            let matched = self
                .pattern
                .iter()
                .enumerate()
                .all(|(offset, expected)| {
                    self.source
                        .fetch(at + offset)
                        .is_some_and(|item| item == expected)
                });

            if matched {
                self.start += self.pattern.len().max(1);
                return Some(at);
            }
            self.start += 1;
        }
    }
}

enum SplicePhase<T> {
    /// Looking for the next match.
    Seek,
    /// Copying the unmatched source span `position..until`.
    Gap { position: usize, until: usize },
    /// Streaming the replacement.
    Insert(Cursor<T>),
    /// No more substitutions: copy the rest of the source.
    Tail(usize),
}

struct Splice<T> {
    source: Sequence<T>,
    pattern: Sequence<T>,
    replacement: Sequence<T>,
    matches: Cursor<usize>,
    remaining: Option<usize>,
    resume: usize,
    phase: SplicePhase<T>,
}

impl<T: Element + PartialEq> Iterator for Splice<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            match &mut self.phase {
                SplicePhase::Gap { position, until } if *position < *until => {
                    let item = self.source.fetch(*position)?;
                    *position += 1;
                    return Some(item);
                }
                SplicePhase::Gap { .. } => {
                    self.phase = SplicePhase::Insert(self.replacement.iter());
                }
                SplicePhase::Insert(cursor) => match cursor.next() {
                    Some(item) => return Some(item),
                    None => self.phase = SplicePhase::Seek,
                },
                SplicePhase::Seek => {
                    let found = match self.remaining {
                        Some(0) => None,
                        _ => self.matches.next(),
                    };

                    self.phase = match found {
                        Some(index) => {
                            let position = self.resume;
                            self.resume = index + self.pattern.len();
                            if let Some(remaining) = self.remaining.as_mut() {
                                *remaining -= 1;
                            }
                            SplicePhase::Gap {
                                position,
                                until: index,
                            }
                        }
                        None => SplicePhase::Tail(self.resume),
                    };
                }
                SplicePhase::Tail(position) => {
                    let item = self.source.fetch(*position)?;
                    *position += 1;
                    return Some(item);
                }
            }
        }
    }
}

impl<T: Element + PartialEq> Sequence<T> {
    /// Lazy membership test; stops at the first equal element.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == *value)
    }

    /// Every position whose element equals `value`.
    pub fn find(&self, value: T) -> Sequence<usize> {
        Sequence::new(
            self.iter()
                .enumerate()
                .filter_map(move |(position, item)| (item == value).then_some(position)),
        )
    }

    /// Start positions of the non-overlapping occurrences of `pattern`, scanning left to
    /// right. After a match the scan resumes right after it (or one further for the empty
    /// pattern, which matches at every position including the end).
    ///
    /// The pattern must be finite; the source may be open-ended, in which case the search
    /// proceeds as far as the consumer pulls.
    pub fn find_substrings(&self, pattern: impl IntoSequence<T>) -> Sequence<usize> {
        Sequence::new(SubstringMatches {
            source: self.clone(),
            pattern: pattern.into_sequence(),
            start: 0,
        })
    }

    /// Replace up to `max_count` (unbounded when `None`) non-overlapping occurrences of
    /// `pattern` by `replacement`.
    ///
    /// When `pattern` is this very sequence the result is `replacement`; when `pattern` and
    /// `replacement` are the same sequence the result is this sequence.
    pub fn replace_substrings(
        &self,
        pattern: impl IntoSequence<T>,
        replacement: impl IntoSequence<T>,
        max_count: Option<usize>,
    ) -> Self {
        let pattern = pattern.into_sequence();
        let replacement = replacement.into_sequence();

        if self.ptr_eq(&pattern) {
            return Sequence::new(replacement.iter());
        }
        if pattern.ptr_eq(&replacement) || max_count == Some(0) {
            return Sequence::new(self.iter());
        }

        Sequence::new(Splice {
            source: self.clone(),
            matches: self.find_substrings(&pattern).iter(),
            pattern,
            replacement,
            remaining: max_count,
            resume: 0,
            phase: SplicePhase::Seek,
        })
    }

    /// Element-wise replacement of up to `max_count` elements equal to `find`.
    pub fn replace(&self, find: T, replacement: T, max_count: Option<usize>) -> Self {
        let mut remaining = max_count;
        Sequence::new(self.iter().map(move |item| {
            if remaining == Some(0) || item != find {
                return item;
            }
            if let Some(remaining) = remaining.as_mut() {
                *remaining -= 1;
            }
            replacement.clone()
        }))
    }
}

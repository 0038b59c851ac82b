//! Lazy combinatorial generators.
//!
//! None of the generators below recurse: each is an explicit state machine that produces its
//! next tuple on demand, so they remain usable over open-ended sources as long as the consumer
//! stops pulling.
use smallvec::{SmallVec, smallvec};

use crate::{
    element::Element,
    sequence::{Cursor, IntoSequence, Sequence},
};

/// One expansion step of the cartesian product: every partial tuple of `prefixes` extended by
/// every element of `source`, the source varying fastest.
struct ProductStage<T> {
    prefixes: Cursor<Vec<T>>,
    source: Sequence<T>,
    current: Option<(Vec<T>, Cursor<T>)>,
}

impl<T: Element> Iterator for ProductStage<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if let Some((prefix, cursor)) = self.current.as_mut() {
                if let Some(item) = cursor.next() {
                    let mut tuple = Vec::with_capacity(prefix.len() + 1);
                    tuple.extend_from_slice(prefix);
                    tuple.push(item);
                    return Some(tuple);
                }
            }

            let prefix = self.prefixes.next()?;
            self.current = Some((prefix, self.source.iter()));
        }
    }
}

/// Backtracking enumeration of strictly increasing index tuples.
///
/// `stack[k]` is the next source index to try for slot `k`; `chosen[..k]` holds the elements
/// picked for the slots before it.
struct Combinations<T> {
    source: Sequence<T>,
    size: usize,
    stack: SmallVec<usize, 8>,
    chosen: Vec<T>,
}

impl<T: Element> Iterator for Combinations<T> {
    type Item = Sequence<T>;

    fn next(&mut self) -> Option<Sequence<T>> {
        while let Some(mut input_index) = self.stack.pop() {
            let mut slot = self.stack.len();
            while let Some(item) = self.source.fetch(input_index) {
                self.chosen.truncate(slot);
                self.chosen.push(item);
                slot += 1;
                input_index += 1;
                self.stack.push(input_index);
                if slot == self.size {
                    return Some(Sequence::from_vec(self.chosen.clone()));
                }
            }
        }
        None
    }
}

/// Incremental doubling construction of the powerset: each new source element is appended to
/// every subset known so far, in the order those subsets were produced.
struct Powerset<T> {
    source: Cursor<T>,
    known: Vec<Vec<T>>,
    /// Element being distributed, next known subset to extend, number of subsets to extend.
    current: Option<(T, usize, usize)>,
    started: bool,
}

impl<T: Element> Iterator for Powerset<T> {
    type Item = Sequence<T>;

    fn next(&mut self) -> Option<Sequence<T>> {
        if !self.started {
            self.started = true;
            return Some(Sequence::empty());
        }

        loop {
            if let Some((item, next, count)) = self.current.as_mut() {
                if *next < *count {
                    let mut subset = self.known[*next].clone();
                    subset.push(item.clone());
                    *next += 1;
                    self.known.push(subset.clone());
                    return Some(Sequence::from_vec(subset));
                }
            }

            let item = self.source.next()?;
            self.current = Some((item, 0, self.known.len()));
        }
    }
}

impl<T: Element> Sequence<T> {
    /// Cartesian product of `sequences`, the rightmost one varying fastest. Each tuple is a
    /// sequence of its own. Zero inputs yield a single empty tuple.
    ///
    /// ```
    /// use golfseq::prelude::*;
    ///
    /// let pairs = Sequence::<i32>::product([vec![1, 2], vec![3, 4]]);
    /// assert_eq!(pairs, vec![
    ///     Sequence::from(vec![1, 3]),
    ///     Sequence::from(vec![1, 4]),
    ///     Sequence::from(vec![2, 3]),
    ///     Sequence::from(vec![2, 4]),
    /// ]);
    /// ```
    pub fn product<I>(sequences: I) -> Sequence<Sequence<T>>
    where
        I: IntoIterator,
        I::Item: IntoSequence<T>,
    {
        let mut tuples = Sequence::from_vec(vec![Vec::new()]);
        for source in sequences {
            tuples = Sequence::new(ProductStage {
                prefixes: tuples.iter(),
                source: source.into_sequence(),
                current: None,
            });
        }
        tuples.map(Sequence::from_vec)
    }

    /// Product of `n` copies of the sequence.
    pub fn power(&self, n: usize) -> Sequence<Sequence<T>> {
        Self::product(std::iter::repeat_n(self.clone(), n))
    }

    /// Every subsequence of exactly `size` elements, by increasing indices, in lexicographic
    /// index order. A size of zero yields nothing.
    pub fn combinations(&self, size: usize) -> Sequence<Sequence<T>> {
        if size == 0 {
            return Sequence::empty();
        }

        Sequence::new(Combinations {
            source: self.clone(),
            size,
            stack: smallvec![0],
            chosen: Vec::with_capacity(size),
        })
    }

    /// Every subset, the empty one first, then grouped by the last source element they
    /// contain.
    pub fn powerset(&self) -> Sequence<Sequence<T>> {
        Sequence::new(Powerset {
            source: self.iter(),
            known: vec![Vec::new()],
            current: None,
            started: false,
        })
    }
}

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{SeqError, SeqResult};

/// Slice bounds with the usual half-open semantics.
///
/// Negative bounds count from the end, a missing bound defaults to the corresponding end of
/// the sequence (depending on the step direction), and bounds past either end are clamped.
///
/// ```
/// use golfseq::sequence::Slice;
///
/// assert_eq!(Slice::new(None, None, Some(-2)).positions(10).unwrap(), vec![9, 7, 5, 3, 1]);
/// assert_eq!(Slice::from(1..4).positions(10).unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    pub const fn with_step(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    fn step(&self) -> SeqResult<isize> {
        match self.step.unwrap_or(1) {
            0 => Err(SeqError::ZeroSliceStep),
            step => Ok(step),
        }
    }

    /// `(start, stop, step)` when the slice can be served without knowing the length, that is
    /// a positive step over nonnegative bounds.
    pub(crate) fn forward(&self) -> SeqResult<Option<(usize, Option<usize>, usize)>> {
        let step = self.step()?;
        if step < 0 || self.start.is_some_and(|s| s < 0) || self.stop.is_some_and(|s| s < 0) {
            return Ok(None);
        }

        Ok(Some((
            self.start.unwrap_or(0) as usize,
            self.stop.map(|s| s as usize),
            step as usize,
        )))
    }

    /// Resolve the bounds against a known `length`: `(start, stop, step)` after clamping.
    pub fn adjust(&self, length: usize) -> SeqResult<(isize, isize, isize)> {
        let step = self.step()?;
        let length = isize::try_from(length).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };

        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + length).max(lower),
            Some(b) => b.min(upper),
        };

        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };
        Ok((start, stop, step))
    }

    /// Every selected position, in order, for a sequence of `length` elements.
    pub fn positions(&self, length: usize) -> SeqResult<Vec<usize>> {
        let (start, stop, step) = self.adjust(length)?;
        let mut positions = Vec::new();
        let mut position = start;
        while (step > 0 && position < stop) || (step < 0 && position > stop) {
            positions.push(position as usize);
            position += step;
        }
        Ok(positions)
    }
}

fn bound(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Self::new(Some(bound(range.start)), Some(bound(range.end)), None)
    }
}

impl From<RangeFrom<usize>> for Slice {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::new(Some(bound(range.start)), None, None)
    }
}

impl From<RangeTo<usize>> for Slice {
    fn from(range: RangeTo<usize>) -> Self {
        Self::new(None, Some(bound(range.end)), None)
    }
}

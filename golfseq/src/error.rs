use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum SeqError {
    /// A character was built from text that is not exactly one codepoint.
    #[error("A character must be exactly one codepoint, but `{input}` has {length}.")]
    InvalidCharacterLength { input: String, length: usize },

    /// A character was built from an integer outside the unicode scalar range.
    #[error("Codepoint {0} is not a valid unicode scalar value (expected 0..=0x10FFFF, surrogates excluded).")]
    InvalidCodepoint(i64),

    /// Equality or ordering was requested between values that cannot be coerced
    /// into a common comparable form. Distinct from a `false` comparison result.
    #[error("Values of kind `{lhs}` and `{rhs}` cannot be compared.")]
    UnsupportedComparison {
        lhs: &'static str,
        rhs: &'static str,
    },

    /// An arithmetic-like operator was applied to operands that do not support it.
    #[error("Operator `{op}` is not supported between `{lhs}` and `{rhs}`.")]
    UnsupportedOperation {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("Integer overflow while evaluating `{op}`.")]
    IntegerOverflow { op: &'static str },

    /// Negative index reaching before the first element of a finite sequence.
    #[error("Index {index} is out of range for a sequence of length {length}.")]
    IndexOutOfRange { index: isize, length: usize },

    /// Modular indexing into a finished sequence with no elements.
    #[error("Cannot index position {index} of an empty sequence.")]
    EmptySequence { index: isize },

    /// A slice was requested with a step of zero.
    #[error("Slice step cannot be zero.")]
    ZeroSliceStep,
}

pub type SeqResult<T> = Result<T, SeqError>;

//! Dynamically typed element for interpreters built on top of [`Sequence`].
//!
//! [`Value`] is the element type a golfing-language evaluator manipulates: scalars, strings and
//! arbitrarily nested lists, all sharing the lazy sequence engine. Comparisons between values
//! follow the coercion rules of the language:
//!  - scalars of the same kind compare naturally;
//!  - strings and lists are both sequences and compare element-wise against each other, a
//!    string contributing its characters;
//!  - a character compared with a sequence stands for the one-character string holding it;
//!  - scalars of different kinds are unequal and unordered;
//!  - a sequence against a scalar is not comparable at all, which [`Value::try_eq`] and
//!    [`Value::try_cmp`] report as [`SeqError::UnsupportedComparison`].
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter, mem,
};

use either::Either;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs, IntoStaticStr};

use crate::{
    element::{Domain, Element, Nested, Placeholder},
    error::{SeqError, SeqResult},
    sequence::{Cursor, Sequence, try_lockstep},
    string::{Character, GolfString},
};

#[derive(Clone, EnumIs, EnumTryAs, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Char(Character),
    #[strum(serialize = "string")]
    Str(GolfString),
    List(Sequence<Value>),
}

type Values = Either<Cursor<Value>, iter::Map<Cursor<Character>, fn(Character) -> Value>>;

impl Value {
    /// Name of the value's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// `true` for strings and lists.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Str(_) | Value::List(_))
    }

    /// View a string or list as a sequence of values. A list is returned as is (same
    /// instance); a string is lazily mapped to its characters.
    pub fn as_sequence(&self) -> Option<Sequence<Value>> {
        match self {
            Value::List(list) => Some(list.clone()),
            Value::Str(string) => Some(string.map(Value::Char)),
            _ => None,
        }
    }

    /// Elements walked when comparing against `other`. A character only yields itself when
    /// `other` is a sequence.
    fn values_against(&self, other: &Value) -> Option<Values> {
        match self {
            Value::Char(c) if other.is_sequence() => {
                Some(Either::Left(Sequence::from_vec(vec![Value::Char(*c)]).iter()))
            }
            Value::List(list) => Some(Either::Left(list.iter())),
            Value::Str(string) => Some(Either::Right(
                string.iter().map(Value::Char as fn(Character) -> Value),
            )),
            _ => None,
        }
    }

    fn incomparable(&self, other: &Value) -> SeqError {
        SeqError::UnsupportedComparison {
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }

    fn unsupported(&self, op: &'static str, other: &Value) -> SeqError {
        SeqError::UnsupportedOperation {
            op,
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }

    /// Truthiness: `Null`, `false`, `0` and empty sequences are falsy. Pulls at most one
    /// element of a sequence.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Char(_) => true,
            Value::Str(string) => string.truthy(),
            Value::List(list) => list.truthy(),
        }
    }

    /// Lazy equality. Fails only when a sequence is compared against a scalar other than a
    /// character.
    pub fn try_eq(&self, other: &Value) -> SeqResult<bool> {
        match (self, other) {
            (Value::Null, Value::Null) => Ok(true),
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Int(a), Value::Int(b)) => Ok(a == b),
            (Value::Char(a), Value::Char(b)) => Ok(a == b),
            (Value::Str(a), Value::Str(b)) => Ok(a == b),
            (Value::List(a), Value::List(b)) if a.ptr_eq(b) => Ok(true),
            _ => match (self.values_against(other), other.values_against(self)) {
                (Some(lhs), Some(rhs)) => try_lockstep(lhs, rhs, |x, y| {
                    Ok(if x.try_eq(y)? {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    })
                })
                .map(Ordering::is_eq),
                (None, None) => Ok(false),
                _ => Err(self.incomparable(other)),
            },
        }
    }

    /// Lazy ordering. Sequences are ordered lexicographically; scalars only against scalars
    /// of the same kind.
    pub fn try_cmp(&self, other: &Value) -> SeqResult<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            (Value::List(a), Value::List(b)) if a.ptr_eq(b) => Ok(Ordering::Equal),
            _ => match (self.values_against(other), other.values_against(self)) {
                (Some(lhs), Some(rhs)) => try_lockstep(lhs, rhs, |x, y| x.try_cmp(y)),
                _ => Err(self.incomparable(other)),
            },
        }
    }

    /// `+`: integer addition or lazy concatenation. Characters do not add, not even to each
    /// other.
    pub fn try_add(&self, other: &Value) -> SeqResult<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(*b)
                .map(Value::Int)
                .ok_or(SeqError::IntegerOverflow { op: "+" }),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a.extend(b))),
            (Value::List(a), Value::List(b)) => Ok(Value::List(a.extend(b))),
            _ => match (self.as_sequence(), other.as_sequence()) {
                (Some(lhs), Some(rhs)) => Ok(Value::List(lhs.extend(rhs))),
                _ => Err(self.unsupported("+", other)),
            },
        }
    }

    /// `*`: integer multiplication or sequence repetition. A negative count repeats zero
    /// times.
    pub fn try_mul(&self, other: &Value) -> SeqResult<Value> {
        let count = |n: i64| usize::try_from(n).unwrap_or(0);
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_mul(*b)
                .map(Value::Int)
                .ok_or(SeqError::IntegerOverflow { op: "*" }),
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
                Ok(Value::Str(s.times(count(*n))))
            }
            (Value::List(l), Value::Int(n)) | (Value::Int(n), Value::List(l)) => {
                Ok(Value::List(l.times(count(*n))))
            }
            _ => Err(self.unsupported("*", other)),
        }
    }
}

impl Sequence<Value> {
    /// Lazy equality of two value sequences, failing on the first incomparable pair.
    pub fn try_equals(&self, other: &Sequence<Value>) -> SeqResult<bool> {
        if self.ptr_eq(other) {
            return Ok(true);
        }
        try_lockstep(self.iter(), other.iter(), |x, y| {
            Ok(if x.try_eq(y)? {
                Ordering::Equal
            } else {
                Ordering::Less
            })
        })
        .map(Ordering::is_eq)
    }

    /// Lazy lexicographic ordering of two value sequences.
    pub fn try_cmp(&self, other: &Sequence<Value>) -> SeqResult<Ordering> {
        if self.ptr_eq(other) {
            return Ok(Ordering::Equal);
        }
        try_lockstep(self.iter(), other.iter(), |x, y| x.try_cmp(y))
    }
}

/// Incomparable pairs are unequal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// Characters, strings and lists can all be equal to one another, so they share a single
/// bucket and are told apart by equality.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Char(_) | Value::Str(_) | Value::List(_) => {
                state.write_u64(Domain::List.seed());
            }
            Value::Null => mem::discriminant(self).hash(state),
            Value::Bool(b) => {
                mem::discriminant(self).hash(state);
                b.hash(state);
            }
            Value::Int(i) => {
                mem::discriminant(self).hash(state);
                i.hash(state);
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => fmt::Debug::fmt(b, f),
            Value::Int(i) => fmt::Debug::fmt(i, f),
            Value::Char(c) => fmt::Debug::fmt(c, f),
            Value::Str(string) => fmt::Debug::fmt(string, f),
            Value::List(list) => fmt::Debug::fmt(list, f),
        }
    }
}

/// Eager for sequences.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => fmt::Display::fmt(b, f),
            Value::Int(i) => fmt::Display::fmt(i, f),
            Value::Char(c) => fmt::Display::fmt(c, f),
            Value::Str(string) => fmt::Display::fmt(string, f),
            Value::List(list) => {
                f.write_str("[")?;
                for (position, item) in list.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(&item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Element for Value {}

impl Placeholder for Value {
    fn placeholder() -> Self {
        Value::Null
    }
}

/// Strings unnest into their characters.
impl Nested for Value {
    fn as_nested(&self) -> Option<Sequence<Self>> {
        self.as_sequence()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c.into())
    }
}

impl From<Character> for Value {
    fn from(c: Character) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(GolfString::from_text(text))
    }
}

impl From<GolfString> for Value {
    fn from(string: GolfString) -> Self {
        Value::Str(string)
    }
}

impl From<Sequence<Value>> for Value {
    fn from(list: Sequence<Value>) -> Self {
        Value::List(list)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Sequence::from_vec(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(1i64).kind(), "int");
        assert_eq!(Value::from('a').kind(), "char");
        assert_eq!(Value::from("ab").kind(), "string");
        assert_eq!(Value::from(vec![]).kind(), "list");
    }

    #[test]
    fn string_and_list_of_chars_are_equal() {
        let string = Value::from("ab");
        let list = Value::from(vec![Value::from('a'), Value::from('b')]);
        assert_eq!(string.try_eq(&list), Ok(true));
        assert_eq!(list.try_cmp(&string), Ok(Ordering::Equal));
    }

    #[test]
    fn character_against_scalars() {
        assert_eq!(Value::from('a').try_eq(&Value::from(97i64)), Ok(false));
        assert!(Value::from('a').try_cmp(&Value::Null).is_err());
    }

    #[test]
    fn character_arithmetic_is_rejected() {
        let a = Value::from('a');
        assert!(a.try_add(&Value::from('b')).unwrap_err().is_unsupported_operation());
        assert!(a.try_mul(&Value::from(2i64)).unwrap_err().is_unsupported_operation());
        assert!(Value::from(2i64).try_mul(&a).unwrap_err().is_unsupported_operation());
    }

    #[test]
    fn overflow_is_reported() {
        let err = Value::from(i64::MAX).try_add(&Value::from(1i64)).unwrap_err();
        assert_eq!(err, SeqError::IntegerOverflow { op: "+" });
    }
}

//! Character specialization of [`Sequence`].
//!
//! A [`GolfString`] is a sequence of validated single-codepoint [`Character`]s. It behaves
//! exactly like any other sequence, except that:
//!  - it lives in its own hash [`Domain`], so it never shares hash identity with a generic
//!    sequence holding equal-looking content;
//!  - it compares and coerces against raw text (`&str`, `String`);
//!  - it renders as text with [`Display`](fmt::Display) and as a quoted literal with
//!    [`Debug`](fmt::Debug).
//!
//! [`Character`] implements none of the arithmetic operator traits: adding, repeating or
//! formatting with `%` applies to whole sequences, never to a bare character.
use std::{cmp::Ordering, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    element::{Domain, Element},
    error::{SeqError, SeqResult},
    sequence::{IntoSequence, Sequence, lockstep},
};

/// A single unicode scalar value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Character(char);

impl Character {
    /// Build a character from text holding exactly one codepoint.
    pub fn new(text: &str) -> SeqResult<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(SeqError::InvalidCharacterLength {
                input: text.to_owned(),
                length: text.chars().count(),
            }),
        }
    }

    /// Build a character from its codepoint. Surrogates and values past `0x10FFFF` are
    /// rejected.
    pub fn from_codepoint(codepoint: i64) -> SeqResult<Self> {
        u32::try_from(codepoint)
            .ok()
            .and_then(char::from_u32)
            .map(Self)
            .ok_or(SeqError::InvalidCodepoint(codepoint))
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    #[inline]
    pub const fn codepoint(self) -> u32 {
        self.0 as u32
    }

    pub fn to_uppercase(self) -> impl Iterator<Item = Character> + Send {
        self.0.to_uppercase().map(Character)
    }

    pub fn to_lowercase(self) -> impl Iterator<Item = Character> + Send {
        self.0.to_lowercase().map(Character)
    }
}

impl From<char> for Character {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl From<Character> for char {
    fn from(c: Character) -> Self {
        c.0
    }
}

impl From<Character> for u32 {
    fn from(c: Character) -> Self {
        c.codepoint()
    }
}

impl TryFrom<&str> for Character {
    type Error = SeqError;

    fn try_from(text: &str) -> SeqResult<Self> {
        Self::new(text)
    }
}

impl TryFrom<i64> for Character {
    type Error = SeqError;

    fn try_from(codepoint: i64) -> SeqResult<Self> {
        Self::from_codepoint(codepoint)
    }
}

impl PartialEq<char> for Character {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl Element for Character {
    const DOMAIN: Domain = Domain::String;

    fn fmt_sequence(items: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = items.iter().map(|c| c.0).collect();
        fmt::Debug::fmt(&text, f)
    }
}

/// A lazy sequence of characters.
pub type GolfString = Sequence<Character>;

impl Sequence<Character> {
    /// Finished string holding the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().map(Character).collect()
    }

    /// Lazy string over an owned producer of `char`s.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: Send + 'static,
    {
        Sequence::new(chars.into_iter().map(Character))
    }

    /// Eager: the whole string as Rust text.
    pub fn to_text(&self) -> String {
        self.with_exhausted(|buffer| buffer.iter().map(|c| c.0).collect())
    }

    /// Lazy element-wise uppercase mapping. Characters whose uppercase form spans several
    /// codepoints expand in place.
    pub fn upper(&self) -> Self {
        Sequence::new(self.iter().flat_map(Character::to_uppercase))
    }

    /// Lazy element-wise lowercase mapping.
    pub fn lower(&self) -> Self {
        Sequence::new(self.iter().flat_map(Character::to_lowercase))
    }
}

impl From<&str> for Sequence<Character> {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Sequence<Character> {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl IntoSequence<Character> for &str {
    fn into_sequence(self) -> Sequence<Character> {
        Sequence::from_text(self)
    }
}

impl IntoSequence<Character> for String {
    fn into_sequence(self) -> Sequence<Character> {
        Sequence::from_text(&self)
    }
}

impl IntoSequence<Character> for &String {
    fn into_sequence(self) -> Sequence<Character> {
        Sequence::from_text(self)
    }
}

fn compare_text(string: &GolfString, text: &str) -> Option<Ordering> {
    lockstep(string.iter(), text.chars(), |c, t| Some(c.0.cmp(t)))
}

impl PartialEq<str> for Sequence<Character> {
    fn eq(&self, other: &str) -> bool {
        lockstep(self.iter(), other.chars(), |c, t| {
            (c.0 == *t).then_some(Ordering::Equal)
        }) == Some(Ordering::Equal)
    }
}

impl PartialEq<&str> for Sequence<Character> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Sequence<Character> {
    fn eq(&self, other: &String) -> bool {
        *self == **other
    }
}

impl PartialOrd<str> for Sequence<Character> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        compare_text(self, other)
    }
}

impl PartialOrd<&str> for Sequence<Character> {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        compare_text(self, other)
    }
}

/// Eager: forces the whole string.
impl fmt::Display for Sequence<Character> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

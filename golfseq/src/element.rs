//! Capabilities required from the values stored inside a [`Sequence`].
//!
//! Every element type implements [`Element`], a marker trait that also selects the hash
//! [`Domain`] of the sequences built over it. The remaining traits are opt-in capabilities
//! used by a handful of operations:
//!  - [`Placeholder`]: element types with a designated "no value" marker (see
//!    [`Sequence::nones`]).
//!  - [`Nested`]: element types that may themselves hold a sequence of the same element
//!    type (see [`Sequence::flatten`]).
use std::fmt;

use strum::Display;

use crate::sequence::Sequence;

/// Hash domain of a sequence kind.
///
/// Unfinished sequences of one domain share a single sentinel hash, and finished content
/// hashes are seeded per domain, so two kinds never collide by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Domain {
    #[strum(serialize = "list")]
    List,
    #[strum(serialize = "string")]
    String,
}

impl Domain {
    pub const fn seed(self) -> u64 {
        match self {
            Domain::List => 0x51ed_2701_a4c3_9b5d,
            Domain::String => 0x9f63_66ef_3114_f318,
        }
    }
}

/// Values that can be stored in a [`Sequence`]. Sequences hand out clones of their buffered
/// values and may be moved across threads behind their internal lock.
pub trait Element: Clone + Send + 'static {
    /// Hash domain of any sequence whose elements are of this type.
    const DOMAIN: Domain = Domain::List;

    /// Render a realized buffer of this element type. Character sequences override this
    /// to print as quoted text.
    fn fmt_sequence(items: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: fmt::Debug,
    {
        f.debug_list().entries(items).finish()
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: Element> Element for Option<T> {}
impl<T: Element> Element for Vec<T> {}
impl<T: Element> Element for Box<T> {}
impl<A: Element, B: Element> Element for (A, B) {}
impl<T: Element> Element for Sequence<T> {}

/// Element types with a designated "no value" marker.
pub trait Placeholder: Element {
    fn placeholder() -> Self;
}

impl Placeholder for () {
    fn placeholder() -> Self {}
}

impl<T: Element> Placeholder for Option<T> {
    fn placeholder() -> Self {
        None
    }
}

/// Element types that may hold a nested sequence of themselves.
pub trait Nested: Element {
    /// Return the nested sequence if this element is one, `None` for scalars.
    fn as_nested(&self) -> Option<Sequence<Self>>;
}

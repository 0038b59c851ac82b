//! Golfseq: lazy, memoizing, re-iterable sequences for golfing-language interpreters.
//!
//! Any producer of values, finite or not, becomes an immutable [`Sequence`](sequence::Sequence)
//! that can be indexed, sliced, compared, hashed and traversed any number of times, while
//! pulling from the producer only as far as some consumer actually looked.
//!
//! Layout
//!  - [`sequence`]: the cache-over-producer engine, cursors, slicing, comparison and hashing.
//!  - [`ops`]: the derived operations (search and replace, combinatorics, flattening, ...).
//!  - [`string`]: the single-codepoint [`Character`](string::Character) element and
//!    [`GolfString`](string::GolfString).
//!  - [`value`]: the dynamically typed [`Value`](value::Value) element for interpreters.
//!  - [`vectorise`](mod@vectorise): lifting scalar functions over nested sequences.
//!
//! Laziness
//!  - Operations build new sequences over producers reading from their inputs; nothing is
//!    computed until the result is consumed.
//!  - Operations that need the total length are *eager* and say so in their documentation.
//!    Calling one on an infinite sequence never returns.
//!
//! Example
//! ```
//! use golfseq::prelude::*;
//!
//! let text = GolfString::from_text("abbccbbdddbbb");
//! assert_eq!(text.find_substrings("bb"), [1, 5, 10]);
//! assert_eq!(text.replace_substrings("bb", "xyz", None), "axyzccxyzdddxyzb");
//!
//! let evens = Sequence::integers(0).filter(|x| x % 2 == 0);
//! assert_eq!(evens.slice(..4).unwrap(), [0, 2, 4, 6]);
//! assert!(!evens.is_finished());
//! ```

/// Capabilities of the values stored in a sequence.
pub mod element;
/// Crate error type.
pub mod error;
/// Derived sequence operations.
pub mod ops;
/// The lazy sequence engine.
pub mod sequence;
/// Character sequences.
pub mod string;
/// Dynamically typed values.
pub mod value;
/// Function lifting over sequences.
pub mod vectorise;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::element::{Domain, Element, Nested, Placeholder};
    pub use crate::error::{SeqError, SeqResult};
    pub use crate::sequence::{Cursor, IntoSequence, Sequence, Slice};
    pub use crate::string::{Character, GolfString};
    pub use crate::value::Value;
    pub use crate::vectorise::vectorise;
}

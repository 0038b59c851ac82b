//! Derived sequence operations.
//!
//! Every operation is expressed through the engine contract (cursors, positional fetches and
//! explicit exhaustion) and returns a new lazy [`Sequence`](crate::sequence::Sequence). Unless
//! documented as eager, an operation only pulls from its inputs what its own consumer asks
//! for, so operations compose over infinite inputs.
//!
//! Operations are grouped by concern:
//!  - [`edit`]: positional edits and concatenation (`substitute`, `insert`, `append`,
//!    `prepend`, `extend`, `chain`, `times`).
//!  - [`generate`]: infinite or repeated sources (`integers`, `repeat`, `nones`).
//!  - [`search`]: element and substring search and replacement.
//!  - [`combinatorics`]: `product`, `power`, `combinations`, `powerset`.
//!  - [`structure`]: `flatten`, `prefixes`, `unique`, stripping and splitting.
//!
//! Counts that the golfing language expresses with `-1` for "unbounded" are `Option<usize>`
//! here, `None` meaning unbounded.
pub mod combinatorics;
pub mod edit;
pub mod generate;
pub mod search;
pub mod structure;

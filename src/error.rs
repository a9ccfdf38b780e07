//! Error types for bitset construction and parsing.
//!
//! Almost every `BitSet` operation is infallible: ranges that are empty or
//! inverted are no-ops, and integers outside the stored words are simply
//! absent. The only failures come from input the `usize` API cannot express
//! directly, namely signed values and the textual form.

use std::num::ParseIntError;
use thiserror::Error;

/// The error type for fallible `BitSet` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitSetError {
    /// A signed input value was negative
    #[error("negative value {0} cannot be a bitset member")]
    NegativeValue(i64),

    /// A signed input value does not fit in `usize` (only reachable where
    /// `usize` is narrower than 64 bits)
    #[error("value {0} exceeds the addressable range")]
    OutOfRange(i64),

    /// Text form was not enclosed in `{` and `}`
    #[error("bitset text must be enclosed in braces")]
    MissingBraces,

    /// A list element was not plain decimal digits
    #[error("invalid bitset member {token:?}")]
    InvalidMember {
        /// The offending element, trimmed
        token: String,
        /// Underlying integer parse failure, absent for a rejected `+` sign
        #[source]
        source: Option<ParseIntError>,
    },
}

/// A specialized `Result` type for bitset operations.
pub type Result<T> = std::result::Result<T, BitSetError>;

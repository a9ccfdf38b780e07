//! bitset - Growable dense bitset of non-negative integers
//!
//! A `BitSet` stores membership of integer `n` as one bit in an array of
//! 64-bit words. The array grows on demand, so any `usize` can be added, and
//! all bulk work (ranges, set algebra, counting) runs a word at a time.
//!
//! # Key Characteristics
//!
//! - O(1) `add`, `delete`, `contains` and `size`
//! - Range insert/delete that fills whole words and masks only the boundaries
//! - AND, OR, XOR and AND-NOT between sets of different sizes, as free
//!   functions, in-place methods, and operator traits
//! - Ascending iteration, with an early-stopping `visit`
//! - A stable text form, `{1, 3, 5}`, that parses back with `str::parse`
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use bitset::{bitset, BitSet};
//!
//! let mut set = BitSet::new();
//! set.add_range(0, 10);
//! set.delete_range(3, 7);
//!
//! assert_eq!(set.size(), 6);
//! assert_eq!(set, bitset![0, 1, 2, 7, 8, 9]);
//! assert_eq!(set.to_string(), "{0, 1, 2, 7, 8, 9}");
//! ```
//!
//! ## Set Algebra
//!
//! ```
//! use bitset::{and, bitset};
//!
//! let mut evens = bitset![0, 2, 4, 6, 8];
//! let small = bitset![1, 2, 3, 4];
//!
//! // Free function: inputs untouched
//! assert_eq!(and(&evens, &small), bitset![2, 4]);
//!
//! // In-place method: receiver overwritten
//! evens.or(&small);
//! assert_eq!(evens.size(), 7);
//!
//! // Operators
//! assert_eq!(&evens - &small, bitset![0, 6, 8]);
//! ```
//!
//! # Error Handling
//!
//! Ranges that are empty or inverted are no-ops, and integers beyond the
//! stored words are simply absent. Fallible entry points (signed input and
//! text parsing) return [`Result`] with a [`BitSetError`].
//!
//! # Concurrency
//!
//! There is no internal synchronization. Mutation needs `&mut self`, so
//! sharing a set across threads takes an external lock, or separate sets
//! merged afterwards with the algebra operations.

pub mod algebra;
pub mod error;
pub mod set;

// Re-exports for convenient access
pub use algebra::{and, and_not, or, xor};
pub use error::{BitSetError, Result};
pub use set::{BitSet, Iter, Word, BITS_PER_WORD, WORD_MAX};

/// Build a [`BitSet`] from a list of members.
///
/// ```
/// use bitset::bitset;
///
/// let set = bitset![5, 1, 3, 3];
/// assert_eq!(set.to_string(), "{1, 3, 5}");
/// assert!(bitset![].is_empty());
/// ```
#[macro_export]
macro_rules! bitset {
    () => {
        $crate::BitSet::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::BitSet::from([$($value),+])
    };
}

//! BitSet - Growable set of non-negative integers backed by 64-bit words.
//!
//! Membership of integer `n` is bit `n % 64` of word `n / 64`. Storage grows
//! on demand when a larger integer is added, so there is no fixed upper bound.
//!
//! # Design
//!
//! - Uses `BitVec<u64, Lsb0>` for storage, always sized to a whole number of words
//! - Bit indexing: word_idx = n / 64, bit_offset = n % 64
//! - Range and algebra operations work directly on the raw word slice
//! - Population count is tracked so `size()` is O(1)
//!
//! # Examples
//!
//! ```
//! use bitset::BitSet;
//!
//! let mut set = BitSet::new();
//! set.add(5);
//! set.add_range(10, 13);
//! assert_eq!(set.size(), 4);
//! assert_eq!(set.to_string(), "{5, 10, 11, 12}");
//! ```

use bitvec::prelude::*;
use itertools::Itertools;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::{BitSetError, Result};

/// Word type for bit storage (64-bit unsigned integer)
pub type Word = u64;

/// Number of bits per word
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

/// Get word index from bit position
#[inline(always)]
const fn get_word_idx(bit_pos: usize) -> usize {
    bit_pos >> 6 // bit_pos / 64
}

/// Get bit index within word from bit position
#[inline(always)]
const fn get_bit_idx(bit_pos: usize) -> usize {
    bit_pos & 63 // bit_pos % 64
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
const fn bitmask(n: usize) -> Word {
    if n == 0 {
        0
    } else if n >= BITS_PER_WORD {
        WORD_MAX
    } else {
        WORD_MAX >> (BITS_PER_WORD - n)
    }
}

/// Walk the words overlapping `[start, end)`, passing each word together with
/// the mask of its bits that fall inside the range.
///
/// Requires `start < end` and `words` covering bit `end - 1`. Only the two
/// boundary words get partial masks; every word between them gets `WORD_MAX`.
#[inline]
fn for_each_range_word<F>(words: &mut [Word], start: usize, end: usize, mut f: F)
where
    F: FnMut(&mut Word, Word),
{
    debug_assert!(start < end);
    debug_assert!(get_word_idx(end - 1) < words.len(), "range exceeds storage");

    let beg_word = get_word_idx(start);
    let end_word = get_word_idx(end - 1);
    let beg_mask = !bitmask(get_bit_idx(start));
    let end_mask = bitmask(get_bit_idx(end - 1) + 1);

    if beg_word == end_word {
        f(&mut words[beg_word], beg_mask & end_mask);
        return;
    }

    f(&mut words[beg_word], beg_mask);
    for word in &mut words[beg_word + 1..end_word] {
        f(word, WORD_MAX);
    }
    f(&mut words[end_word], end_mask);
}

/// Growable set of non-negative integers.
///
/// All bit indices are 0-based. Integers beyond the current storage are
/// simply absent; adding one grows the word array to cover it.
#[derive(Clone, Default)]
pub struct BitSet {
    /// Underlying storage, length always a multiple of `BITS_PER_WORD`
    bv: BitVec<Word, Lsb0>,
    /// Number of members
    len: usize,
}

impl BitSet {
    /// Create an empty set. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let set = BitSet::new();
    /// assert_eq!(set.size(), 0);
    /// assert_eq!(set.num_words(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            bv: BitVec::new(),
            len: 0,
        }
    }

    /// Create an empty set able to hold integers in `0..bits` without
    /// reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bv: BitVec::with_capacity(bits.div_ceil(BITS_PER_WORD).saturating_mul(BITS_PER_WORD)),
            len: 0,
        }
    }

    /// Build a set from signed values, rejecting the first negative one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::{BitSet, BitSetError};
    ///
    /// let set = BitSet::try_from_signed([3, 1, 2]).unwrap();
    /// assert_eq!(set.to_string(), "{1, 2, 3}");
    ///
    /// let err = BitSet::try_from_signed([4, -1]).unwrap_err();
    /// assert_eq!(err, BitSetError::NegativeValue(-1));
    /// ```
    pub fn try_from_signed<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut set = Self::new();
        for value in values {
            if value < 0 {
                return Err(BitSetError::NegativeValue(value));
            }
            let n = usize::try_from(value).map_err(|_| BitSetError::OutOfRange(value))?;
            set.add(n);
        }
        Ok(set)
    }

    // =========================================================================
    // Storage
    // =========================================================================

    /// Ensure storage covers bit `b`.
    #[inline]
    fn grow_to(&mut self, b: usize) {
        let needed = get_word_idx(b) + 1;
        if needed > self.num_words() {
            self.grow_words(needed);
        }
    }

    /// Extend storage to `num_words` words, zero-filling the new ones.
    ///
    /// The backing vector doubles its capacity when it reallocates, so a run
    /// of ascending `add` calls costs amortized O(1) each.
    #[cold]
    pub(crate) fn grow_words(&mut self, num_words: usize) {
        debug_assert!(num_words >= self.num_words());
        tracing::trace!(from = self.num_words(), to = num_words, "growing bitset storage");
        self.bv.resize(num_words.saturating_mul(BITS_PER_WORD), false);
    }

    /// Drop every word from index `num_words` onward.
    pub(crate) fn truncate_words(&mut self, num_words: usize) {
        self.bv.truncate(num_words.saturating_mul(BITS_PER_WORD));
    }

    /// Mutable word access for the algebra routines. Callers must `recount`.
    #[inline(always)]
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        self.bv.as_raw_mut_slice()
    }

    /// Recompute the member count from the words.
    pub(crate) fn recount(&mut self) {
        self.len = self.words().iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Number of words up to and including the last non-zero one.
    fn used_words(&self) -> usize {
        self.words()
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1)
    }

    // =========================================================================
    // Single Member Operations
    // =========================================================================

    /// Add `n` to the set, growing storage if needed.
    ///
    /// Returns `true` if `n` was not already a member.
    ///
    /// # Panics
    ///
    /// Panics if the word array needed to hold `n` cannot be allocated.
    #[inline]
    pub fn add(&mut self, n: usize) -> bool {
        self.grow_to(n);
        let was_set = self.bv.replace(n, true);
        if !was_set {
            self.len += 1;
        }
        !was_set
    }

    /// Remove `n` from the set. Never grows storage.
    ///
    /// Returns `true` if `n` was a member.
    #[inline]
    pub fn delete(&mut self, n: usize) -> bool {
        if n >= self.bv.len() {
            return false;
        }
        let was_set = self.bv.replace(n, false);
        if was_set {
            self.len -= 1;
        }
        was_set
    }

    /// Check whether `n` is a member. Integers beyond storage are absent.
    #[inline]
    pub fn contains(&self, n: usize) -> bool {
        self.bv.get(n).map_or(false, |bit| *bit)
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Add every integer in `[start, end)`.
    ///
    /// Fully covered words are filled whole; only the two boundary words are
    /// masked. An empty or inverted range is a no-op and does not grow storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut set = BitSet::new();
    /// set.add_range(60, 200);
    /// assert_eq!(set.size(), 140);
    /// assert!(set.contains(60) && set.contains(199) && !set.contains(200));
    /// ```
    pub fn add_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        self.grow_to(end - 1);

        let mut added = 0;
        for_each_range_word(self.bv.as_raw_mut_slice(), start, end, |word, mask| {
            added += (mask & !*word).count_ones() as usize;
            *word |= mask;
        });
        self.len += added;
    }

    /// Remove every integer in `[start, end)`.
    ///
    /// The range is clipped to the current storage. An empty or inverted range
    /// is a no-op.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.bv.len());
        if start >= end {
            return;
        }

        let mut removed = 0;
        for_each_range_word(self.bv.as_raw_mut_slice(), start, end, |word, mask| {
            removed += (*word & mask).count_ones() as usize;
            *word &= !mask;
        });
        self.len -= removed;
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Remove all members, keeping the allocated words for reuse.
    pub fn reset(&mut self) {
        self.bv.as_raw_mut_slice().fill(0);
        self.len = 0;
    }

    /// Drop trailing all-zero words and release spare capacity.
    pub fn shrink_to_fit(&mut self) {
        let used = self.used_words();
        if used < self.num_words() {
            tracing::debug!(from = self.num_words(), to = used, "trimming bitset storage");
            self.truncate_words(used);
        }
        self.bv.shrink_to_fit();
    }

    // =========================================================================
    // Counting and Search
    // =========================================================================

    /// Number of members (population count).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of members. Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest member, if any.
    pub fn min(&self) -> Option<usize> {
        self.next_member(0)
    }

    /// Largest member, if any.
    pub fn max(&self) -> Option<usize> {
        let words = self.words();
        let idx = words.iter().rposition(|&w| w != 0)?;
        Some(idx * BITS_PER_WORD + (BITS_PER_WORD - 1 - words[idx].leading_zeros() as usize))
    }

    /// Smallest member greater than or equal to `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::bitset;
    ///
    /// let set = bitset![3, 70, 500];
    /// assert_eq!(set.next_member(4), Some(70));
    /// assert_eq!(set.next_member(70), Some(70));
    /// assert_eq!(set.next_member(501), None);
    /// ```
    pub fn next_member(&self, from: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let words = self.words();
        let mut word_idx = get_word_idx(from);
        let mut word = *words.get(word_idx)? & !bitmask(get_bit_idx(from));

        loop {
            if word != 0 {
                return Some(word_idx * BITS_PER_WORD + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            word = *words.get(word_idx)?;
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Call `f` with each member in ascending order until it returns `true`.
    ///
    /// Returns `true` if `f` stopped the visit early. The set is borrowed for
    /// the whole visit, so `f` cannot mutate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::bitset;
    ///
    /// let set = bitset![2, 4, 6];
    /// let mut seen = Vec::new();
    /// let stopped = set.visit(|n| {
    ///     seen.push(n);
    ///     n >= 4
    /// });
    /// assert!(stopped);
    /// assert_eq!(seen, vec![2, 4]);
    /// ```
    pub fn visit<F>(&self, f: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        self.iter().any(f)
    }

    /// Iterate members in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.words(), self.len)
    }

    // =========================================================================
    // Word-Level Access
    // =========================================================================

    /// Number of words in storage, including trailing zero words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.bv.len() / BITS_PER_WORD
    }

    /// Read-only access to the word storage.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        self.bv.as_raw_slice()
    }

    /// Number of bits the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bv.capacity()
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.bv.capacity().div_ceil(8)
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Ascending iterator over the members of a [`BitSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(words: &'a [Word], len: usize) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().copied().unwrap_or(0),
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            if self.remaining == 0 {
                return None;
            }
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        // clear lowest set bit
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(self.word_idx * BITS_PER_WORD + bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// =============================================================================
// Construction from Values
// =============================================================================

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for n in iter {
            self.add(n);
        }
    }
}

impl<'a> Extend<&'a usize> for BitSet {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = &'a usize>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<&[usize]> for BitSet {
    fn from(values: &[usize]) -> Self {
        values.iter().collect()
    }
}

impl<const N: usize> From<[usize; N]> for BitSet {
    fn from(values: [usize; N]) -> Self {
        values.into_iter().collect()
    }
}

// =============================================================================
// Text Form
// =============================================================================

impl fmt::Display for BitSet {
    /// Writes members ascending as `{1, 3, 5}`; the empty set is `{}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().format(", "))
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromStr for BitSet {
    type Err = BitSetError;

    /// Parse the `Display` form. Members may appear in any order and repeat,
    /// but each must be plain decimal digits (no `+` or `-` sign).
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(BitSetError::MissingBraces)?
            .trim();

        if inner.is_empty() {
            return Ok(Self::new());
        }

        inner
            .split(',')
            .map(|token| {
                let token = token.trim();
                if token.starts_with('+') {
                    return Err(BitSetError::InvalidMember {
                        token: token.to_string(),
                        source: None,
                    });
                }
                token
                    .parse::<usize>()
                    .map_err(|source| BitSetError::InvalidMember {
                        token: token.to_string(),
                        source: Some(source),
                    })
            })
            .collect()
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for BitSet {
    /// Compare by membership; trailing zero words on either side are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let (a, b) = (self.words(), other.words());
        let common = a.len().min(b.len());
        a[..common] == b[..common]
            && a[common..].iter().all(|&w| w == 0)
            && b[common..].iter().all(|&w| w == 0)
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words()[..self.used_words()].hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(set: &BitSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_bitmask() {
        assert_eq!(bitmask(0), 0);
        assert_eq!(bitmask(1), 1);
        assert_eq!(bitmask(8), 0xff);
        assert_eq!(bitmask(64), WORD_MAX);
    }

    #[test]
    fn test_new() {
        let set = BitSet::new();
        assert_eq!(set.size(), 0);
        assert_eq!(set.num_words(), 0);
        assert!(set.is_empty());
        assert!(!set.contains(0));
    }

    #[test]
    fn test_with_capacity() {
        let set = BitSet::with_capacity(100);
        assert!(set.capacity() >= 128);
        assert_eq!(set.num_words(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_with_capacity_rounds_up_to_words() {
        let set = BitSet::with_capacity(BITS_PER_WORD * 3 + 1);
        assert!(set.capacity() >= BITS_PER_WORD * 4);
    }

    #[test]
    #[should_panic]
    fn test_with_capacity_near_max_does_not_wrap() {
        // rounding up would wrap to a tiny capacity without saturation
        let set = BitSet::with_capacity(usize::MAX - 10);
        assert!(set.capacity() >= BITS_PER_WORD);
    }

    #[test]
    fn test_add_grows_storage() {
        let mut set = BitSet::new();
        assert!(set.add(0));
        assert_eq!(set.num_words(), 1);

        assert!(set.add(64));
        assert_eq!(set.num_words(), 2);

        assert!(set.add(1000));
        assert_eq!(set.num_words(), 1000 / 64 + 1);
        assert_eq!(set.words()[5], 0);
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn test_add_idempotent() {
        let mut set = BitSet::new();
        assert!(set.add(7));
        assert!(!set.add(7));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_delete() {
        let mut set = BitSet::from([1, 2, 3]);
        assert!(set.delete(2));
        assert!(!set.delete(2));
        assert!(!set.delete(10_000));
        assert_eq!(set.num_words(), 1);
        assert_eq!(set.size(), 2);
        assert!(!set.contains(2));
    }

    #[test]
    fn test_contains_out_of_range() {
        let set = BitSet::from([3]);
        assert!(set.contains(3));
        assert!(!set.contains(64));
        assert!(!set.contains(usize::MAX));
    }

    #[test]
    fn test_add_range_single_word() {
        let mut set = BitSet::new();
        set.add_range(2, 10);
        assert_eq!(set.words()[0], 0b11_1111_1100);
        assert_eq!(set.size(), 8);
    }

    #[test]
    fn test_add_range_multi_word() {
        let mut set = BitSet::new();
        set.add_range(60, 260);
        assert_eq!(set.num_words(), 5);
        assert_eq!(set.words()[0], WORD_MAX << 60);
        assert_eq!(set.words()[1], WORD_MAX);
        assert_eq!(set.words()[3], WORD_MAX);
        assert_eq!(set.words()[4], bitmask(4));
        assert_eq!(set.size(), 200);
    }

    #[test]
    fn test_add_range_word_aligned() {
        let mut set = BitSet::new();
        set.add_range(64, 128);
        assert_eq!(set.num_words(), 2);
        assert_eq!(set.words(), &[0, WORD_MAX]);
        assert_eq!(set.size(), 64);
    }

    #[test]
    fn test_add_range_counts_overlap_once() {
        let mut set = BitSet::from([5, 70]);
        set.add_range(0, 100);
        assert_eq!(set.size(), 100);
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        let mut set = BitSet::new();
        set.add_range(10, 10);
        set.add_range(20, 5);
        assert_eq!(set.num_words(), 0);

        set.add_range(0, 10);
        set.delete_range(8, 2);
        set.delete_range(4, 4);
        assert_eq!(set.size(), 10);
    }

    #[test]
    fn test_delete_range() {
        let mut set = BitSet::new();
        set.add_range(0, 200);
        set.delete_range(10, 150);
        assert_eq!(set.size(), 60);
        assert!(set.contains(9));
        assert!(!set.contains(10));
        assert!(!set.contains(149));
        assert!(set.contains(150));
    }

    #[test]
    fn test_delete_range_clipped_to_storage() {
        let mut set = BitSet::from([1, 2, 3]);
        set.delete_range(2, 1_000_000);
        assert_eq!(set.num_words(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1]);

        set.delete_range(500, 600);
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_reset_keeps_storage() {
        let mut set = BitSet::new();
        set.add_range(0, 1000);
        let words = set.num_words();
        let capacity = set.capacity();

        set.reset();
        assert_eq!(set.size(), 0);
        assert_eq!(set.num_words(), words);
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains(500));

        set.add(999);
        assert_eq!(set.capacity(), capacity);
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut set = BitSet::from([3, 500]);
        set.delete(500);
        set.shrink_to_fit();
        assert_eq!(set.num_words(), 1);
        assert_eq!(set, BitSet::from([3]));

        set.reset();
        set.shrink_to_fit();
        assert_eq!(set.num_words(), 0);
    }

    #[test]
    fn test_min_max() {
        let set = BitSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);

        let set = BitSet::from([130, 7, 64]);
        assert_eq!(set.min(), Some(7));
        assert_eq!(set.max(), Some(130));
    }

    #[test]
    fn test_next_member() {
        let set = BitSet::from([1, 63, 64, 300]);
        assert_eq!(set.next_member(0), Some(1));
        assert_eq!(set.next_member(2), Some(63));
        assert_eq!(set.next_member(64), Some(64));
        assert_eq!(set.next_member(65), Some(300));
        assert_eq!(set.next_member(301), None);
        assert_eq!(set.next_member(usize::MAX), None);
    }

    #[test]
    fn test_iter() {
        let set = BitSet::from([200, 0, 63, 64, 65]);
        let iter = set.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.collect::<Vec<_>>(), vec![0, 63, 64, 65, 200]);
    }

    #[test]
    fn test_iter_skips_trailing_zero_words() {
        let mut set = BitSet::from([1, 5000]);
        set.delete(5000);
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_visit_stops_early() {
        let set = BitSet::from([2, 4, 6]);
        let mut visited = 0;
        let stopped = set.visit(|_| {
            visited += 1;
            true
        });
        assert!(stopped);
        assert_eq!(visited, 1);
    }

    #[test]
    fn test_visit_all() {
        let set = BitSet::from([2, 4, 6]);
        let mut seen = Vec::new();
        let stopped = set.visit(|n| {
            seen.push(n);
            false
        });
        assert!(!stopped);
        assert_eq!(seen, vec![2, 4, 6]);
    }

    #[test]
    fn test_display() {
        assert_eq!(BitSet::new().to_string(), "{}");
        assert_eq!(BitSet::from([1, 3, 5]).to_string(), "{1, 3, 5}");
        assert_eq!(BitSet::from([5, 1, 3]).to_string(), "{1, 3, 5}");
        assert_eq!(format!("{:?}", BitSet::from([64, 2])), "{2, 64}");
    }

    #[test]
    fn test_from_str() {
        let set: BitSet = "{1, 3, 5}".parse().unwrap();
        assert_eq!(set, BitSet::from([1, 3, 5]));

        let set: BitSet = " { 9,2 ,2 } ".parse().unwrap();
        assert_eq!(set, BitSet::from([2, 9]));

        let set: BitSet = "{}".parse().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!("1, 2".parse::<BitSet>(), Err(BitSetError::MissingBraces));
        assert_eq!("{1, 2".parse::<BitSet>(), Err(BitSetError::MissingBraces));

        match "{1, -2}".parse::<BitSet>() {
            Err(BitSetError::InvalidMember { token, .. }) => assert_eq!(token, "-2"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            "{1,,2}".parse::<BitSet>(),
            Err(BitSetError::InvalidMember { .. })
        ));
    }

    #[test]
    fn test_from_str_rejects_plus_sign() {
        assert_eq!(
            "{1, +5}".parse::<BitSet>(),
            Err(BitSetError::InvalidMember {
                token: "+5".to_string(),
                source: None,
            })
        );
        assert!("{+0}".parse::<BitSet>().is_err());
    }

    #[test]
    fn test_try_from_signed() {
        let set = BitSet::try_from_signed(vec![0, 5, 5]).unwrap();
        assert_eq!(set, BitSet::from([0, 5]));

        assert_eq!(
            BitSet::try_from_signed(vec![1, -7, -8]),
            Err(BitSetError::NegativeValue(-7))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn test_try_from_signed_out_of_range() {
        let too_big = i64::from(u32::MAX) + 1;
        assert_eq!(
            BitSet::try_from_signed([1, too_big]),
            Err(BitSetError::OutOfRange(too_big))
        );
    }

    #[test]
    fn test_equality_ignores_trailing_words() {
        let mut a = BitSet::from([1, 2]);
        let b = BitSet::from([1, 2]);
        a.add(900);
        a.delete(900);
        assert_ne!(a.num_words(), b.num_words());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.add(3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_independent() {
        let mut original = BitSet::from([1, 2, 3]);
        let mut copy = original.clone();
        copy.add(100);
        copy.delete(1);
        assert_eq!(original, BitSet::from([1, 2, 3]));

        original.reset();
        assert_eq!(copy, BitSet::from([2, 3, 100]));
    }

    #[test]
    fn test_extend() {
        let mut set = BitSet::new();
        set.extend([4, 2]);
        set.extend(&[2, 8]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 4, 8]);
    }

    #[test]
    fn test_memory_usage() {
        let set = BitSet::with_capacity(1024);
        assert!(set.memory_usage() >= 128);
    }
}

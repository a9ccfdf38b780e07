//! Set algebra over [`BitSet`]s of any size.
//!
//! Every operator comes in three forms:
//!
//! - a free function (`and(&a, &b)`) returning a new set,
//! - an in-place method (`a.and(&b)`) that overwrites the receiver,
//! - the matching operator trait (`&a & &b`, `a &= &b`).
//!
//! Operands may cover different numbers of words. Words missing on the
//! shorter side read as zero, so `And` is bounded by the shorter operand,
//! `Or` and `Xor` extend to the longer one, and `AndNot` stays within the
//! left operand.
//!
//! # Examples
//!
//! ```
//! use bitset::{and, and_not, bitset, or, xor};
//!
//! let a = bitset![1, 2, 3, 4, 5];
//! let b = bitset![3, 4, 5, 6, 7, 200];
//!
//! assert_eq!(and(&a, &b).to_string(), "{3, 4, 5}");
//! assert_eq!(or(&a, &b).to_string(), "{1, 2, 3, 4, 5, 6, 7, 200}");
//! assert_eq!(xor(&a, &b).to_string(), "{1, 2, 6, 7, 200}");
//! assert_eq!(and_not(&a, &b).to_string(), "{1, 2}");
//! ```

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::set::BitSet;

// =============================================================================
// In-Place Operations
// =============================================================================

impl BitSet {
    /// Keep only members also in `other`.
    ///
    /// Words past the end of `other` are dropped.
    pub fn and(&mut self, other: &BitSet) {
        let rhs = other.words();
        if rhs.len() < self.num_words() {
            self.truncate_words(rhs.len());
        }
        for (a, b) in self.words_mut().iter_mut().zip(rhs) {
            *a &= *b;
        }
        self.recount();
    }

    /// Add every member of `other`, growing to cover its words.
    pub fn or(&mut self, other: &BitSet) {
        let rhs = other.words();
        if rhs.len() > self.num_words() {
            self.grow_words(rhs.len());
        }
        for (a, b) in self.words_mut().iter_mut().zip(rhs) {
            *a |= *b;
        }
        self.recount();
    }

    /// Toggle membership of every member of `other`, growing to cover its words.
    pub fn xor(&mut self, other: &BitSet) {
        let rhs = other.words();
        if rhs.len() > self.num_words() {
            self.grow_words(rhs.len());
        }
        for (a, b) in self.words_mut().iter_mut().zip(rhs) {
            *a ^= *b;
        }
        self.recount();
    }

    /// Remove every member of `other`. Never grows storage.
    pub fn and_not(&mut self, other: &BitSet) {
        for (a, b) in self.words_mut().iter_mut().zip(other.words()) {
            *a &= !*b;
        }
        self.recount();
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Count members shared with `other` without building the intersection.
    pub fn intersection_len(&self, other: &BitSet) -> usize {
        self.words()
            .iter()
            .zip(other.words())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Check whether the two sets share no members.
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        self.words()
            .iter()
            .zip(other.words())
            .all(|(a, b)| a & b == 0)
    }

    /// Check whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        if self.size() > other.size() {
            return false;
        }
        let rhs = other.words();
        self.words()
            .iter()
            .enumerate()
            .all(|(i, &a)| (a & !rhs.get(i).copied().unwrap_or(0)) == 0)
    }

    /// Check whether every member of `other` is also in `self`.
    #[inline]
    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.is_subset(self)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Intersection of `a` and `b` as a new set.
pub fn and(a: &BitSet, b: &BitSet) -> BitSet {
    let (short, long) = if a.num_words() <= b.num_words() {
        (a, b)
    } else {
        (b, a)
    };
    let mut result = short.clone();
    result.and(long);
    result
}

/// Union of `a` and `b` as a new set.
pub fn or(a: &BitSet, b: &BitSet) -> BitSet {
    let (long, short) = if a.num_words() >= b.num_words() {
        (a, b)
    } else {
        (b, a)
    };
    let mut result = long.clone();
    result.or(short);
    result
}

/// Symmetric difference of `a` and `b` as a new set.
pub fn xor(a: &BitSet, b: &BitSet) -> BitSet {
    let (long, short) = if a.num_words() >= b.num_words() {
        (a, b)
    } else {
        (b, a)
    };
    let mut result = long.clone();
    result.xor(short);
    result
}

/// Members of `a` that are not in `b`, as a new set.
pub fn and_not(a: &BitSet, b: &BitSet) -> BitSet {
    let mut result = a.clone();
    result.and_not(b);
    result
}

// =============================================================================
// Operator Traits
// =============================================================================

macro_rules! impl_set_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $free:ident, $method:ident) => {
        impl $op for &BitSet {
            type Output = BitSet;

            fn $op_fn(self, rhs: Self) -> BitSet {
                $free(self, rhs)
            }
        }

        impl $op for BitSet {
            type Output = BitSet;

            fn $op_fn(mut self, rhs: Self) -> BitSet {
                self.$method(&rhs);
                self
            }
        }

        impl $op<&BitSet> for BitSet {
            type Output = BitSet;

            fn $op_fn(mut self, rhs: &BitSet) -> BitSet {
                self.$method(rhs);
                self
            }
        }

        impl $assign<&BitSet> for BitSet {
            fn $assign_fn(&mut self, rhs: &BitSet) {
                self.$method(rhs);
            }
        }

        impl $assign for BitSet {
            fn $assign_fn(&mut self, rhs: BitSet) {
                self.$method(&rhs);
            }
        }
    };
}

impl_set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and, and);
impl_set_op!(BitOr, bitor, BitOrAssign, bitor_assign, or, or);
impl_set_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor, xor);
impl_set_op!(Sub, sub, SubAssign, sub_assign, and_not, and_not);

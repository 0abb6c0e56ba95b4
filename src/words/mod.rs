//! Arithmetic over little-endian vectors of 32-bit words.
//!
//! Word 0 is the least significant. Functions that care about the logical width
//! take `bits`; all others work on the full vector, so callers run
//! [`canonicalize`] afterwards to restore the bits above the width.

mod add;
mod bits;
mod cmp;
mod div;
mod mul;

pub(crate) use add::{add_assign, add_word, negate, sub_assign, sub_word};
pub(crate) use bits::{
    and_assign, bit_length, count_ones, highest_set_bit, lowest_set_bit, not_assign, or_assign,
    shl_assign, shr_assign, xor_assign,
};
pub(crate) use cmp::{cmp_signed, cmp_unsigned};
pub(crate) use div::{div_rem, div_word_assign};
pub(crate) use mul::{mul_add_word, mul_into};

use crate::ty::{word_count, WORD_BITS};

/// Bits of the top word that belong to a `bits`-wide value, 1..=32.
pub(crate) const fn top_bits(bits: u32) -> u32 {
    bits - (word_count(bits) as u32 - 1) * WORD_BITS
}

/// Mask selecting the value bits of the top word.
pub(crate) const fn top_mask(bits: u32) -> u32 {
    let used = top_bits(bits);
    if used == WORD_BITS {
        u32::MAX
    } else {
        (1 << used) - 1
    }
}

/// Zeroes (unsigned) or sign-fills (signed) the bits above `bits` in the top word.
pub(crate) fn canonicalize(words: &mut [u32], bits: u32, signed: bool) {
    debug_assert_eq!(words.len(), word_count(bits));
    let mask = top_mask(bits);
    if mask == u32::MAX {
        return;
    }
    let top = words.len() - 1;
    if signed && get_bit(words, bits - 1) {
        words[top] |= !mask;
    } else {
        words[top] &= mask;
    }
}

pub(crate) fn is_canonical(words: &[u32], bits: u32, signed: bool) -> bool {
    let mut copy = [0u32; 2 * crate::ty::MAX_WORDS];
    let copy = &mut copy[..words.len()];
    copy.copy_from_slice(words);
    canonicalize(copy, bits, signed);
    copy == words
}

pub(crate) fn get_bit(words: &[u32], index: u32) -> bool {
    (words[(index / WORD_BITS) as usize] >> (index % WORD_BITS)) & 1 == 1
}

pub(crate) fn set_bit(words: &mut [u32], index: u32, value: bool) {
    let word = &mut words[(index / WORD_BITS) as usize];
    let mask = 1 << (index % WORD_BITS);
    if value {
        *word |= mask;
    } else {
        *word &= !mask;
    }
}

pub(crate) fn is_zero(words: &[u32]) -> bool {
    words.iter().all(|&w| w == 0)
}

/// Word used to fill vacated positions when extending a value.
pub(crate) fn fill_word(words: &[u32], bits: u32, signed: bool) -> u32 {
    if signed && get_bit(words, bits - 1) {
        u32::MAX
    } else {
        0
    }
}

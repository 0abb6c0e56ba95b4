use crate::ty::WORD_BITS;

use super::{get_bit, top_mask};

/// Shifts the whole vector left by `n` bits, filling with zeros.
pub(crate) fn shl_assign(words: &mut [u32], n: u32) {
    let len = words.len();
    let word_shift = (n / WORD_BITS) as usize;
    let bit_shift = n % WORD_BITS;
    if word_shift >= len {
        words.fill(0);
        return;
    }

    // Walk downwards so every source word is read before it is overwritten.
    for i in (0..len).rev() {
        let hi = if i >= word_shift { words[i - word_shift] } else { 0 };
        let lo = if i > word_shift { words[i - word_shift - 1] } else { 0 };
        words[i] = if bit_shift == 0 {
            hi
        } else {
            (hi << bit_shift) | (lo >> (WORD_BITS - bit_shift))
        };
    }
}

/// Shifts the whole vector right by `n` bits; vacated positions take bits of `fill`.
///
/// `fill == 0` is a logical shift, `fill == u32::MAX` an arithmetic shift of a
/// negative value.
pub(crate) fn shr_assign(words: &mut [u32], n: u32, fill: u32) {
    let len = words.len();
    let word_shift = (n / WORD_BITS) as usize;
    let bit_shift = n % WORD_BITS;
    if word_shift >= len {
        words.fill(fill);
        return;
    }

    for i in 0..len {
        let lo = words.get(i + word_shift).copied().unwrap_or(fill);
        let hi = words.get(i + word_shift + 1).copied().unwrap_or(fill);
        words[i] = if bit_shift == 0 {
            lo
        } else {
            (lo >> bit_shift) | (hi << (WORD_BITS - bit_shift))
        };
    }
}

pub(crate) fn and_assign(lhs: &mut [u32], rhs: &[u32]) {
    lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l &= r);
}

pub(crate) fn or_assign(lhs: &mut [u32], rhs: &[u32]) {
    lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l |= r);
}

pub(crate) fn xor_assign(lhs: &mut [u32], rhs: &[u32]) {
    lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l ^= r);
}

pub(crate) fn not_assign(words: &mut [u32]) {
    words.iter_mut().for_each(|w| *w = !*w);
}

/// Index of the most significant set bit of the whole vector.
pub(crate) fn highest_set_bit(words: &[u32]) -> Option<u32> {
    words
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &w)| w != 0)
        .map(|(i, w)| i as u32 * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros()))
}

pub(crate) fn lowest_set_bit(words: &[u32]) -> Option<u32> {
    words
        .iter()
        .enumerate()
        .find(|(_, &w)| w != 0)
        .map(|(i, w)| i as u32 * WORD_BITS + w.trailing_zeros())
}

/// Minimal two's-complement length excluding the sign bit.
///
/// Negative values count the bits of their complement, so `-1` has length 0
/// and `-128` has length 7.
pub(crate) fn bit_length(words: &[u32], bits: u32, signed: bool) -> u32 {
    if signed && get_bit(words, bits - 1) {
        let mut inverted = [0u32; crate::ty::MAX_WORDS];
        let inverted = &mut inverted[..words.len()];
        inverted.copy_from_slice(words);
        not_assign(inverted);
        highest_set_bit(inverted).map_or(0, |b| b + 1)
    } else {
        highest_set_bit(words).map_or(0, |b| b + 1)
    }
}

/// Set bits within the value's width; sign-extension bits are not counted.
pub(crate) fn count_ones(words: &[u32], bits: u32) -> u32 {
    let (top, rest) = match words.split_last() {
        Some(split) => split,
        None => return 0,
    };
    rest.iter().map(|w| w.count_ones()).sum::<u32>() + (top & top_mask(bits)).count_ones()
}

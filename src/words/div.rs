use core::cmp::Ordering;

use crate::ty::WORD_BITS;

use super::{cmp_unsigned, get_bit, highest_set_bit, set_bit, sub_assign};

/// Unsigned long division of equal-length vectors: `quot = num / den`, `rem = num % den`.
///
/// Callers reject a zero `den`; if one slips through both outputs stay zero.
pub(crate) fn div_rem(num: &[u32], den: &[u32], quot: &mut [u32], rem: &mut [u32]) {
    debug_assert!(num.len() == den.len() && quot.len() == num.len() && rem.len() == num.len());
    quot.fill(0);
    rem.fill(0);

    let (Some(num_top), Some(den_top)) = (highest_set_bit(num), highest_set_bit(den)) else {
        return;
    };

    if den_top < WORD_BITS {
        rem[0] = div_rem_word(num, den[0], quot);
        return;
    }

    // Restoring division, one bit of the numerator per step.
    for i in (0..=num_top).rev() {
        let overflow = shl1(rem, get_bit(num, i));
        if overflow || cmp_unsigned(rem, den) != Ordering::Less {
            sub_assign(rem, den);
            set_bit(quot, i, true);
        }
    }
}

/// Short division by a single word; returns the remainder.
fn div_rem_word(num: &[u32], den: u32, quot: &mut [u32]) -> u32 {
    let den = den as u64;
    let mut rem = 0u64;
    for (q, &n) in quot.iter_mut().zip(num).rev() {
        let cur = (rem << WORD_BITS) | n as u64;
        *q = (cur / den) as u32;
        rem = cur % den;
    }
    rem as u32
}

/// `words /= den` in place; returns the remainder.
pub(crate) fn div_word_assign(words: &mut [u32], den: u32) -> u32 {
    let den = den as u64;
    let mut rem = 0u64;
    for w in words.iter_mut().rev() {
        let cur = (rem << WORD_BITS) | *w as u64;
        *w = (cur / den) as u32;
        rem = cur % den;
    }
    rem as u32
}

/// `words = (words << 1) | low`; returns the bit shifted out of the top.
fn shl1(words: &mut [u32], low: bool) -> bool {
    let mut carry = low as u32;
    for w in words.iter_mut() {
        let next = *w >> (WORD_BITS - 1);
        *w = (*w << 1) | carry;
        carry = next;
    }
    carry != 0
}

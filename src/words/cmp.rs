use core::cmp::Ordering;

use super::get_bit;

/// Unsigned order, most significant word first.
pub(crate) fn cmp_unsigned(lhs: &[u32], rhs: &[u32]) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().rev().cmp(rhs.iter().rev())
}

/// Two's-complement order of two `bits`-wide values.
///
/// Signs decide first; values of equal sign order the same way as their raw words.
pub(crate) fn cmp_signed(lhs: &[u32], rhs: &[u32], bits: u32) -> Ordering {
    match (get_bit(lhs, bits - 1), get_bit(rhs, bits - 1)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => cmp_unsigned(lhs, rhs),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn split(v: u64) -> [u32; 2] {
        [v as u32, (v >> 32) as u32]
    }

    #[test]
    fn test_cmp_unsigned() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..1000 {
            let a: u64 = prng.gen();
            let b: u64 = if prng.gen_bool(0.1) { a } else { prng.gen() };
            assert_eq!(cmp_unsigned(&split(a), &split(b)), a.cmp(&b));
        }
    }

    #[test]
    fn test_cmp_signed() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);

        for _ in 0..1000 {
            let a: i64 = prng.gen();
            let b: i64 = if prng.gen_bool(0.1) { a } else { prng.gen() };
            assert_eq!(
                cmp_signed(&split(a as u64), &split(b as u64), 64),
                a.cmp(&b)
            );
        }

        // -1 as an 8-bit pattern is numerically larger than 1 as a raw word.
        assert_eq!(cmp_unsigned(&[0xFFFF_FFFF], &[1]), Ordering::Greater);
        assert_eq!(cmp_signed(&[0xFFFF_FFFF], &[1], 8), Ordering::Less);
    }
}

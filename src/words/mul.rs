/// Schoolbook multiplication keeping the low `out.len()` words of `lhs * rhs`.
///
/// With `out.len() == lhs.len() + rhs.len()` the product is exact; with
/// `out.len() == lhs.len()` it wraps modulo `2^(32 * out.len())`.
pub(crate) fn mul_into(out: &mut [u32], lhs: &[u32], rhs: &[u32]) {
    out.fill(0);
    let n = out.len();

    for (i, &a) in lhs.iter().enumerate().take(n) {
        if a == 0 {
            continue;
        }
        let mut carry = 0u64;
        let row = rhs.len().min(n - i);
        for (j, &b) in rhs.iter().enumerate().take(row) {
            let t = out[i + j] as u64 + a as u64 * b as u64 + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        let mut k = i + row;
        while carry != 0 && k < n {
            let t = out[k] as u64 + carry;
            out[k] = t as u32;
            carry = t >> 32;
            k += 1;
        }
    }
}

/// `words = words * m + a`; returns whether anything carried out of the top word.
pub(crate) fn mul_add_word(words: &mut [u32], m: u32, a: u32) -> bool {
    let mut carry = a as u64;
    for w in words.iter_mut() {
        let t = *w as u64 * m as u64 + carry;
        *w = t as u32;
        carry = t >> 32;
    }
    carry != 0
}

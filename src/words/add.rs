/// `lhs += rhs` with carry rippled word by word; returns the carry out of the top word.
pub(crate) fn add_assign(lhs: &mut [u32], rhs: &[u32]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut carry = 0u64;
    for (l, &r) in lhs.iter_mut().zip(rhs) {
        let sum = *l as u64 + r as u64 + carry;
        *l = sum as u32;
        carry = sum >> 32;
    }
    carry != 0
}

/// `lhs -= rhs` with borrow rippled word by word; returns the borrow out of the top word.
pub(crate) fn sub_assign(lhs: &mut [u32], rhs: &[u32]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut borrow = false;
    for (l, &r) in lhs.iter_mut().zip(rhs) {
        let (d0, b0) = l.overflowing_sub(r);
        let (d1, b1) = d0.overflowing_sub(borrow as u32);
        *l = d1;
        borrow = b0 | b1;
    }
    borrow
}

/// `words += w`; returns the carry out of the top word.
pub(crate) fn add_word(words: &mut [u32], w: u32) -> bool {
    let mut carry = w;
    for word in words.iter_mut() {
        if carry == 0 {
            return false;
        }
        let (sum, overflow) = word.overflowing_add(carry);
        *word = sum;
        carry = overflow as u32;
    }
    carry != 0
}

/// `words -= w`; returns the borrow out of the top word.
pub(crate) fn sub_word(words: &mut [u32], w: u32) -> bool {
    let mut borrow = w;
    for word in words.iter_mut() {
        if borrow == 0 {
            return false;
        }
        let (diff, overflow) = word.overflowing_sub(borrow);
        *word = diff;
        borrow = overflow as u32;
    }
    borrow != 0
}

/// Two's-complement negation over the whole vector.
pub(crate) fn negate(words: &mut [u32]) {
    for word in words.iter_mut() {
        *word = !*word;
    }
    add_word(words, 1);
}

use crate::error::{Error, Result};
use crate::ty::MAX_WORDS;
use crate::words;

use super::Int;

/// Width-correct arithmetic. Results wrap modulo `2^w`; nothing is ever promoted.
impl Int {
    fn binary(&self, rhs: &Self, op: impl FnOnce(&mut [u32], &[u32])) -> Result<Self> {
        Error::check_same(self.ty, rhs.ty)?;
        let mut out = *self;
        op(out.words_mut(), rhs.words());
        out.canonicalize();
        Ok(out)
    }

    fn unary(&self, op: impl FnOnce(&mut [u32])) -> Self {
        let mut out = *self;
        op(out.words_mut());
        out.canonicalize();
        out
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, |l, r| {
            words::add_assign(l, r);
        })
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, |l, r| {
            words::sub_assign(l, r);
        })
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        Error::check_same(self.ty, rhs.ty)?;
        Ok(self.wrapping_mul(rhs))
    }

    fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut out = Int::zero(self.ty);
        words::mul_into(out.words_mut(), self.words(), rhs.words());
        out.canonicalize();
        out
    }

    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of the dividend, so `self == q * rhs + r` with `|r| < |rhs|`.
    ///
    /// `MIN / -1` wraps back to `MIN` with a zero remainder.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        Error::check_same(self.ty, rhs.ty)?;
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let n = self.ty.word_count();
        let (num_negative, den_negative) = (self.is_negative(), rhs.is_negative());
        let num = self.magnitude();
        let den = rhs.magnitude();

        let mut quot = Int::zero(self.ty);
        let mut rem = Int::zero(self.ty);
        words::div_rem(&num[..n], &den[..n], quot.words_mut(), rem.words_mut());

        if num_negative != den_negative {
            words::negate(quot.words_mut());
        }
        if num_negative {
            words::negate(rem.words_mut());
        }
        quot.canonicalize();
        rem.canonicalize();
        Ok((quot, rem))
    }

    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// `|self|` as raw unsigned words. The magnitude of `MIN` is `2^(w-1)`,
    /// which still fits in `w` unsigned bits.
    pub(super) fn magnitude(&self) -> [u32; MAX_WORDS] {
        let mut out = self.words;
        if self.is_negative() {
            words::negate(&mut out[..self.ty.word_count()]);
        }
        out
    }

    fn shift_amount(&self, n: i64) -> Result<u32> {
        if n < 0 {
            return Err(Error::InvalidShiftAmount(n));
        }
        Ok(n.min(self.bits() as i64) as u32)
    }

    /// Left shift; amounts of `w` or more give zero.
    pub fn shl(&self, n: i64) -> Result<Self> {
        let n = self.shift_amount(n)?;
        if n >= self.bits() {
            return Ok(Int::zero(self.ty));
        }
        Ok(self.unary(|w| words::shl_assign(w, n)))
    }

    /// Logical right shift for unsigned types, arithmetic for signed ones.
    /// Amounts of `w` or more give zero or the sign fill.
    pub fn shr(&self, n: i64) -> Result<Self> {
        let n = self.shift_amount(n)?;
        let fill = words::fill_word(self.words(), self.bits(), self.is_signed());
        if n >= self.bits() {
            return Ok(Int::from_fn(self.ty, |_| fill));
        }
        Ok(self.unary(|w| words::shr_assign(w, n, fill)))
    }

    pub fn and(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, words::and_assign)
    }

    pub fn or(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, words::or_assign)
    }

    pub fn xor(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, words::xor_assign)
    }

    pub fn not(&self) -> Self {
        self.unary(words::not_assign)
    }

    /// Two's-complement negation; `-MIN == MIN`, and unsigned values give `2^w - self`.
    pub fn neg(&self) -> Self {
        self.unary(words::negate)
    }

    /// `|self|`, wrapping for `MIN`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            *self
        }
    }

    pub fn inc(&self) -> Self {
        self.unary(|w| {
            words::add_word(w, 1);
        })
    }

    pub fn dec(&self) -> Self {
        self.unary(|w| {
            words::sub_word(w, 1);
        })
    }

    /// Wrapping exponentiation by squaring.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = *self;
        let mut acc = Int::one(self.ty);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.wrapping_mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.wrapping_mul(&base);
            }
        }
        acc
    }

    /// Exact `(self + rhs) mod modulus`, with no truncation of the intermediate sum.
    pub fn add_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self> {
        self.check_modular("add_mod", rhs, modulus)?;
        let n = self.ty.word_count();
        let mut sum = [0u32; 2 * MAX_WORDS];
        let mut addend = [0u32; 2 * MAX_WORDS];
        sum[..n].copy_from_slice(self.words());
        addend[..n].copy_from_slice(rhs.words());
        words::add_assign(&mut sum[..2 * n], &addend[..2 * n]);
        Ok(self.reduce_wide(&sum[..2 * n], modulus))
    }

    /// Exact `(self * rhs) mod modulus`, computed over the full double-width product.
    pub fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self> {
        self.check_modular("mul_mod", rhs, modulus)?;
        let n = self.ty.word_count();
        let mut product = [0u32; 2 * MAX_WORDS];
        words::mul_into(&mut product[..2 * n], self.words(), rhs.words());
        Ok(self.reduce_wide(&product[..2 * n], modulus))
    }

    fn check_modular(&self, op: &'static str, rhs: &Self, modulus: &Self) -> Result<()> {
        Error::check_same(self.ty, rhs.ty)?;
        Error::check_same(self.ty, modulus.ty)?;
        if self.is_signed() {
            return Err(Error::RequiresUnsigned { op, ty: self.ty });
        }
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(())
    }

    fn reduce_wide(&self, wide: &[u32], modulus: &Self) -> Self {
        let len = wide.len();
        let mut den = [0u32; 2 * MAX_WORDS];
        let mut quot = [0u32; 2 * MAX_WORDS];
        let mut rem = [0u32; 2 * MAX_WORDS];
        den[..modulus.words().len()].copy_from_slice(modulus.words());
        words::div_rem(wide, &den[..len], &mut quot[..len], &mut rem[..len]);
        Int::from_fn(self.ty, |i| rem[i])
    }
}

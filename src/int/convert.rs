use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{Error, Result, WidthError};
use crate::ty::{IntType, Signedness};
use crate::words;

use super::Int;

const I32: IntType = IntType::new_unchecked(32, Signedness::Signed);
const U32: IntType = IntType::new_unchecked(32, Signedness::Unsigned);
const I64: IntType = IntType::new_unchecked(64, Signedness::Signed);
const U64: IntType = IntType::new_unchecked(64, Signedness::Unsigned);
const I128: IntType = IntType::new_unchecked(128, Signedness::Signed);
const U128: IntType = IntType::new_unchecked(128, Signedness::Unsigned);

/// Width and sign conversions.
impl Int {
    /// Zero-extends (unsigned) or sign-extends (signed) to `bits`, keeping
    /// signedness. Widening to the current width is the identity.
    pub fn widen(&self, bits: u32) -> Result<Self> {
        let target = self.ty.with_bits(bits)?;
        if bits < self.bits() {
            return Err(Error::InvalidWidth(WidthError::Widen { from: self.ty, to: bits }));
        }
        Ok(self.resize(target))
    }

    /// Keeps the low `bits` bits and reinterprets them in the narrower type of
    /// the same signedness. Truncation is silent.
    pub fn narrow(&self, bits: u32) -> Result<Self> {
        let target = self.ty.with_bits(bits)?;
        if bits > self.bits() {
            return Err(Error::InvalidWidth(WidthError::Narrow { from: self.ty, to: bits }));
        }
        Ok(self.resize(target))
    }

    /// Same bits, opposite signedness.
    pub fn reinterpret_sign(&self) -> Self {
        let mut out = *self;
        out.ty = self.ty.flip_sign();
        out.canonicalize();
        out
    }

    /// Resizes using the source signedness, then reinterprets, matching `as`
    /// between primitive integers.
    pub fn cast(&self, ty: IntType) -> Self {
        let resized = self.resize(IntType::new_unchecked(ty.bits(), self.ty.signedness()));
        if ty.signedness() == self.ty.signedness() {
            resized
        } else {
            resized.reinterpret_sign()
        }
    }

    fn resize(&self, target: IntType) -> Self {
        let fill = self.fill();
        let n = self.ty.word_count();
        Int::from_fn(target, |i| if i < n { self.words[i] } else { fill })
    }

    fn fill(&self) -> u32 {
        words::fill_word(self.words(), self.bits(), self.is_signed())
    }

    /// Word `i` of the infinitely sign-extended value.
    fn word_or_fill(&self, i: usize) -> u32 {
        if i < self.ty.word_count() {
            self.words[i]
        } else {
            self.fill()
        }
    }
}

/// Native integers.
impl Int {
    pub fn from_i64(v: i64, ty: IntType) -> Result<Self> {
        Self::from_i128(v.into(), ty)
    }

    pub fn from_u64(v: u64, ty: IntType) -> Result<Self> {
        Self::from_u128(v.into(), ty)
    }

    pub fn from_i128(v: i128, ty: IntType) -> Result<Self> {
        let bits = ty.bits();
        let fits = if ty.is_signed() {
            bits >= 128 || (-(1i128 << (bits - 1))..(1i128 << (bits - 1))).contains(&v)
        } else {
            v >= 0 && (bits >= 127 || v < (1i128 << bits))
        };
        if !fits {
            return Err(Error::ValueOutOfRange { ty });
        }
        Ok(Self::from_i128_wrapping(v, ty))
    }

    pub fn from_u128(v: u128, ty: IntType) -> Result<Self> {
        let limit = if ty.is_signed() { ty.bits() - 1 } else { ty.bits() };
        if limit < 128 && v >= (1u128 << limit) {
            return Err(Error::ValueOutOfRange { ty });
        }
        Ok(Self::from_u128_wrapping(v, ty))
    }

    /// `v` reduced modulo `2^w`.
    pub fn from_i64_wrapping(v: i64, ty: IntType) -> Self {
        Self::from_i128_wrapping(v.into(), ty)
    }

    pub fn from_u64_wrapping(v: u64, ty: IntType) -> Self {
        Self::from_u128_wrapping(v.into(), ty)
    }

    pub fn from_i128_wrapping(v: i128, ty: IntType) -> Self {
        let fill = if v < 0 { u32::MAX } else { 0 };
        Self::from_low_u128(v as u128, fill, ty)
    }

    pub fn from_u128_wrapping(v: u128, ty: IntType) -> Self {
        Self::from_low_u128(v, 0, ty)
    }

    fn from_low_u128(v: u128, fill: u32, ty: IntType) -> Self {
        Int::from_fn(ty, |i| if i < 4 { (v >> (32 * i)) as u32 } else { fill })
    }

    fn low_u128(&self) -> u128 {
        (0..4)
            .rev()
            .fold(0u128, |acc, i| (acc << 32) | self.word_or_fill(i) as u128)
    }

    /// Whether every word from `from` upward is pure sign extension.
    fn high_is_fill(&self, from: usize) -> bool {
        let fill = self.fill();
        self.words().iter().skip(from).all(|&w| w == fill)
    }

    pub fn to_i128(&self) -> Result<i128> {
        let v = self.low_u128() as i128;
        if self.high_is_fill(4) && (v < 0) == self.is_negative() {
            Ok(v)
        } else {
            Err(Error::ValueOutOfRange { ty: I128 })
        }
    }

    pub fn to_u128(&self) -> Result<u128> {
        if self.is_negative() || !self.high_is_fill(4) {
            return Err(Error::ValueOutOfRange { ty: U128 });
        }
        Ok(self.low_u128())
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_i128()
            .ok()
            .and_then(|v| i64::try_from(v).ok())
            .ok_or(Error::ValueOutOfRange { ty: I64 })
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_u128()
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .ok_or(Error::ValueOutOfRange { ty: U64 })
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.to_i128()
            .ok()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(Error::ValueOutOfRange { ty: I32 })
    }

    pub fn to_u32(&self) -> Result<u32> {
        self.to_u128()
            .ok()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(Error::ValueOutOfRange { ty: U32 })
    }

    /// Low 32 bits of the two's-complement pattern, sign-extended for
    /// types narrower than 32 bits.
    pub fn low_u32(&self) -> u32 {
        self.words[0]
    }

    pub fn low_u64(&self) -> u64 {
        self.low_u128() as u64
    }
}

/// Arbitrary-precision interop.
impl Int {
    pub fn to_bigint(&self) -> BigInt {
        let n = self.ty.word_count();
        let magnitude = BigUint::from_slice(&self.magnitude()[..n]);
        let sign = if self.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        BigInt::from_biguint(sign, magnitude)
    }

    pub fn from_bigint(v: &BigInt, ty: IntType) -> Result<Self> {
        let out = Self::from_bigint_wrapping(v, ty);
        if out.to_bigint() != *v {
            return Err(Error::ValueOutOfRange { ty });
        }
        Ok(out)
    }

    /// `v` reduced modulo `2^w`.
    pub fn from_bigint_wrapping(v: &BigInt, ty: IntType) -> Self {
        let (sign, digits) = v.to_u32_digits();
        let mut out = Int::zero(ty);
        for (w, d) in out.words_mut().iter_mut().zip(digits) {
            *w = d;
        }
        if sign == Sign::Minus {
            words::negate(out.words_mut());
        }
        out.canonicalize();
        out
    }
}

/// Byte storage.
impl Int {
    /// Big-endian two's-complement bytes, exactly `w / 8` long.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        (0..self.ty.byte_count())
            .rev()
            .map(|i| (self.words[i / 4] >> (8 * (i % 4))) as u8)
            .collect()
    }

    pub fn from_be_bytes(bytes: &[u8], ty: IntType) -> Result<Self> {
        if bytes.len() != ty.byte_count() {
            return Err(Error::InvalidWidth(WidthError::ByteCount {
                expected: ty.byte_count(),
                found: bytes.len(),
            }));
        }
        let mut out = Int::zero(ty);
        for (i, &b) in bytes.iter().rev().enumerate() {
            out.words[i / 4] |= (b as u32) << (8 * (i % 4));
        }
        out.canonicalize();
        Ok(out)
    }
}

impl From<Int> for BigInt {
    fn from(value: Int) -> Self {
        value.to_bigint()
    }
}

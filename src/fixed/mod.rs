//! Compile-time-typed fixed-width integers.
//!
//! [`FixedInt`] fixes width and signedness in the type, so operands can never
//! mismatch and the std operator traits apply. Each alias in [`types`] is one
//! instantiation; the arithmetic is the same word engine that backs [`Int`].

mod ops;
pub mod types;

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ty::{is_supported_width, word_count, IntType, Signedness};
use crate::words;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedInt<const BITS: u32, const WORDS: usize, const SIGNED: bool> {
    words: [u32; WORDS],
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> FixedInt<BITS, WORDS, SIGNED> {
    const VALID: () = assert!(
        is_supported_width(BITS) && WORDS == word_count(BITS),
        "FixedInt requires a width in 8, 16, .., 256 and WORDS == ceil(BITS / 32)"
    );

    pub const BITS: u32 = BITS;
    pub const WORDS: usize = WORDS;
    pub const SIGNED: bool = SIGNED;

    pub const TYPE: IntType = IntType::new_unchecked(
        BITS,
        if SIGNED {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        },
    );

    pub const ZERO: Self = Self::checked([0; WORDS]);
    pub const ONE: Self = Self::checked(Self::one_words());
    pub const MAX: Self = Self::checked(Self::max_words());
    pub const MIN: Self = Self::checked(Self::min_words());

    const fn checked(words: [u32; WORDS]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self { words }
    }

    const fn one_words() -> [u32; WORDS] {
        let mut w = [0; WORDS];
        w[0] = 1;
        w
    }

    const fn max_words() -> [u32; WORDS] {
        let mut w = [u32::MAX; WORDS];
        let mask = words::top_mask(BITS);
        w[WORDS - 1] = if SIGNED { mask >> 1 } else { mask };
        w
    }

    const fn min_words() -> [u32; WORDS] {
        let mut w = [0; WORDS];
        if SIGNED {
            w[WORDS - 1] = !(words::top_mask(BITS) >> 1);
        }
        w
    }

    /// Builds a value from raw words (least significant first), reducing them
    /// to canonical form.
    pub fn from_words(mut words: [u32; WORDS]) -> Self {
        words::canonicalize(&mut words, BITS, SIGNED);
        Self::checked(words)
    }

    pub fn words(&self) -> &[u32; WORDS] {
        &self.words
    }

    pub fn to_int(self) -> Int {
        Int::from(self)
    }

    /// `value` must already have type [`Self::TYPE`].
    fn from_int(value: Int) -> Self {
        let mut words = [0; WORDS];
        words.copy_from_slice(value.words());
        debug_assert!(words::is_canonical(&words, BITS, SIGNED));
        Self::checked(words)
    }

    fn fill(&self) -> u32 {
        words::fill_word(&self.words, BITS, SIGNED)
    }

    fn map(self, op: impl FnOnce(&mut [u32])) -> Self {
        let mut out = self;
        op(&mut out.words);
        words::canonicalize(&mut out.words, BITS, SIGNED);
        out
    }

    fn zip(self, rhs: Self, op: impl FnOnce(&mut [u32], &[u32])) -> Self {
        self.map(|w| op(w, &rhs.words))
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.zip(rhs, |l, r| {
            words::add_assign(l, r);
        })
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.zip(rhs, |l, r| {
            words::sub_assign(l, r);
        })
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut out = [0; WORDS];
        words::mul_into(&mut out, &self.words, &rhs.words);
        Self::from_words(out)
    }

    pub fn wrapping_neg(self) -> Self {
        self.map(words::negate)
    }

    /// Truncating division; see [`Int::div_rem`].
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        let (q, r) = self.to_int().div_rem(&rhs.to_int())?;
        Ok((Self::from_int(q), Self::from_int(r)))
    }

    pub fn pow(self, exp: u32) -> Self {
        Self::from_int(self.to_int().pow(exp))
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    pub fn is_zero(&self) -> bool {
        words::is_zero(&self.words)
    }

    pub fn is_negative(&self) -> bool {
        SIGNED && words::get_bit(&self.words, BITS - 1)
    }

    pub fn signum(&self) -> i32 {
        self.to_int().signum()
    }

    pub fn count_ones(&self) -> u32 {
        words::count_ones(&self.words, BITS)
    }

    pub fn bit_length(&self) -> u32 {
        words::bit_length(&self.words, BITS, SIGNED)
    }

    pub fn to_bigint(&self) -> BigInt {
        self.to_int().to_bigint()
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.to_int().to_be_bytes()
    }
}

/// Operations routed through [`Int`]; see the methods of the same name there.
impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> FixedInt<BITS, WORDS, SIGNED> {
    pub fn inc(self) -> Self {
        Self::from_int(self.to_int().inc())
    }

    pub fn dec(self) -> Self {
        Self::from_int(self.to_int().dec())
    }

    /// Same numeric order as [`Ord`]; kept for parity with [`Int::compare`].
    pub fn compare(&self, rhs: &Self) -> Ordering {
        self.cmp(rhs)
    }

    /// Shift by a signed amount; negative amounts are
    /// [`Error::InvalidShiftAmount`]. The `<<` operator takes `u32` instead.
    pub fn shl(self, n: i64) -> Result<Self> {
        self.to_int().shl(n).map(Self::from_int)
    }

    pub fn shr(self, n: i64) -> Result<Self> {
        self.to_int().shr(n).map(Self::from_int)
    }

    pub fn add_mod(self, rhs: Self, modulus: Self) -> Result<Self> {
        self.to_int()
            .add_mod(&rhs.to_int(), &modulus.to_int())
            .map(Self::from_int)
    }

    pub fn mul_mod(self, rhs: Self, modulus: Self) -> Result<Self> {
        self.to_int()
            .mul_mod(&rhs.to_int(), &modulus.to_int())
            .map(Self::from_int)
    }

    pub fn get_bit(&self, index: u32) -> Result<bool> {
        self.to_int().get_bit(index)
    }

    pub fn set_bit(self, index: u32) -> Result<Self> {
        self.to_int().set_bit(index).map(Self::from_int)
    }

    pub fn clear_bit(self, index: u32) -> Result<Self> {
        self.to_int().clear_bit(index).map(Self::from_int)
    }

    pub fn flip_bit(self, index: u32) -> Result<Self> {
        self.to_int().flip_bit(index).map(Self::from_int)
    }

    pub fn sign_bit(&self) -> bool {
        self.is_negative()
    }

    pub fn lowest_set_bit(&self) -> Option<u32> {
        words::lowest_set_bit(&self.words)
    }

    /// Same bits under signedness `S2`, e.g. `int8::MIN.reinterpret_sign::<false>()`
    /// is `128u8`.
    pub fn reinterpret_sign<const S2: bool>(self) -> FixedInt<BITS, WORDS, S2> {
        FixedInt::from_words(self.words)
    }

    /// Sign- or zero-extends into the wider alias with the same signedness.
    pub fn widen<const B2: u32, const W2: usize>(self) -> Result<FixedInt<B2, W2, SIGNED>> {
        FixedInt::try_from(self.to_int().widen(B2)?)
    }

    /// Truncates into the narrower alias with the same signedness.
    pub fn narrow<const B2: u32, const W2: usize>(self) -> Result<FixedInt<B2, W2, SIGNED>> {
        FixedInt::try_from(self.to_int().narrow(B2)?)
    }

    /// Conversion with `as` semantics to any other alias.
    pub fn cast<const B2: u32, const W2: usize, const S2: bool>(self) -> FixedInt<B2, W2, S2> {
        FixedInt::from_int(self.to_int().cast(FixedInt::<B2, W2, S2>::TYPE))
    }

    pub fn from_decimal_str(s: &str) -> Result<Self> {
        Int::from_decimal_str(s, Self::TYPE).map(Self::from_int)
    }

    pub fn from_hex_str(s: &str) -> Result<Self> {
        Int::from_hex_str(s, Self::TYPE).map(Self::from_int)
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_int().to_decimal_string()
    }

    pub fn to_hex_string(&self) -> String {
        self.to_int().to_hex_string()
    }

    pub fn to_str_radix(&self, radix: u32) -> String {
        self.to_int().to_str_radix(radix)
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.to_int().to_i32()
    }

    pub fn to_u32(&self) -> Result<u32> {
        self.to_int().to_u32()
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_int().to_i64()
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_int().to_u64()
    }

    pub fn to_i128(&self) -> Result<i128> {
        self.to_int().to_i128()
    }

    pub fn to_u128(&self) -> Result<u128> {
        self.to_int().to_u128()
    }

    pub fn low_u32(&self) -> u32 {
        self.words[0]
    }

    pub fn low_u64(&self) -> u64 {
        self.to_int().low_u64()
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Default
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Ord for FixedInt<BITS, WORDS, SIGNED> {
    fn cmp(&self, other: &Self) -> Ordering {
        if SIGNED {
            words::cmp_signed(&self.words, &other.words, BITS)
        } else {
            words::cmp_unsigned(&self.words, &other.words)
        }
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> PartialOrd
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> From<FixedInt<BITS, WORDS, SIGNED>>
    for Int
{
    fn from(value: FixedInt<BITS, WORDS, SIGNED>) -> Self {
        Int::from_fn(FixedInt::<BITS, WORDS, SIGNED>::TYPE, |i| value.words[i])
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> TryFrom<Int>
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Error = Error;

    fn try_from(value: Int) -> Result<Self> {
        Error::check_same(value.ty(), Self::TYPE)?;
        Ok(Self::from_int(value))
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> TryFrom<i64>
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Int::from_i64(value, Self::TYPE).map(Self::from_int)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> TryFrom<u64>
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Int::from_u64(value, Self::TYPE).map(Self::from_int)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> FromStr
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Int::parse(s, Self::TYPE).map(Self::from_int)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> fmt::Display
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_int(), f)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> fmt::Debug
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_int(), f)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> fmt::LowerHex
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_int(), f)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> fmt::UpperHex
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_int(), f)
    }
}

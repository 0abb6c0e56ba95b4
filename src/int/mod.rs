//! Runtime-typed fixed-width integers.
//!
//! An [`Int`] carries its [`IntType`] next to its words, so every binary
//! operation checks that both operands belong to the same member of the family
//! and fails with [`Error::TypeMismatch`] otherwise. Values are `Copy` and never
//! allocate: storage is sized for the widest type and the words past
//! `ty.word_count()` are kept at zero.

mod arith;
mod convert;
mod text;

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, WidthError};
use crate::ty::{IntType, MAX_WORDS};
use crate::words;

use text::IntRepr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "IntRepr", try_from = "IntRepr")]
pub struct Int {
    ty: IntType,
    words: [u32; MAX_WORDS],
}

impl Int {
    pub fn zero(ty: IntType) -> Self {
        Self {
            ty,
            words: [0; MAX_WORDS],
        }
    }

    pub fn one(ty: IntType) -> Self {
        let mut words = [0; MAX_WORDS];
        words[0] = 1;
        Self { ty, words }
    }

    /// Largest value: `2^w - 1` unsigned, `2^(w-1) - 1` signed.
    pub fn max_value(ty: IntType) -> Self {
        let mut value = Self::from_fn(ty, |_| u32::MAX);
        if ty.is_signed() {
            words::set_bit(value.words_mut(), ty.bits() - 1, false);
            value.canonicalize();
        }
        value
    }

    /// Smallest value: `0` unsigned, `-2^(w-1)` signed.
    pub fn min_value(ty: IntType) -> Self {
        let mut value = Self::zero(ty);
        if ty.is_signed() {
            words::set_bit(value.words_mut(), ty.bits() - 1, true);
            value.canonicalize();
        }
        value
    }

    /// Builds a value from raw words (least significant first) and reduces it
    /// to canonical form.
    pub fn from_words(words: &[u32], ty: IntType) -> Result<Self> {
        if words.len() != ty.word_count() {
            return Err(Error::InvalidWidth(WidthError::WordCount {
                expected: ty.word_count(),
                found: words.len(),
            }));
        }
        let mut value = Self::zero(ty);
        value.words_mut().copy_from_slice(words);
        value.canonicalize();
        Ok(value)
    }

    pub(crate) fn from_fn(ty: IntType, f: impl Fn(usize) -> u32) -> Self {
        let mut value = Self::zero(ty);
        for (i, w) in value.words_mut().iter_mut().enumerate() {
            *w = f(i);
        }
        value.canonicalize();
        value
    }

    pub fn ty(&self) -> IntType {
        self.ty
    }

    pub fn bits(&self) -> u32 {
        self.ty.bits()
    }

    pub fn is_signed(&self) -> bool {
        self.ty.is_signed()
    }

    /// Canonical words, least significant first; always `ceil(w/32)` long.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.ty.word_count()]
    }

    pub fn to_words(&self) -> Vec<u32> {
        self.words().to_vec()
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u32] {
        let n = self.ty.word_count();
        &mut self.words[..n]
    }

    pub(crate) fn canonicalize(&mut self) {
        let (bits, signed) = (self.ty.bits(), self.ty.is_signed());
        words::canonicalize(self.words_mut(), bits, signed);
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if index >= self.bits() {
            return Err(Error::IndexOutOfRange {
                index,
                bits: self.bits(),
            });
        }
        Ok(())
    }

    pub fn get_bit(&self, index: u32) -> Result<bool> {
        self.check_index(index)?;
        Ok(words::get_bit(self.words(), index))
    }

    pub fn set_bit(&self, index: u32) -> Result<Self> {
        self.with_bit(index, true)
    }

    pub fn clear_bit(&self, index: u32) -> Result<Self> {
        self.with_bit(index, false)
    }

    pub fn flip_bit(&self, index: u32) -> Result<Self> {
        let current = self.get_bit(index)?;
        self.with_bit(index, !current)
    }

    fn with_bit(&self, index: u32, value: bool) -> Result<Self> {
        self.check_index(index)?;
        let mut out = *self;
        words::set_bit(out.words_mut(), index, value);
        out.canonicalize();
        Ok(out)
    }

    pub fn is_zero(&self) -> bool {
        words::is_zero(self.words())
    }

    /// The top bit of a signed value; always `false` for unsigned types.
    pub fn sign_bit(&self) -> bool {
        self.is_signed() && words::get_bit(self.words(), self.bits() - 1)
    }

    pub fn is_negative(&self) -> bool {
        self.sign_bit()
    }

    pub fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn bit_length(&self) -> u32 {
        words::bit_length(self.words(), self.bits(), self.is_signed())
    }

    pub fn lowest_set_bit(&self) -> Option<u32> {
        words::lowest_set_bit(self.words())
    }

    pub fn count_ones(&self) -> u32 {
        words::count_ones(self.words(), self.bits())
    }

    /// Numeric order of two values of the same type.
    pub fn compare(&self, rhs: &Self) -> Result<Ordering> {
        Error::check_same(self.ty, rhs.ty)?;
        Ok(if self.is_signed() {
            words::cmp_signed(self.words(), rhs.words(), self.bits())
        } else {
            words::cmp_unsigned(self.words(), rhs.words())
        })
    }
}

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use num_traits::{Bounded, Num, One, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};

use crate::error::Error;
use crate::int::Int;
use crate::words;

use super::FixedInt;

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> FixedInt<BITS, WORDS, SIGNED> {
    fn div_or_panic(self, rhs: Self) -> (Self, Self) {
        match self.div_rem(rhs) {
            Ok(qr) => qr,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn quotient(self, rhs: Self) -> Self {
        self.div_or_panic(rhs).0
    }

    fn remainder(self, rhs: Self) -> Self {
        self.div_or_panic(rhs).1
    }

    fn bit_and(self, rhs: Self) -> Self {
        self.zip(rhs, words::and_assign)
    }

    fn bit_or(self, rhs: Self) -> Self {
        self.zip(rhs, words::or_assign)
    }

    fn bit_xor(self, rhs: Self) -> Self {
        self.zip(rhs, words::xor_assign)
    }
}

macro_rules! impl_binop {
    ($Op:ident $op:ident $OpAssign:ident $op_assign:ident => $method:ident) => {
        impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> $Op
            for FixedInt<BITS, WORDS, SIGNED>
        {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                self.$method(rhs)
            }
        }

        impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> $OpAssign
            for FixedInt<BITS, WORDS, SIGNED>
        {
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.$method(rhs);
            }
        }
    };
}

impl_binop!(Add add AddAssign add_assign => wrapping_add);
impl_binop!(Sub sub SubAssign sub_assign => wrapping_sub);
impl_binop!(Mul mul MulAssign mul_assign => wrapping_mul);
impl_binop!(Div div DivAssign div_assign => quotient);
impl_binop!(Rem rem RemAssign rem_assign => remainder);
impl_binop!(BitAnd bitand BitAndAssign bitand_assign => bit_and);
impl_binop!(BitOr bitor BitOrAssign bitor_assign => bit_or);
impl_binop!(BitXor bitxor BitXorAssign bitxor_assign => bit_xor);

/// Amounts of `BITS` or more give zero.
impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Shl<u32>
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        if n >= BITS {
            return Self::ZERO;
        }
        self.map(|w| words::shl_assign(w, n))
    }
}

/// Logical for unsigned, arithmetic for signed; amounts of `BITS` or more give
/// the fill word.
impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Shr<u32>
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        let fill = self.fill();
        if n >= BITS {
            return Self::from_words([fill; WORDS]);
        }
        self.map(|w| words::shr_assign(w, n, fill))
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> ShlAssign<u32>
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn shl_assign(&mut self, n: u32) {
        *self = *self << n;
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> ShrAssign<u32>
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn shr_assign(&mut self, n: u32) {
        *self = *self >> n;
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Not
    for FixedInt<BITS, WORDS, SIGNED>
{
    type Output = Self;

    fn not(self) -> Self {
        self.map(words::not_assign)
    }
}

impl<const BITS: u32, const WORDS: usize> Neg for FixedInt<BITS, WORDS, true> {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Zero
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> One
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn one() -> Self {
        Self::ONE
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Bounded
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> Num
    for FixedInt<BITS, WORDS, SIGNED>
{
    type FromStrRadixErr = Error;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        Int::from_str_radix(s, radix, Self::TYPE).map(Self::from_int)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> WrappingAdd
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn wrapping_add(&self, v: &Self) -> Self {
        Self::wrapping_add(*self, *v)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> WrappingSub
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn wrapping_sub(&self, v: &Self) -> Self {
        Self::wrapping_sub(*self, *v)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> WrappingMul
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn wrapping_mul(&self, v: &Self) -> Self {
        Self::wrapping_mul(*self, *v)
    }
}

impl<const BITS: u32, const WORDS: usize, const SIGNED: bool> WrappingNeg
    for FixedInt<BITS, WORDS, SIGNED>
{
    fn wrapping_neg(&self) -> Self {
        Self::wrapping_neg(*self)
    }
}

#[cfg(test)]
mod test {
    use num_bigint::{BigInt, BigUint, RandomBits, Sign};
    use num_traits::Signed;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::super::types::*;
    use super::*;

    fn wrap(bits: u32, signed: bool, v: &BigInt) -> BigInt {
        let modulus = BigInt::one().shl(bits);
        let mut r = ((v % &modulus) + &modulus) % &modulus;
        if signed && r >= BigInt::one().shl(bits - 1) {
            r -= modulus;
        }
        r
    }

    fn random<const B: u32, const W: usize, const S: bool>(
        prng: &mut ChaCha20Rng,
    ) -> FixedInt<B, W, S> {
        let raw: BigUint = prng.sample(RandomBits::new(B as u64));
        let raw = BigInt::from_biguint(Sign::Plus, raw);
        let value = Int::from_bigint_wrapping(&raw, FixedInt::<B, W, S>::TYPE);
        FixedInt::try_from(value).unwrap()
    }

    fn check_ops<const B: u32, const W: usize, const S: bool>(seed: u64) {
        let mut prng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..50 {
            let a: FixedInt<B, W, S> = random(&mut prng);
            let b: FixedInt<B, W, S> = random(&mut prng);
            let (x, y) = (a.to_bigint(), b.to_bigint());

            assert_eq!((a + b).to_bigint(), wrap(B, S, &(&x + &y)));
            assert_eq!((a - b).to_bigint(), wrap(B, S, &(&x - &y)));
            assert_eq!((a * b).to_bigint(), wrap(B, S, &(&x * &y)));
            assert_eq!(a.cmp(&b), x.cmp(&y));
            if !b.is_zero() {
                assert_eq!((a / b).to_bigint(), wrap(B, S, &(&x / &y)));
                assert_eq!((a % b).to_bigint(), &x % &y);
            }

            let n = prng.gen_range(0..B + 4);
            let expected = if n >= B { BigInt::zero() } else { wrap(B, S, &(&x << n)) };
            assert_eq!((a << n).to_bigint(), expected);
            let expected = match (n >= B, x.is_negative()) {
                (true, true) => -BigInt::one(),
                (true, false) => BigInt::zero(),
                _ => &x >> n,
            };
            assert_eq!((a >> n).to_bigint(), expected);
        }
    }

    #[test]
    fn test_ops_differential() {
        check_ops::<8, 1, false>(0);
        check_ops::<8, 1, true>(1);
        check_ops::<40, 2, true>(2);
        check_ops::<64, 2, false>(3);
        check_ops::<136, 5, true>(4);
        check_ops::<256, 8, false>(5);
        check_ops::<256, 8, true>(6);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(uint8::MAX + uint8::ONE, uint8::ZERO);
        assert_eq!(int8::MAX + int8::ONE, int8::MIN);
        assert_eq!(int8::MIN - int8::ONE, int8::MAX);
        assert_eq!(uint256::ZERO - uint256::ONE, uint256::MAX);
        assert_eq!(-int8::MIN, int8::MIN);
        assert_eq!(-int32::ONE, int32::try_from(-1i64).unwrap());
        assert_eq!(int8::MIN / -int8::ONE, int8::MIN);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = uint64::try_from(10u64).unwrap();
        v += uint64::ONE;
        v *= uint64::try_from(3u64).unwrap();
        v -= uint64::ONE;
        v /= uint64::try_from(4u64).unwrap();
        v %= uint64::try_from(5u64).unwrap();
        assert_eq!(v, uint64::try_from(3u64).unwrap());
        v <<= 63;
        v >>= 62;
        assert_eq!(v, uint64::try_from(2u64).unwrap());
        v |= uint64::ONE;
        v &= !uint64::try_from(2u64).unwrap();
        v ^= uint64::try_from(4u64).unwrap();
        assert_eq!(v, uint64::try_from(5u64).unwrap());
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(!uint40::ZERO, uint40::MAX);
        assert_eq!((!uint40::ZERO).words(), &[u32::MAX, 0xFF]);
        assert_eq!(!int40::ZERO, -int40::ONE);
        assert_eq!(int8::MIN >> 7, -int8::ONE);
        assert_eq!(uint8::MAX >> 7, uint8::ONE);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = uint128::ONE / uint128::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_rem_by_zero_panics() {
        let _ = int16::ONE % int16::ZERO;
    }

    fn sum<T: Zero + Copy + Add<Output = T>>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    #[test]
    fn test_num_traits() {
        let values = [uint16::ONE, uint16::MAX, uint16::ONE];
        assert_eq!(sum(&values), uint16::ONE);
        assert_eq!(<int24 as Bounded>::min_value(), int24::MIN);
        assert_eq!(<int24 as One>::one(), int24::ONE);
        assert_eq!(
            <uint32 as Num>::from_str_radix("ff", 16).unwrap(),
            uint32::try_from(255u64).unwrap()
        );
        assert!(<uint8 as Num>::from_str_radix("100", 16).is_err());
        assert_eq!(WrappingAdd::wrapping_add(&uint8::MAX, &uint8::ONE), uint8::ZERO);
        assert_eq!(WrappingNeg::wrapping_neg(&uint8::ONE), uint8::MAX);
        assert_eq!(WrappingMul::wrapping_mul(&int8::MIN, &(-int8::ONE)), int8::MIN);
        assert_eq!(WrappingSub::wrapping_sub(&int8::MIN, &int8::ONE), int8::MAX);
    }

    #[test]
    fn test_routed_arithmetic() {
        let v = uint16::try_from(0xF0u64).unwrap();
        assert_eq!(v.inc().to_u64(), Ok(0xF1));
        assert_eq!(uint16::ZERO.dec(), uint16::MAX);
        assert_eq!(int8::MAX.inc(), int8::MIN);
        assert_eq!(int8::MIN.compare(&int8::ONE), core::cmp::Ordering::Less);
        assert_eq!(uint8::MAX.compare(&uint8::ONE), core::cmp::Ordering::Greater);

        assert_eq!(v.shl(4).unwrap().to_u64(), Ok(0xF00));
        assert_eq!(v.shr(100).unwrap(), uint16::ZERO);
        assert_eq!(v.shl(-1), Err(Error::InvalidShiftAmount(-1)));
        assert_eq!(v.shr(-7), Err(Error::InvalidShiftAmount(-7)));
        assert_eq!(int8::MIN.shr(3).unwrap().to_i64(), Ok(-16));

        let m = uint16::try_from(1000u64).unwrap();
        assert_eq!(uint16::MAX.add_mod(uint16::MAX, m).unwrap().to_u64(), Ok(131_070 % 1000));
        assert_eq!(
            uint16::MAX.mul_mod(uint16::MAX, m).unwrap().to_u64(),
            Ok(65_535u64 * 65_535 % 1000)
        );
        assert_eq!(uint16::ONE.add_mod(uint16::ONE, uint16::ZERO), Err(Error::DivisionByZero));
        assert!(matches!(
            int16::ONE.mul_mod(int16::ONE, int16::ONE),
            Err(Error::RequiresUnsigned { .. })
        ));
    }

    #[test]
    fn test_bit_access() {
        let v = uint40::ZERO.set_bit(39).unwrap();
        assert!(v.get_bit(39).unwrap());
        assert!(!v.get_bit(38).unwrap());
        assert_eq!(v.lowest_set_bit(), Some(39));
        assert_eq!(v.flip_bit(0).unwrap().lowest_set_bit(), Some(0));
        assert_eq!(v.clear_bit(39).unwrap(), uint40::ZERO);
        assert_eq!(uint40::ZERO.lowest_set_bit(), None);
        assert_eq!(
            v.get_bit(40),
            Err(Error::IndexOutOfRange { index: 40, bits: 40 })
        );
        assert!(int8::MIN.sign_bit());
        assert!(!uint8::MAX.sign_bit());
        assert_eq!(int8::ZERO.set_bit(7).unwrap(), int8::MIN);
    }

    #[test]
    fn test_width_and_sign() {
        let minus_one = -int8::ONE;
        assert_eq!(minus_one.reinterpret_sign::<false>(), uint8::MAX);
        assert_eq!(int8::MIN.reinterpret_sign::<false>().to_u64(), Ok(128));
        assert_eq!(uint8::MAX.reinterpret_sign::<true>(), minus_one);

        let wide: int64 = minus_one.widen().unwrap();
        assert_eq!(wide, -int64::ONE);
        let back: int8 = wide.narrow().unwrap();
        assert_eq!(back, minus_one);
        let truncated: uint8 = uint16::try_from(300u64).unwrap().narrow().unwrap();
        assert_eq!(truncated.to_u64(), Ok(44));
        assert!(matches!(int64::ONE.widen::<8, 1>(), Err(Error::InvalidWidth(_))));
        assert!(matches!(int8::ONE.narrow::<64, 2>(), Err(Error::InvalidWidth(_))));

        let c: uint32 = minus_one.cast();
        assert_eq!(c, uint32::MAX);
        let c: int8 = uint16::try_from(0x1FFu64).unwrap().cast();
        assert_eq!(c, minus_one);
        let c: int256 = uint8::MAX.cast();
        assert_eq!(c.to_i64(), Ok(255));
    }

    #[test]
    fn test_text_and_natives() {
        assert_eq!(int8::MIN.to_hex_string(), "-0x80");
        assert_eq!(int8::MIN.to_decimal_string(), "-128");
        assert_eq!(int8::from_hex_str("-0x80"), Ok(int8::MIN));
        assert_eq!(
            int8::from_hex_str("0xff"),
            Err(Error::ValueOutOfRange { ty: int8::TYPE })
        );
        assert_eq!(uint256::from_decimal_str("0"), Ok(uint256::ZERO));
        assert!(matches!(uint256::from_decimal_str("1x"), Err(Error::ParseError { .. })));
        assert_eq!(uint16::MAX.to_str_radix(16), "ffff");

        assert_eq!(int128::MIN.to_i128(), Ok(i128::MIN));
        assert!(int128::MIN.to_i64().is_err());
        assert_eq!((-int16::ONE).to_i32(), Ok(-1));
        assert!((-int16::ONE).to_u32().is_err());
        assert_eq!(uint64::MAX.to_u64(), Ok(u64::MAX));
        assert_eq!(uint64::MAX.to_u128(), Ok(u64::MAX as u128));
        assert_eq!(uint256::MAX.low_u64(), u64::MAX);
        assert_eq!(uint256::MAX.low_u32(), u32::MAX);
    }
}

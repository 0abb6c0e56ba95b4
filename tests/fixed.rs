#[cfg(test)]
mod test {
    use fixint::{int128, int24, uint256, uint40, Error, Int};
    use num_bigint::{BigInt, BigUint, RandomBits};
    use num_traits::{One, WrappingAdd, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_uint256_against_bigint() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let modulus = BigInt::one() << 256u32;

        for _ in 0..100 {
            let x: BigUint = prng.sample(RandomBits::new(256));
            let y: BigUint = prng.sample(RandomBits::new(256));
            let a: uint256 = x.to_string().parse().unwrap();
            let b: uint256 = y.to_string().parse().unwrap();
            let (x, y) = (BigInt::from(x), BigInt::from(y));

            assert_eq!((a + b).to_bigint(), (&x + &y) % &modulus);
            assert_eq!((a * b).to_bigint(), (&x * &y) % &modulus);
            assert_eq!(WrappingAdd::wrapping_add(&a, &b), a + b);
            assert_eq!(a.cmp(&b), x.cmp(&y));
            if !y.is_zero() {
                assert_eq!((a / b).to_bigint(), &x / &y);
                assert_eq!((a % b).to_bigint(), &x % &y);
            }
        }
    }

    #[test]
    fn test_odd_widths() {
        assert_eq!(uint40::MAX.to_string(), "1099511627775");
        assert_eq!(uint40::MAX + uint40::ONE, uint40::ZERO);
        assert_eq!(int24::MIN.to_string(), "-8388608");
        assert_eq!(-int24::MIN, int24::MIN);
        assert_eq!(int24::try_from(-8_388_609i64), Err(Error::ValueOutOfRange { ty: int24::TYPE }));
        assert_eq!(format!("{:x}", int24::try_from(-1i64).unwrap()), "ffffff");
    }

    #[test]
    fn test_dynamic_round_trip() {
        let v = int128::try_from(i64::MIN).unwrap() * int128::try_from(2i64).unwrap();
        let dynamic: Int = v.into();
        assert_eq!(dynamic.ty(), int128::TYPE);
        assert_eq!(dynamic.to_i128(), Ok(2 * i64::MIN as i128));
        assert_eq!(int128::try_from(dynamic), Ok(v));
        assert!(uint256::try_from(dynamic).is_err());
    }
}

//! In-process conformance suite.
//!
//! Runs the algebraic properties of the family over random and boundary operands
//! and checks every operation against a `num-bigint` reference. Nothing here
//! panics on a broken property: each failure is recorded with its operands so a
//! single run reports everything that is wrong.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::{BigInt, BigUint, RandomBits};
use num_traits::{One, Signed, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ty::{IntType, SUPPORTED_WIDTHS};

#[derive(Debug, Clone)]
pub struct Options {
    pub seed: u64,
    /// Random operand triples drawn per type.
    pub iterations: usize,
    pub types: Vec<IntType>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 100,
            types: IntType::all().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    pub ty: IntType,
    pub passed: usize,
    pub failures: Vec<String>,
}

impl TypeReport {
    fn new(ty: IntType) -> Self {
        Self {
            ty,
            passed: 0,
            failures: Vec::new(),
        }
    }

    fn record(&mut self, property: &str, operands: &[&Int], outcome: Result<bool>) {
        let message = match outcome {
            Ok(true) => {
                self.passed += 1;
                return;
            }
            Ok(false) => format!("{property} does not hold for {}", Operands(operands)),
            Err(err) => format!("{property} failed with `{err}` for {}", Operands(operands)),
        };
        log::debug!("{}: {}", self.ty, message);
        self.failures.push(message);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub types: Vec<TypeReport>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.types.iter().all(TypeReport::is_success)
    }

    pub fn passed(&self) -> usize {
        self.types.iter().map(|t| t.passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.types.iter().map(|t| t.failures.len()).sum()
    }
}

struct Operands<'a>(&'a [&'a Int]);

impl fmt::Display for Operands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "constants");
        }
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{op:?}")?;
        }
        Ok(())
    }
}

pub fn run(options: &Options) -> Report {
    let mut prng = ChaCha20Rng::seed_from_u64(options.seed);
    let types = options
        .types
        .iter()
        .map(|&ty| check_type(ty, options.iterations, &mut prng))
        .collect();
    Report { types }
}

fn check_type(ty: IntType, iterations: usize, prng: &mut ChaCha20Rng) -> TypeReport {
    let mut report = TypeReport::new(ty);
    check_constants(&mut report, ty);

    for _ in 0..iterations {
        let a = sample(prng, ty);
        let b = sample(prng, ty);
        let c = sample(prng, ty);
        let shift = prng.gen_range(0..ty.bits() + 8);

        report.record("commutativity", &[&a, &b], commutative(&a, &b));
        report.record("associativity", &[&a, &b, &c], associative(&a, &b, &c));
        report.record("identity elements", &[&a], identities(&a));
        report.record("division identity", &[&a, &b], division_identity(&a, &b));
        report.record("widen/narrow round trip", &[&a], widen_narrow(&a));
        report.record("text round trip", &[&a], text_roundtrip(&a));
        report.record("reference arithmetic", &[&a, &b], reference_arithmetic(&a, &b));
        report.record("reference shifts", &[&a], reference_shifts(&a, shift));
    }

    log::info!(
        "{}: {} checks passed, {} failed",
        ty,
        report.passed,
        report.failures.len()
    );
    report
}

/// Boundary operands are drawn often enough that every run exercises them.
fn sample(prng: &mut ChaCha20Rng, ty: IntType) -> Int {
    match prng.gen_range(0..8) {
        0 => Int::zero(ty),
        1 => Int::one(ty),
        2 => Int::max_value(ty),
        3 => Int::min_value(ty),
        4 => Int::one(ty).neg(),
        _ => {
            let raw: BigUint = prng.sample(RandomBits::new(ty.bits() as u64));
            Int::from_bigint_wrapping(&raw.into(), ty)
        }
    }
}

/// `v` reduced into the value range of `ty`.
fn wrap(ty: IntType, v: &BigInt) -> BigInt {
    let modulus = BigInt::one() << ty.bits();
    let mut r = ((v % &modulus) + &modulus) % &modulus;
    if ty.is_signed() && r >= BigInt::one() << (ty.bits() - 1) {
        r -= modulus;
    }
    r
}

fn check_constants(report: &mut TypeReport, ty: IntType) {
    let (zero, one) = (Int::zero(ty), Int::one(ty));
    let (min, max) = (Int::min_value(ty), Int::max_value(ty));

    report.record(
        "word count",
        &[],
        Ok([zero, one, min, max]
            .iter()
            .all(|v| v.words().len() == ty.bits().div_ceil(32) as usize)),
    );
    report.record("wraparound", &[&max], max.add(&one).map(|v| v == min));
    report.record("wraparound", &[&min], min.sub(&one).map(|v| v == max));

    let above = (max.to_bigint() + 1u32).to_string();
    let below = (min.to_bigint() - 1u32).to_string();
    report.record(
        "strict parsing",
        &[&max],
        Ok(Int::from_decimal_str(&max.to_decimal_string(), ty) == Ok(max)
            && Int::from_decimal_str(&above, ty) == Err(Error::ValueOutOfRange { ty })
            && Int::from_decimal_str(&below, ty) == Err(Error::ValueOutOfRange { ty })),
    );

    let minus_one = one.neg();
    let expected = if ty.is_signed() {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    report.record(
        "sign-aware comparison",
        &[&minus_one, &one],
        minus_one.compare(&one).map(|o| o == expected),
    );
}

fn commutative(a: &Int, b: &Int) -> Result<bool> {
    Ok(a.add(b)? == b.add(a)? && a.mul(b)? == b.mul(a)?)
}

fn associative(a: &Int, b: &Int, c: &Int) -> Result<bool> {
    Ok(a.add(b)?.add(c)? == a.add(&b.add(c)?)? && a.mul(b)?.mul(c)? == a.mul(&b.mul(c)?)?)
}

fn identities(a: &Int) -> Result<bool> {
    let (zero, one) = (Int::zero(a.ty()), Int::one(a.ty()));
    Ok(a.add(&zero)? == *a && a.mul(&zero)? == zero && a.mul(&one)? == *a)
}

fn division_identity(a: &Int, b: &Int) -> Result<bool> {
    if b.is_zero() {
        return Ok(a.div_rem(b) == Err(Error::DivisionByZero));
    }
    let (q, r) = a.div_rem(b)?;
    Ok(q.mul(b)?.add(&r)? == *a && r.to_bigint().abs() < b.to_bigint().abs())
}

fn widen_narrow(a: &Int) -> Result<bool> {
    for bits in SUPPORTED_WIDTHS.into_iter().filter(|&w| w >= a.bits()) {
        if a.widen(bits)?.narrow(a.bits())? != *a {
            return Ok(false);
        }
    }
    Ok(true)
}

fn text_roundtrip(a: &Int) -> Result<bool> {
    let ty = a.ty();
    Ok(Int::from_decimal_str(&a.to_decimal_string(), ty)? == *a
        && Int::from_hex_str(&a.to_hex_string(), ty)? == *a
        && Int::from_be_bytes(&a.to_be_bytes(), ty)? == *a
        && a.to_decimal_string() == a.to_bigint().to_string())
}

fn reference_arithmetic(a: &Int, b: &Int) -> Result<bool> {
    let ty = a.ty();
    let (x, y) = (a.to_bigint(), b.to_bigint());

    let mut ok = a.add(b)?.to_bigint() == wrap(ty, &(&x + &y))
        && a.sub(b)?.to_bigint() == wrap(ty, &(&x - &y))
        && a.mul(b)?.to_bigint() == wrap(ty, &(&x * &y))
        && a.compare(b)? == x.cmp(&y)
        && a.and(b)?.xor(a)? == a.and(&b.not())?
        && a.or(b)?.not() == a.not().and(&b.not())?;
    if !y.is_zero() {
        let (q, r) = a.div_rem(b)?;
        ok = ok && q.to_bigint() == wrap(ty, &(&x / &y)) && r.to_bigint() == &x % &y;
    }
    Ok(ok)
}

fn reference_shifts(a: &Int, n: u32) -> Result<bool> {
    let ty = a.ty();
    let x = a.to_bigint();
    let (shl, shr) = if n >= ty.bits() {
        let fill = if x.is_negative() {
            -BigInt::one()
        } else {
            BigInt::zero()
        };
        (BigInt::zero(), fill)
    } else {
        (wrap(ty, &(&x << n)), &x >> n)
    };
    Ok(a.shl(n.into())?.to_bigint() == shl && a.shr(n.into())?.to_bigint() == shr)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_run_all_types() {
        let report = run(&Options {
            seed: 7,
            iterations: 10,
            ..Options::default()
        });
        assert_eq!(report.types.len(), 64);
        let failures: Vec<_> = report.types.iter().flat_map(|t| &t.failures).collect();
        assert!(report.is_success(), "{failures:?}");
        assert_eq!(report.failed(), 0);
        assert!(report.passed() > 64 * 10 * 8);
    }

    #[test]
    fn test_selected_types() {
        let types = vec![IntType::signed(8).unwrap(), IntType::unsigned(256).unwrap()];
        let report = run(&Options {
            seed: 1,
            iterations: 50,
            types: types.clone(),
        });
        assert_eq!(report.types.iter().map(|t| t.ty).collect::<Vec<_>>(), types);
        assert!(report.is_success());
    }

    #[test]
    fn test_failures_are_recorded() {
        let ty = IntType::unsigned(8).unwrap();
        let mut report = TypeReport::new(ty);
        let one = Int::one(ty);
        report.record("always true", &[&one], Ok(true));
        report.record("always false", &[&one], Ok(false));
        report.record("erroring", &[&one, &one], Err(Error::DivisionByZero));
        assert_eq!(report.passed, 1);
        assert_eq!(
            report.failures,
            vec![
                "always false does not hold for uint8(1)".to_owned(),
                "erroring failed with `division by zero` for uint8(1), uint8(1)".to_owned(),
            ]
        );
        assert!(!report.is_success());
    }

    #[test]
    fn test_wrap_reference() {
        let ty = IntType::signed(8).unwrap();
        assert_eq!(wrap(ty, &BigInt::from(128)), BigInt::from(-128));
        assert_eq!(wrap(ty, &BigInt::from(-129)), BigInt::from(127));
        let ty = IntType::unsigned(8).unwrap();
        assert_eq!(wrap(ty, &BigInt::from(-1)), BigInt::from(255));
    }
}

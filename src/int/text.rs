use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ty::{IntType, MAX_WORDS};
use crate::words;

use super::Int;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Parsing. Malformed input is always reported as [`Error::ParseError`], even
/// when the digits seen so far have already overflowed the type.
impl Int {
    pub fn from_decimal_str(s: &str, ty: IntType) -> Result<Self> {
        Self::from_str_radix(s, 10, ty)
    }

    /// Optional sign, optional `0x`, then the hex digits of the magnitude.
    pub fn from_hex_str(s: &str, ty: IntType) -> Result<Self> {
        let (negative, body) = split_sign(s);
        let digits = strip_hex_prefix(body).unwrap_or(body);
        if digits.is_empty() {
            return Err(Error::parse(s, "no digits"));
        }

        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{digits}");
            padded.as_str()
        } else {
            digits
        };
        let bytes = hex::decode(digits).map_err(|_| Error::parse(s, "invalid hex digit"))?;
        let significant = bytes.iter().skip_while(|&&b| b == 0).count();

        let mut mag = [0u32; MAX_WORDS];
        let overflow = significant > 4 * MAX_WORDS;
        if !overflow {
            for (i, &b) in bytes.iter().rev().take(significant).enumerate() {
                mag[i / 4] |= (b as u32) << (8 * (i % 4));
            }
        }
        Self::from_magnitude(&mag, overflow, negative, ty)
    }

    pub fn from_str_radix(s: &str, radix: u32, ty: IntType) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::parse(s, "radix must be in 2..=36"));
        }
        let (negative, digits) = split_sign(s);
        if digits.is_empty() {
            return Err(Error::parse(s, "no digits"));
        }

        let mut mag = [0u32; MAX_WORDS];
        let mut overflow = false;
        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or_else(|| Error::parse(s, "invalid digit"))?;
            if !overflow {
                overflow = words::mul_add_word(&mut mag, radix, d);
            }
        }
        Self::from_magnitude(&mag, overflow, negative, ty)
    }

    /// Decimal, or hex when the digits start with `0x`.
    pub fn parse(s: &str, ty: IntType) -> Result<Self> {
        let (_, body) = split_sign(s);
        if strip_hex_prefix(body).is_some() {
            Self::from_hex_str(s, ty)
        } else {
            Self::from_decimal_str(s, ty)
        }
    }

    fn from_magnitude(
        mag: &[u32; MAX_WORDS],
        overflow: bool,
        negative: bool,
        ty: IntType,
    ) -> Result<Self> {
        let bits = ty.bits();
        let fits = !overflow
            && match words::highest_set_bit(mag) {
                None => true,
                // -2^(w-1) is the one magnitude with bit w-1 set that still fits.
                Some(top) if ty.is_signed() => {
                    top < bits - 1
                        || (negative && top == bits - 1 && words::lowest_set_bit(mag) == Some(top))
                }
                Some(top) => !negative && top < bits,
            };
        if !fits {
            return Err(Error::ValueOutOfRange { ty });
        }

        let mut out = Int::zero(ty);
        out.words_mut().copy_from_slice(&mag[..ty.word_count()]);
        if negative {
            words::negate(out.words_mut());
        }
        out.canonicalize();
        Ok(out)
    }
}

/// Formatting. Output never carries leading zeros; `-` marks negative signed values.
impl Int {
    pub fn to_decimal_string(&self) -> String {
        self.to_str_radix(10)
    }

    /// `0x` followed by the hex digits of the magnitude, e.g. `-0x80` for `int8::MIN`.
    pub fn to_hex_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}0x{}", Self::hex_digits(&self.magnitude_be_bytes()))
    }

    /// A radix outside `2..=36` formats in decimal.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let radix = if (2..=36).contains(&radix) { radix } else { 10 };
        let digits = self.magnitude_digits(radix);
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }

    fn magnitude_digits(&self, radix: u32) -> String {
        let n = self.ty.word_count();
        let mut mag = self.magnitude();
        let mag = &mut mag[..n];

        let mut digits = Vec::new();
        loop {
            let d = words::div_word_assign(mag, radix);
            digits.push(DIGITS[d as usize]);
            if words::is_zero(mag) {
                break;
            }
        }
        digits.iter().rev().map(|&b| b as char).collect()
    }

    fn magnitude_be_bytes(&self) -> Vec<u8> {
        let n = self.ty.word_count();
        self.magnitude()[..n]
            .iter()
            .rev()
            .flat_map(|w| w.to_be_bytes())
            .collect()
    }

    fn hex_digits(bytes: &[u8]) -> String {
        let encoded = hex::encode(bytes);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    }

    /// Hex digits of the two's-complement bit pattern.
    fn raw_hex_digits(&self) -> String {
        let raw = if self.is_signed() {
            self.reinterpret_sign()
        } else {
            *self
        };
        Self::hex_digits(&raw.magnitude_be_bytes())
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10))
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.ty, self)
    }
}

/// The raw bit pattern, like the primitive integers: `{:x}` of `int8(-1)` is `ff`.
impl fmt::LowerHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.raw_hex_digits())
    }
}

impl fmt::UpperHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.raw_hex_digits().to_uppercase())
    }
}

/// Serialized form: `{ "type": "int8", "value": "-128" }`.
#[derive(Serialize, Deserialize)]
pub(super) struct IntRepr {
    #[serde(rename = "type")]
    ty: IntType,
    value: String,
}

impl From<Int> for IntRepr {
    fn from(value: Int) -> Self {
        IntRepr {
            ty: value.ty,
            value: value.to_decimal_string(),
        }
    }
}

impl TryFrom<IntRepr> for Int {
    type Error = Error;

    fn try_from(repr: IntRepr) -> Result<Self> {
        Int::parse(&repr.value, repr.ty)
    }
}

#[cfg(test)]
mod test {
    use num_bigint::{BigInt, BigUint, RandomBits};
    use num_traits::Num;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    fn ty(name: &str) -> IntType {
        name.parse().unwrap()
    }

    fn out_of_range(t: &str) -> Error {
        Error::ValueOutOfRange { ty: ty(t) }
    }

    #[test]
    fn test_parse_decimal_strict() {
        let t = ty("uint8");
        assert_eq!(Int::from_decimal_str("255", t).unwrap(), Int::max_value(t));
        assert_eq!(Int::from_decimal_str("256", t), Err(out_of_range("uint8")));
        assert_eq!(Int::from_decimal_str("-1", t), Err(out_of_range("uint8")));
        assert!(Int::from_decimal_str("-0", t).unwrap().is_zero());
        assert_eq!(Int::from_decimal_str("+7", t).unwrap().to_u64().unwrap(), 7);
        assert_eq!(Int::from_decimal_str("007", t).unwrap().to_u64().unwrap(), 7);

        let s = ty("int8");
        assert_eq!(Int::from_decimal_str("-128", s).unwrap(), Int::min_value(s));
        assert_eq!(Int::from_decimal_str("127", s).unwrap(), Int::max_value(s));
        assert_eq!(Int::from_decimal_str("128", s), Err(out_of_range("int8")));
        assert_eq!(Int::from_decimal_str("-129", s), Err(out_of_range("int8")));
    }

    #[test]
    fn test_parse_malformed() {
        let t = ty("uint256");
        for bad in ["", "-", "+", "12a", " 1", "1 ", "--1", "1_000", "0x"] {
            assert!(
                matches!(Int::from_decimal_str(bad, t), Err(Error::ParseError { .. })),
                "{bad:?}"
            );
        }
        let huge = "9".repeat(100);
        assert_eq!(Int::from_decimal_str(&huge, t), Err(out_of_range("uint256")));
        let malformed = format!("{huge}x");
        assert!(matches!(
            Int::from_decimal_str(&malformed, t),
            Err(Error::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_hex() {
        let t = ty("int8");
        assert_eq!(Int::from_hex_str("0x7f", t).unwrap(), Int::max_value(t));
        assert_eq!(Int::from_hex_str("-0x80", t).unwrap(), Int::min_value(t));
        assert_eq!(Int::from_hex_str("0xff", t), Err(out_of_range("int8")));
        assert_eq!(Int::from_hex_str("7F", t).unwrap(), Int::max_value(t));

        let u = ty("uint256");
        let max = format!("0x{}", "f".repeat(64));
        assert_eq!(Int::from_hex_str(&max, u).unwrap(), Int::max_value(u));
        let padded = format!("0x0000{}", "F".repeat(64));
        assert_eq!(Int::from_hex_str(&padded, u).unwrap(), Int::max_value(u));
        let over = format!("0x1{}", "0".repeat(64));
        assert_eq!(Int::from_hex_str(&over, u), Err(out_of_range("uint256")));
        assert_eq!(Int::from_hex_str("0xabc", ty("uint16")).unwrap().to_u64().unwrap(), 0xabc);

        assert!(matches!(Int::from_hex_str("0x", u), Err(Error::ParseError { .. })));
        assert!(matches!(Int::from_hex_str("0xg1", u), Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_parse_dispatch() {
        let t = ty("int16");
        assert_eq!(Int::parse("-0x10", t).unwrap().to_i64().unwrap(), -16);
        assert_eq!(Int::parse("-10", t).unwrap().to_i64().unwrap(), -10);
        assert_eq!(Int::parse("0X10", t).unwrap().to_i64().unwrap(), 16);
    }

    #[test]
    fn test_radix() {
        let t = ty("uint64");
        assert_eq!(Int::from_str_radix("zz", 36, t).unwrap().to_u64().unwrap(), 35 * 36 + 35);
        assert_eq!(Int::from_str_radix("1010", 2, t).unwrap().to_u64().unwrap(), 10);
        assert!(matches!(Int::from_str_radix("2", 2, t), Err(Error::ParseError { .. })));
        assert!(matches!(Int::from_str_radix("1", 37, t), Err(Error::ParseError { .. })));
        assert_eq!(Int::from_u64(255, t).unwrap().to_str_radix(2), "11111111");
        assert_eq!(Int::from_i64(-35, ty("int8")).unwrap().to_str_radix(36), "-z");
        assert_eq!(Int::from_i64(-35, ty("int8")).unwrap().to_str_radix(1), "-35");
        assert_eq!(Int::from_u64(255, t).unwrap().to_str_radix(37), "255");
        assert_eq!(Int::from_u64(255, t).unwrap().to_str_radix(0), "255");
    }

    #[test]
    fn test_format() {
        let t = ty("int256");
        assert_eq!(
            Int::min_value(t).to_decimal_string(),
            "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
        );
        assert_eq!(Int::zero(t).to_decimal_string(), "0");
        assert_eq!(Int::zero(t).to_hex_string(), "0x0");

        let v = Int::from_i64(-1, ty("int8")).unwrap();
        assert_eq!(v.to_hex_string(), "-0x1");
        assert_eq!(Int::min_value(ty("int8")).to_hex_string(), "-0x80");
        assert_eq!(format!("{v:x}"), "ff");
        assert_eq!(format!("{v:#x}"), "0xff");
        assert_eq!(format!("{v:X}"), "FF");
        assert_eq!(format!("{v}"), "-1");
        assert_eq!(format!("{v:?}"), "int8(-1)");
        assert_eq!(format!("{v:>4}"), "  -1");

        let u = Int::from_u64(15, ty("uint8")).unwrap();
        assert_eq!(format!("{u:#06x}"), "0x000f");
        assert_eq!(format!("{u:+}"), "+15");
        assert_eq!(format!("{:x}", Int::from_i64(-2, ty("int40")).unwrap()), "fffffffffe");
    }

    #[test]
    fn test_text_roundtrip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for t in IntType::all() {
            for _ in 0..5 {
                let raw: BigUint = prng.sample(RandomBits::new(t.bits() as u64));
                let v = Int::from_bigint_wrapping(&raw.into(), t);
                let dec = v.to_decimal_string();
                assert_eq!(dec, v.to_bigint().to_string(), "{t}");
                assert_eq!(Int::from_decimal_str(&dec, t).unwrap(), v, "{t}");
                assert_eq!(Int::from_hex_str(&v.to_hex_string(), t).unwrap(), v, "{t}");
                let b36 = v.to_str_radix(36);
                assert_eq!(BigInt::from_str_radix(&b36, 36).unwrap(), v.to_bigint(), "{t}");
                assert_eq!(Int::from_str_radix(&b36, 36, t).unwrap(), v, "{t}");
            }
        }
    }

    #[test]
    fn test_serde() {
        let v = Int::min_value(ty("int8"));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"type":"int8","value":"-128"}"#);
        assert_eq!(serde_json::from_str::<Int>(&json).unwrap(), v);

        let hex: Int = serde_json::from_str(r#"{"type":"uint16","value":"0xffff"}"#).unwrap();
        assert_eq!(hex, Int::max_value(ty("uint16")));
        assert!(serde_json::from_str::<Int>(r#"{"type":"uint8","value":"300"}"#).is_err());
        assert!(serde_json::from_str::<Int>(r#"{"type":"uint12","value":"3"}"#).is_err());
    }
}

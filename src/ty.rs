use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::{Error, Result, WidthError};

/// Size of one storage word in bits.
pub const WORD_BITS: u32 = 32;

/// Narrowest supported width.
pub const MIN_BITS: u32 = 8;

/// Widest supported width.
pub const MAX_BITS: u32 = 256;

/// Word count of the widest supported width.
pub const MAX_WORDS: usize = word_count(MAX_BITS);

/// Every supported width, ascending.
pub const SUPPORTED_WIDTHS: [u32; 32] = {
    let mut widths = [0u32; 32];
    let mut i = 0;
    while i < 32 {
        widths[i] = (i as u32 + 1) * 8;
        i += 1;
    }
    widths
};

/// Number of 32-bit words needed to hold `bits` bits.
pub const fn word_count(bits: u32) -> usize {
    bits.div_ceil(WORD_BITS) as usize
}

pub const fn is_supported_width(bits: u32) -> bool {
    bits >= MIN_BITS && bits <= MAX_BITS && bits % 8 == 0
}

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    #[strum(serialize = "unsigned")]
    Unsigned,
    #[strum(serialize = "signed")]
    Signed,
}

impl Signedness {
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }

    pub const fn flip(self) -> Self {
        match self {
            Signedness::Signed => Signedness::Unsigned,
            Signedness::Unsigned => Signedness::Signed,
        }
    }

    /// Type-name prefix: `int` or `uint`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Signedness::Signed => "int",
            Signedness::Unsigned => "uint",
        }
    }
}

/// One member of the width x signedness family, e.g. `uint256` or `int8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IntType {
    bits: u32,
    signedness: Signedness,
}

impl IntType {
    pub fn new(bits: u32, signedness: Signedness) -> Result<Self> {
        if !is_supported_width(bits) {
            return Err(Error::InvalidWidth(WidthError::Unsupported(bits)));
        }
        Ok(Self { bits, signedness })
    }

    pub fn signed(bits: u32) -> Result<Self> {
        Self::new(bits, Signedness::Signed)
    }

    pub fn unsigned(bits: u32) -> Result<Self> {
        Self::new(bits, Signedness::Unsigned)
    }

    /// Caller guarantees `bits` is a supported width.
    pub(crate) const fn new_unchecked(bits: u32, signedness: Signedness) -> Self {
        Self { bits, signedness }
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    pub const fn signedness(self) -> Signedness {
        self.signedness
    }

    pub const fn is_signed(self) -> bool {
        self.signedness.is_signed()
    }

    pub const fn word_count(self) -> usize {
        word_count(self.bits)
    }

    pub const fn byte_count(self) -> usize {
        (self.bits / 8) as usize
    }

    /// Same width, opposite signedness.
    pub const fn flip_sign(self) -> Self {
        Self {
            bits: self.bits,
            signedness: self.signedness.flip(),
        }
    }

    pub fn with_bits(self, bits: u32) -> Result<Self> {
        Self::new(bits, self.signedness)
    }

    /// All 64 members of the family, unsigned types first, each ascending by width.
    pub fn all() -> impl Iterator<Item = IntType> {
        Signedness::iter().flat_map(|signedness| {
            SUPPORTED_WIDTHS
                .into_iter()
                .map(move |bits| IntType::new_unchecked(bits, signedness))
        })
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.signedness.prefix(), self.bits)
    }
}

impl fmt::Debug for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for IntType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (signedness, digits) = if let Some(rest) = s.strip_prefix("uint") {
            (Signedness::Unsigned, rest)
        } else if let Some(rest) = s.strip_prefix("int") {
            (Signedness::Signed, rest)
        } else {
            return Err(Error::parse(s, "type name must start with `int` or `uint`"));
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::parse(s, "type name must end with a bit width"));
        }
        let bits = digits
            .parse::<u32>()
            .map_err(|_| Error::InvalidWidth(WidthError::Unsupported(u32::MAX)))?;
        IntType::new(bits, signedness)
    }
}

impl From<IntType> for String {
    fn from(ty: IntType) -> String {
        ty.to_string()
    }
}

impl TryFrom<String> for IntType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(8), 1);
        assert_eq!(word_count(32), 1);
        assert_eq!(word_count(40), 2);
        assert_eq!(word_count(64), 2);
        assert_eq!(word_count(72), 3);
        assert_eq!(word_count(256), 8);
        assert_eq!(MAX_WORDS, 8);
        for bits in SUPPORTED_WIDTHS {
            assert_eq!(word_count(bits), ((bits + 31) / 32) as usize);
        }
    }

    #[test]
    fn test_all_types() {
        let all: Vec<_> = IntType::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "uint8");
        assert_eq!(all[31].to_string(), "uint256");
        assert_eq!(all[32].to_string(), "int8");
        assert_eq!(all[63].to_string(), "int256");
    }

    #[test]
    fn test_unsupported_width() {
        for bits in [0, 7, 12, 33, 257, 264, 512] {
            assert_eq!(
                IntType::signed(bits),
                Err(Error::InvalidWidth(WidthError::Unsupported(bits)))
            );
        }
    }

    #[test]
    fn test_parse_name() {
        for ty in IntType::all() {
            assert_eq!(ty.to_string().parse::<IntType>().unwrap(), ty);
        }
        assert!(matches!("u8".parse::<IntType>(), Err(Error::ParseError { .. })));
        assert!(matches!("int".parse::<IntType>(), Err(Error::ParseError { .. })));
        assert!(matches!("int+8".parse::<IntType>(), Err(Error::ParseError { .. })));
        assert!(matches!("int12".parse::<IntType>(), Err(Error::InvalidWidth(_))));
        assert!(matches!(
            "uint99999999999".parse::<IntType>(),
            Err(Error::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_flip_sign() {
        let ty = IntType::unsigned(160).unwrap();
        assert_eq!(ty.flip_sign().to_string(), "int160");
        assert_eq!(ty.flip_sign().flip_sign(), ty);
        assert_eq!(ty.byte_count(), 20);
    }
}

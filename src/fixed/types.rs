//! The 64 members of the family as concrete types.

use super::FixedInt;

macro_rules! fixed_aliases {
    ($($signed:ident $unsigned:ident $bits:literal $words:literal;)*) => {
        $(
            #[allow(non_camel_case_types)]
            #[doc = concat!("Signed ", stringify!($bits), "-bit two's-complement integer.")]
            pub type $signed = FixedInt<$bits, $words, true>;

            #[allow(non_camel_case_types)]
            #[doc = concat!("Unsigned ", stringify!($bits), "-bit integer.")]
            pub type $unsigned = FixedInt<$bits, $words, false>;
        )*

        #[cfg(test)]
        mod test {
            use super::*;
            use crate::ty::IntType;

            #[test]
            fn test_alias_types() {
                let mut listed = Vec::new();
                $(
                    assert_eq!($signed::TYPE.to_string(), stringify!($signed));
                    assert_eq!($unsigned::TYPE.to_string(), stringify!($unsigned));
                    assert_eq!($signed::TYPE.word_count(), $signed::WORDS);
                    listed.push($unsigned::TYPE);
                    listed.push($signed::TYPE);
                )*
                listed.sort();
                let mut all: Vec<_> = IntType::all().collect();
                all.sort();
                assert_eq!(listed, all);
            }
        }
    };
}

fixed_aliases! {
    int8 uint8 8 1;
    int16 uint16 16 1;
    int24 uint24 24 1;
    int32 uint32 32 1;
    int40 uint40 40 2;
    int48 uint48 48 2;
    int56 uint56 56 2;
    int64 uint64 64 2;
    int72 uint72 72 3;
    int80 uint80 80 3;
    int88 uint88 88 3;
    int96 uint96 96 3;
    int104 uint104 104 4;
    int112 uint112 112 4;
    int120 uint120 120 4;
    int128 uint128 128 4;
    int136 uint136 136 5;
    int144 uint144 144 5;
    int152 uint152 152 5;
    int160 uint160 160 5;
    int168 uint168 168 6;
    int176 uint176 176 6;
    int184 uint184 184 6;
    int192 uint192 192 6;
    int200 uint200 200 7;
    int208 uint208 208 7;
    int216 uint216 216 7;
    int224 uint224 224 7;
    int232 uint232 232 8;
    int240 uint240 240 8;
    int248 uint248 248 8;
    int256 uint256 256 8;
}

//! 32-bit FNV-1a over UTF-16 code units.

pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash `input` one UTF-16 code unit at a time. Characters outside the BMP
/// contribute both surrogates, so results match a 16-bit string model rather
/// than iteration over `char`s.
pub fn fnv1a_32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_offset_basis() {
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
    }

    #[test]
    fn golden_values() {
        assert_eq!(fnv1a_32("1:Test"), 0x06ce_a7b2);
        assert_eq!(fnv1a_32("840:United States of America"), 448_725_867);
        assert_eq!(fnv1a_32("250:France"), 2_813_638_113);
    }

    #[test]
    fn astral_characters_hash_as_surrogate_pairs() {
        assert_eq!(fnv1a_32("1:\u{1F600}"), 3_712_612_871);

        // Iterating scalar values instead gives a different seed.
        let by_char = "1:\u{1F600}"
            .chars()
            .fold(FNV_OFFSET_BASIS, |h, c| (h ^ c as u32).wrapping_mul(FNV_PRIME));
        assert_eq!(by_char, 1_387_277_462);
        assert_ne!(by_char, fnv1a_32("1:\u{1F600}"));
    }

    #[test]
    fn bmp_non_ascii_uses_code_unit_value() {
        assert_eq!(fnv1a_32("é"), 1_812_687_940);
    }
}

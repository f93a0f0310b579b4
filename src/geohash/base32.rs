//! The geohash base32 alphabet.
//!
//! Geohash uses its own 32-symbol alphabet (digits plus lowercase letters
//! without `a`, `i`, `l` and `o`), so the standard RFC 4648 tables do not apply.

/// Symbols indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Symbol for a 5-bit value. Only the low five bits of `index` are used.
#[inline]
pub fn encode_index(index: u8) -> char {
    ALPHABET[(index & 0b1_1111) as usize] as char
}

/// 5-bit value of a symbol, or `None` if it is not part of the alphabet.
#[inline]
pub fn decode_char(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code >= 128 {
        return None;
    }
    match DECODE_TABLE[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_roundtrip() {
        for index in 0..32u8 {
            let ch = encode_index(index);
            assert_eq!(decode_char(ch), Some(index));
        }
    }

    #[test]
    fn test_excluded_symbols() {
        for ch in ['a', 'i', 'l', 'o', 'A', 'B', 'Z', '-', ' ', 'ß'] {
            assert_eq!(decode_char(ch), None, "'{}' should be rejected", ch);
        }
    }
}

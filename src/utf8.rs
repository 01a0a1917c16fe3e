//! UTF-8 utilities used when decoding percent-encoded octets.

use core::str;

// https://tools.ietf.org/html/rfc3629
const UTF8_CHAR_WIDTH: &[u8; 256] = &{
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = match i as u8 {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        i += 1;
    }
    table
};

/// Returns the total width in bytes of a UTF-8 sequence starting with `lead`.
///
/// Returns `0` if `lead` cannot start a sequence.
#[inline]
pub(crate) const fn char_width(lead: u8) -> usize {
    UTF8_CHAR_WIDTH[lead as usize] as usize
}

/// Decodes a complete UTF-8 sequence into exactly one character.
pub(crate) fn decode_char(bytes: &[u8]) -> Option<char> {
    let s = str::from_utf8(bytes).ok()?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width() {
        assert_eq!(char_width(b'a'), 1);
        assert_eq!(char_width(0xC3), 2);
        assert_eq!(char_width(0xE6), 3);
        assert_eq!(char_width(0xF0), 4);

        // continuation bytes and overlong leads
        assert_eq!(char_width(0x80), 0);
        assert_eq!(char_width(0xC0), 0);
        assert_eq!(char_width(0xC1), 0);
        assert_eq!(char_width(0xF5), 0);
        assert_eq!(char_width(0xFF), 0);
    }

    #[test]
    fn decode() {
        assert_eq!(decode_char(b"a"), Some('a'));
        assert_eq!(decode_char(&[0xC3, 0xA9]), Some('é'));
        assert_eq!(decode_char(&[0xF0, 0x9F, 0x98, 0x83]), Some('😃'));

        // surrogate
        assert_eq!(decode_char(&[0xED, 0xA0, 0x80]), None);
        // truncated
        assert_eq!(decode_char(&[0xE6, 0xB5]), None);
        // two characters
        assert_eq!(decode_char(b"ab"), None);
        assert_eq!(decode_char(b""), None);
    }
}

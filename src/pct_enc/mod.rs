//! Percent-encoding utilities.
//!
//! Every component in this crate stores its data decoded and produces
//! its canonical form through [`encode`], which leaves only the
//! [unreserved](table::UNRESERVED) bytes unencoded.

pub mod table;

pub use table::Table;

use crate::{
    error::{DecodeError, DecodeErrorKind},
    utf8,
};
use alloc::string::String;
use core::{fmt, str};

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, returning `None` if either byte is not hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    if table::HEX.allows_ascii(hi) && table::HEX.allows_ascii(lo) {
        Some(OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize])
    } else {
        None
    }
}

/// Reads the percent-encoded octet starting at `i`, which must point to a `%`.
fn take_octet(s: &[u8], i: usize) -> Result<u8, DecodeError> {
    let octet = match s.get(i + 1..i + 3) {
        Some(&[hi, lo]) => decode_octet(hi, lo),
        _ => None,
    };
    octet.ok_or(DecodeError {
        index: i,
        kind: DecodeErrorKind::InvalidOctet,
    })
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Writes a string percent-encoded when formatted with `Display`.
pub(crate) struct Encode<'a>(pub(crate) &'a str);

impl fmt::Display for Encode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let mut start = 0;
        for (i, &x) in s.as_bytes().iter().enumerate() {
            if table::UNRESERVED.allows_ascii(x) {
                continue;
            }
            // A nonempty run consists of ASCII bytes only.
            if start < i {
                f.write_str(&s[start..i])?;
            }
            f.write_str(encode_byte(x))?;
            start = i + 1;
        }
        if start < s.len() {
            f.write_str(&s[start..])?;
        }
        Ok(())
    }
}

/// Percent-encodes a string.
///
/// Each UTF-8 byte that is not [unreserved](table::UNRESERVED) is replaced by
/// `%` followed by its two-digit uppercase hexadecimal value.
///
/// # Examples
///
/// ```
/// use canon_uri::pct_enc;
///
/// assert_eq!(pct_enc::encode("hello world!"), "hello%20world%21");
/// assert_eq!(pct_enc::encode("é"), "%C3%A9");
/// assert_eq!(pct_enc::encode("a-b_c.d~e"), "a-b_c.d~e");
/// ```
#[must_use]
pub fn encode(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    encode_to(s, &mut buf);
    buf
}

/// Percent-encodes a string and appends the result onto the end of a buffer.
///
/// See [`encode`] for the rules applied.
pub fn encode_to(s: &str, buf: &mut String) {
    for &x in s.as_bytes() {
        if table::UNRESERVED.allows_ascii(x) {
            buf.push(x as char);
        } else {
            buf.push_str(encode_byte(x));
        }
    }
}

/// Decodes a percent-encoded string.
///
/// Bytes other than `%` are copied verbatim. Each `%XX` octet starts a UTF-8
/// sequence, and as many further `%XX` octets as the sequence requires are
/// consumed to form exactly one character.
///
/// # Errors
///
/// Returns `Err` if an octet is truncated or non-hexadecimal, or if the
/// octets do not form a valid UTF-8 sequence.
///
/// # Examples
///
/// ```
/// use canon_uri::{error::DecodeErrorKind, pct_enc};
///
/// assert_eq!(pct_enc::decode("%C3%A9")?, "é");
/// assert_eq!(pct_enc::decode("a+b%20c")?, "a+b c");
///
/// let e = pct_enc::decode("ab%2").unwrap_err();
/// assert_eq!(e.index(), 2);
/// assert_eq!(e.kind(), DecodeErrorKind::InvalidOctet);
///
/// // A lead byte that expects continuation octets which are not there.
/// let e = pct_enc::decode("%C3x").unwrap_err();
/// assert_eq!(e.kind(), DecodeErrorKind::InvalidUtf8);
/// # Ok::<_, canon_uri::error::DecodeError>(())
/// ```
pub fn decode(s: &str) -> Result<String, DecodeError> {
    let bytes = s.as_bytes();
    let mut buf = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let end = bytes[i..]
                .iter()
                .position(|&x| x == b'%')
                .map_or(bytes.len(), |n| i + n);
            // '%' is ASCII, so both ends are on character boundaries.
            buf.push_str(&s[i..end]);
            i = end;
            continue;
        }

        let start = i;
        let invalid_utf8 = DecodeError {
            index: start,
            kind: DecodeErrorKind::InvalidUtf8,
        };

        let lead = take_octet(bytes, i)?;
        i += 3;

        let width = utf8::char_width(lead);
        if width == 0 {
            return Err(invalid_utf8);
        }

        let mut seq = [lead, 0, 0, 0];
        for x in &mut seq[1..width] {
            if bytes.get(i) != Some(&b'%') {
                return Err(invalid_utf8);
            }
            *x = take_octet(bytes, i)?;
            i += 3;
        }

        let ch = utf8::decode_char(&seq[..width]).ok_or(invalid_utf8)?;
        buf.push(ch);
    }

    Ok(buf)
}

//! Best-effort UTF-8 decoding and character classification for names.
//!
//! Decoding never fails: a continuation byte that doesn't belong to a sequence,
//! a sequence interrupted by a new lead byte or an ASCII byte, and an incomplete
//! sequence at the end of input are all dropped silently.

/// Class of a decoded character as far as name validation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII latin letter or Cyrillic letter
    Letter,
    /// ASCII `0`-`9`
    Digit,
    /// Hyphen or space
    Separator,
    /// Anything else
    Other,
}

/// Decode UTF-8 bytes into scalar values, skipping malformed sequences.
pub fn decode(bytes: &[u8]) -> Vec<char> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut code: u32 = 0;
    let mut pending: u8 = 0;

    for &b in bytes {
        match b {
            0x00..=0x7F => {
                pending = 0;
                out.push(char::from(b));
            }
            0x80..=0xBF => {
                if pending == 0 {
                    continue;
                }
                code = (code << 6) | u32::from(b & 0x3F);
                pending -= 1;
                if pending == 0 {
                    // Surrogates and out-of-range values are not scalars.
                    if let Some(c) = char::from_u32(code) {
                        out.push(c);
                    }
                }
            }
            0xC0..=0xDF => {
                code = u32::from(b & 0x1F);
                pending = 1;
            }
            0xE0..=0xEF => {
                code = u32::from(b & 0x0F);
                pending = 2;
            }
            0xF0..=0xF7 => {
                code = u32::from(b & 0x07);
                pending = 3;
            }
            _ => {
                pending = 0;
            }
        }
    }

    out
}

/// ASCII latin letter, the main Cyrillic block `А`..`я`, or `Ё`/`ё`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{0410}'..='\u{044F}').contains(&c) || c == 'Ё' || c == 'ё'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_name_separator(c: char) -> bool {
    c == '-' || c == ' '
}

/// Classify a scalar value.
pub fn classify(c: char) -> CharClass {
    if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_name_separator(c) {
        CharClass::Separator
    } else {
        CharClass::Other
    }
}

//! `AsciiChar` - a byte known to be an ASCII codepoint.
//!
//! The free functions accept any byte. `AsciiChar` is for callers that want
//! the range check done once, at construction, and carried in the type.

use core::cmp::Ordering;
use core::fmt;

use crate::case;
use crate::classify::{self, CharClass};
use crate::error::NotAscii;

/// A single ASCII character (0x00-0x7F).
///
/// Ordering is byte order. Case conversion never leaves the ASCII range, so
/// `to_uppercase`/`to_lowercase` return `AsciiChar` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct AsciiChar(u8);

impl AsciiChar {
    pub const NUL: AsciiChar = AsciiChar(0x00);
    pub const SPACE: AsciiChar = AsciiChar(b' ');
    pub const DEL: AsciiChar = AsciiChar(0x7F);

    /// Returns `None` if `c` is above 0x7F.
    #[inline]
    pub const fn new(c: u8) -> Option<Self> {
        if classify::is_codepoint(c) {
            Some(AsciiChar(c))
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    pub const fn class(self) -> CharClass {
        classify::classify(self.0)
    }

    #[inline]
    pub const fn is_control(self) -> bool {
        classify::is_control(self.0)
    }

    #[inline]
    pub const fn is_alphabetic(self) -> bool {
        classify::is_alphabetic(self.0)
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        classify::is_numeric(self.0)
    }

    #[inline]
    pub const fn is_alphanumeric(self) -> bool {
        classify::is_alphanumeric(self.0)
    }

    #[inline]
    pub const fn is_uppercase(self) -> bool {
        classify::is_uppercase(self.0)
    }

    #[inline]
    pub const fn is_lowercase(self) -> bool {
        classify::is_lowercase(self.0)
    }

    #[inline]
    pub const fn to_uppercase(self) -> Self {
        AsciiChar(case::to_uppercase(self.0))
    }

    #[inline]
    pub const fn to_lowercase(self) -> Self {
        AsciiChar(case::to_lowercase(self.0))
    }

    /// Case-insensitive ordering, see [`case::compare_ci`].
    #[inline]
    pub const fn cmp_ignore_case(self, other: Self) -> Ordering {
        case::compare_ci(self.0, other.0)
    }

    #[inline]
    pub fn eq_ignore_case(self, other: Self) -> bool {
        self.cmp_ignore_case(other) == Ordering::Equal
    }
}

impl TryFrom<u8> for AsciiChar {
    type Error = NotAscii;

    fn try_from(c: u8) -> Result<Self, Self::Error> {
        AsciiChar::new(c).ok_or(NotAscii(c as u32))
    }
}

impl TryFrom<char> for AsciiChar {
    type Error = NotAscii;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let code = c as u32;
        match u8::try_from(code) {
            Ok(b) => AsciiChar::try_from(b),
            Err(_) => Err(NotAscii(code)),
        }
    }
}

impl From<AsciiChar> for u8 {
    fn from(c: AsciiChar) -> u8 {
        c.0
    }
}

impl From<AsciiChar> for char {
    fn from(c: AsciiChar) -> char {
        c.as_char()
    }
}

impl fmt::Display for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_char(), f)
    }
}

//! Byte classification under ASCII semantics.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Last ASCII codepoint.
pub const MAX_CODEPOINT: u8 = 0x7F;

/// Is `c` an ASCII codepoint?
#[inline]
pub const fn is_codepoint(c: u8) -> bool {
    c <= MAX_CODEPOINT
}

/// Is `c` a control character (0x00-0x1F or DEL)?
#[inline]
pub const fn is_control(c: u8) -> bool {
    c <= 0x1F || c == 0x7F
}

/// Is `c` a letter?
#[inline]
pub const fn is_alphabetic(c: u8) -> bool {
    is_uppercase(c) || is_lowercase(c)
}

/// Is `c` a decimal digit?
#[inline]
pub const fn is_numeric(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

/// Is `c` a letter or a digit?
#[inline]
pub const fn is_alphanumeric(c: u8) -> bool {
    is_alphabetic(c) || is_numeric(c)
}

/// Is `c` an upper case letter?
#[inline]
pub const fn is_uppercase(c: u8) -> bool {
    matches!(c, b'A'..=b'Z')
}

/// Is `c` a lower case letter?
#[inline]
pub const fn is_lowercase(c: u8) -> bool {
    matches!(c, b'a'..=b'z')
}

/// Character class - exactly one per byte value.
///
/// `Other` covers the printable codepoints that are neither letters nor
/// digits: space and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CharClass {
    Control = 0,
    Digit = 1,
    Upper = 2,
    Lower = 3,
    Other = 4,
    NonAscii = 5,
}

impl CharClass {
    /// Create a CharClass from its u8 representation.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        Self::try_from(v).unwrap_or(CharClass::NonAscii)
    }

    pub fn is_alphabetic(&self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }

    pub fn is_alphanumeric(&self) -> bool {
        self.is_alphabetic() || *self == Self::Digit
    }

    /// Printable ASCII: everything in 0x20-0x7E.
    pub fn is_printable(&self) -> bool {
        !matches!(self, Self::Control | Self::NonAscii)
    }
}

/// Classify a single byte.
#[inline]
pub const fn classify(c: u8) -> CharClass {
    if !is_codepoint(c) {
        CharClass::NonAscii
    } else if is_control(c) {
        CharClass::Control
    } else if is_numeric(c) {
        CharClass::Digit
    } else if is_uppercase(c) {
        CharClass::Upper
    } else if is_lowercase(c) {
        CharClass::Lower
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_edges() {
        assert!(is_codepoint(0x7F));
        assert!(!is_codepoint(0x80));
        assert!(is_control(0x1F));
        assert!(!is_control(0x20));
        assert!(is_control(0x7F));
        assert!(!is_alphabetic(b'@'));
        assert!(!is_alphabetic(b'['));
        assert!(!is_alphabetic(b'`'));
        assert!(!is_alphabetic(b'{'));
        assert!(is_numeric(b'0') && is_numeric(b'9'));
        assert!(!is_numeric(b'/') && !is_numeric(b':'));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric(b'9'));
        assert!(is_alphanumeric(b'q'));
        assert!(!is_alphanumeric(b'!'));
        assert!(!is_alphanumeric(0xE9));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(0x00), CharClass::Control);
        assert_eq!(classify(b'\n'), CharClass::Control);
        assert_eq!(classify(b' '), CharClass::Other);
        assert_eq!(classify(b'~'), CharClass::Other);
        assert_eq!(classify(0x7F), CharClass::Control);
        assert_eq!(classify(b'5'), CharClass::Digit);
        assert_eq!(classify(b'G'), CharClass::Upper);
        assert_eq!(classify(b'g'), CharClass::Lower);
        assert_eq!(classify(0x80), CharClass::NonAscii);
        assert_eq!(classify(0xFF), CharClass::NonAscii);
    }

    #[test]
    fn test_from_u8() {
        for class in [
            CharClass::Control,
            CharClass::Digit,
            CharClass::Upper,
            CharClass::Lower,
            CharClass::Other,
            CharClass::NonAscii,
        ] {
            assert_eq!(CharClass::from_u8(class.into()), class);
        }
        assert_eq!(CharClass::from_u8(200), CharClass::NonAscii);
    }

    #[test]
    fn test_printable() {
        for c in 0u8..=255 {
            assert_eq!(classify(c).is_printable(), (0x20..=0x7E).contains(&c), "byte {c:#04x}");
        }
    }
}

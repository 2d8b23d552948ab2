//! ASCII conversion errors.

use core::fmt;

/// A value outside the ASCII range was offered where an `AsciiChar` was
/// required. Holds the rejected value as a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAscii(pub u32);

impl NotAscii {
    /// The rejected value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the error message without the rejected value.
    pub fn message(&self) -> &'static str {
        "not an ASCII character"
    }
}

impl fmt::Display for NotAscii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#x}", self.message(), self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotAscii {}

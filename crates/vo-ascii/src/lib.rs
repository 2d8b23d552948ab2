//! # vo-ascii
//!
//! ASCII-only character functions over single bytes, `no_std` compatible.
//!
//! Every byte 0..=255 is a valid input. Bytes above `0x7F` are never rejected,
//! they just fail every range check.
//!
//! - `classify` - range predicates and `CharClass`
//! - `case` - case conversion and case-insensitive comparison
//! - `ascii_char` - `AsciiChar`, a byte known to be in the ASCII range
//! - `error` - `NotAscii`

#![cfg_attr(not(feature = "std"), no_std)]

pub mod case;
pub mod ascii_char;
pub mod classify;
pub mod error;

pub use case::{compare_ci, to_lowercase, to_uppercase};
pub use ascii_char::AsciiChar;
pub use classify::{
    classify, is_alphabetic, is_alphanumeric, is_codepoint, is_control, is_lowercase, is_numeric,
    is_uppercase, CharClass,
};
pub use error::NotAscii;

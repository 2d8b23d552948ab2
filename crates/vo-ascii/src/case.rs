//! Case conversion and case-insensitive comparison.
//!
//! Only the 26 Latin letters have a case. Every other byte, including the
//! whole 0x80-0xFF range, passes through unchanged.

use core::cmp::Ordering;

use crate::classify::{is_lowercase, is_uppercase};

/// Distance between an upper case letter and its lower case form.
const CASE_OFFSET: u8 = 0x20;

/// Convert a lower case letter to upper case.
#[inline]
pub const fn to_uppercase(c: u8) -> u8 {
    if is_lowercase(c) {
        c - CASE_OFFSET
    } else {
        c
    }
}

/// Convert an upper case letter to lower case.
#[inline]
pub const fn to_lowercase(c: u8) -> u8 {
    if is_uppercase(c) {
        c + CASE_OFFSET
    } else {
        c
    }
}

/// Compare two bytes after folding both to lower case.
///
/// `Ordering` is `#[repr(i8)]` with `Less = -1`, `Equal = 0`, `Greater = 1`,
/// so `compare_ci(a, b) as i32` yields the usual -1/0/+1 result.
#[inline]
pub const fn compare_ci(c1: u8, c2: u8) -> Ordering {
    let c1 = to_lowercase(c1);
    let c2 = to_lowercase(c2);
    if c1 < c2 {
        Ordering::Less
    } else if c1 > c2 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

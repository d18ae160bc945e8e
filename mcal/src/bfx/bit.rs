// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-bit routines.
//!
//! A position at or past the word width names no bit: writes leave the word unchanged and reads
//! return `false`.

use super::word::{bit, Word};

/// Sets the bit at `position` to 1.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::set_bit(0b1000_1010u8, 2), 0b1000_1110);
/// ```
#[inline]
pub fn set_bit<W: Word>(data: W, position: u8) -> W {
    data | bit(position)
}

/// Clears the bit at `position` to 0.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::clr_bit(0b1000_1010u8, 1), 0b1000_1000);
/// ```
#[inline]
pub fn clr_bit<W: Word>(data: W, position: u8) -> W {
    data & !bit::<W>(position)
}

/// Returns the state of the bit at `position`.
#[inline]
pub fn get_bit<W: Word>(data: W, position: u8) -> bool {
    (data & bit(position)) != W::zero()
}

/// Writes `status` into the bit at `position`.
#[inline]
pub fn put_bit<W: Word>(data: W, position: u8, status: bool) -> W {
    if status {
        set_bit(data, position)
    } else {
        clr_bit(data, position)
    }
}

/// Copies bit `source_position` of `source` into bit `destination_position` of `destination`.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::copy_bit(0b1010_0001u8, 6, 0b1101_1010, 1), 0b1110_0001);
/// ```
#[inline]
pub fn copy_bit<W: Word>(
    destination: W,
    destination_position: u8,
    source: W,
    source_position: u8,
) -> W {
    put_bit(
        destination,
        destination_position,
        get_bit(source, source_position),
    )
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bit-field and mask routines.
//!
//! A field is the run `[start, start + length)`. Any part of it at or above the word width is
//! ignored, so a field may be clipped but never wraps around.

use super::word::{field_mask, low_mask, shl, shr, Word};

/// Sets (`status == true`) or clears the bits of a field.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::set_bits(0b0000_0111u8, 4, 3, true), 0b0111_0111);
/// ```
#[inline]
pub fn set_bits<W: Word>(data: W, start: u8, length: u8, status: bool) -> W {
    let mask = field_mask::<W>(start, length);
    if status {
        data | mask
    } else {
        data & !mask
    }
}

/// Extracts a field, right-aligned and zero-extended.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::get_bits(0b0110_0111u8, 4, 3), 0b0000_0110);
/// ```
#[inline]
pub fn get_bits<W: Word>(data: W, start: u8, length: u8) -> W {
    shr(data, u32::from(start)) & low_mask(length)
}

/// Sets every bit that is set in `mask`.
#[inline]
pub fn set_bit_mask<W: Word>(data: W, mask: W) -> W {
    data | mask
}

/// Clears every bit that is set in `mask`.
#[inline]
pub fn clr_bit_mask<W: Word>(data: W, mask: W) -> W {
    data & !mask
}

/// `true` if **all** bits of `mask` are set in `data`.
#[inline]
pub fn tst_bit_mask<W: Word>(data: W, mask: W) -> bool {
    (data & mask) == mask
}

/// `true` if **at least one** bit of `mask` is set in `data`.
#[inline]
pub fn tst_bit_ln_mask<W: Word>(data: W, mask: W) -> bool {
    (data & mask) != W::zero()
}

/// One's complement of the whole word.
#[inline]
pub fn toggle_bits<W: Word>(data: W) -> W {
    !data
}

/// Flips the bits selected by `mask`.
#[inline]
pub fn toggle_bit_mask<W: Word>(data: W, mask: W) -> W {
    data ^ mask
}

/// Replaces a field with the low `length` bits of `pattern`.
///
/// Higher bits of `pattern` are ignored.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::put_bits(0b1111_0000u8, 1, 3, 0b0000_0011), 0b1111_0110);
/// ```
#[inline]
pub fn put_bits<W: Word>(data: W, start: u8, length: u8, pattern: W) -> W {
    let field = shl(pattern & low_mask(length), u32::from(start));
    put_bits_mask(data, field, field_mask(start, length))
}

/// Merges `pattern` into `data` wherever `mask` is set.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::put_bits_mask(0b1110_0000u8, 0b1100_1101, 0b0000_1111), 0b1110_1101);
/// ```
#[inline]
pub fn put_bits_mask<W: Word>(data: W, pattern: W, mask: W) -> W {
    (pattern & mask) | (data & !mask)
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shift, rotate and saturating-shift routines.

use super::count::count_leading_signs;
use super::word::{shl, shr, SignedWord, Word};

/// Logical right shift. Vacated bits are 0; a count of the word width or more gives 0.
#[inline]
pub fn shift_bit_rt<W: Word>(data: W, count: u8) -> W {
    shr(data, u32::from(count))
}

/// Logical left shift. Vacated bits are 0; a count of the word width or more gives 0.
#[inline]
pub fn shift_bit_lt<W: Word>(data: W, count: u8) -> W {
    shl(data, u32::from(count))
}

/// Rotates right by `count` modulo the word width.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::rot_bit_rt(0b0001_0111u8, 3), 0b1110_0010);
/// ```
#[inline]
pub fn rot_bit_rt<W: Word>(data: W, count: u8) -> W {
    data.rotate_right(u32::from(count % W::BITS))
}

/// Rotates left by `count` modulo the word width.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::rot_bit_lt(0b1011_0111u8, 3), 0b1011_1101);
/// ```
#[inline]
pub fn rot_bit_lt<W: Word>(data: W, count: u8) -> W {
    data.rotate_left(u32::from(count % W::BITS))
}

/// Arithmetic shift with saturation for signed words.
///
/// - `count >= 0`: shift left. If a significant bit (one that differs from the sign) would be
///   pushed through the sign bit, the result saturates to `MAX` for a non-negative input or to
///   `MIN` for a negative one.
/// - `count < 0`: shift right by `|count|`, filling with the sign bit. Shifting by the word width
///   or more leaves all zeros or all ones.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::shift_bit_sat_signed(0x76i8, 3), i8::MAX);
/// assert_eq!(bfx::shift_bit_sat_signed(0x06i8, 3), 0x30);
/// ```
pub fn shift_bit_sat_signed<S: SignedWord>(data: S, count: i8) -> S {
    let n = u32::from(count.unsigned_abs());

    if count >= 0 {
        if data.is_zero() {
            return data;
        }
        // Redundant sign bits are exactly the headroom before the sign flips.
        if n > u32::from(count_leading_signs(data)) {
            if data < S::zero() {
                S::min_value()
            } else {
                S::max_value()
            }
        } else {
            data << n as usize
        }
    } else if n >= u32::from(S::BITS) {
        if data < S::zero() {
            -S::one()
        } else {
            S::zero()
        }
    } else {
        data >> n as usize
    }
}

/// Logical shift with saturation for unsigned words.
///
/// - `count >= 0`: shift left, saturating to `MAX` if any set bit would be shifted out.
/// - `count < 0`: shift right by `|count|`, filling with 0.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::shift_bit_sat_unsigned(0x81u8, 1), u8::MAX);
/// assert_eq!(bfx::shift_bit_sat_unsigned(0x81u8, -1), 0x40);
/// ```
pub fn shift_bit_sat_unsigned<W: Word>(data: W, count: i8) -> W {
    let n = u32::from(count.unsigned_abs());

    if count >= 0 {
        if data.is_zero() {
            data
        } else if n > data.leading_zeros() {
            W::max_value()
        } else {
            shl(data, n)
        }
    } else {
        shr(data, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_shifts() {
        assert_eq!(shift_bit_rt(0xA0u8, 4), 0x0A);
        assert_eq!(shift_bit_rt(0xA0u8, 8), 0x00);
        assert_eq!(shift_bit_lt(0x0Au8, 4), 0xA0);
        assert_eq!(shift_bit_lt(0x0Au8, 8), 0x00);
        assert_eq!(shift_bit_rt(0x00AA_0000u32, 20), 0x0000_000A);
        assert_eq!(shift_bit_rt(0x00AA_0000u32, 24), 0x0000_0000);
        assert_eq!(shift_bit_lt(0x0000_00AAu32, 20), 0x0AA0_0000);
        assert_eq!(shift_bit_lt(0x0000_AA00u32, 16), 0xAA00_0000);
        assert_eq!(shift_bit_lt(u64::MAX, 255), 0);
    }

    #[test]
    fn rotates() {
        assert_eq!(rot_bit_rt(0x5Au8, 4), 0xA5);
        assert_eq!(rot_bit_rt(0x07u8, 7), 0x0E);
        assert_eq!(rot_bit_lt(0x3Au8, 4), 0xA3);
        assert_eq!(rot_bit_lt(0x07u8, 7), 0x83);
        assert_eq!(rot_bit_rt(0x0000_005Au32, 4), 0xA000_0005);
        assert_eq!(rot_bit_rt(0x0000_0007u32, 7), 0x0E00_0000);
        assert_eq!(rot_bit_lt(0x003A_0000u32, 16), 0x0000_003A);
        assert_eq!(rot_bit_lt(0x0700_0000u32, 7), 0x8000_0003);
    }

    #[test]
    fn rotate_by_width_is_identity() {
        assert_eq!(rot_bit_rt(0x5Au8, 0), 0x5A);
        assert_eq!(rot_bit_rt(0x5Au8, 8), 0x5A);
        assert_eq!(rot_bit_lt(0x1234u16, 16), 0x1234);
        assert_eq!(rot_bit_lt(0x5Au8, 12), rot_bit_lt(0x5Au8, 4));
    }

    #[test]
    fn signed_saturation_8() {
        assert_eq!(shift_bit_sat_signed(0x76i8, 3) as u8, 0x7F);
        assert_eq!(shift_bit_sat_signed(0x06i8, 3) as u8, 0x30);
        assert_eq!(shift_bit_sat_signed(0xE6u8 as i8, 3) as u8, 0x80);
        assert_eq!(shift_bit_sat_signed(0xF8u8 as i8, 3) as u8, 0xC0);
    }

    #[test]
    fn signed_saturation_32() {
        assert_eq!(shift_bit_sat_signed(0x7600_0000i32, 3), i32::MAX);
        assert_eq!(shift_bit_sat_signed(0x0600i32, 3), 0x3000);
        assert_eq!(shift_bit_sat_signed(0xE600_0000u32 as i32, 3), i32::MIN);
        assert_eq!(
            shift_bit_sat_signed(0xF800_0000u32 as i32, 3) as u32,
            0xC000_0000
        );
    }

    #[test]
    fn signed_right_shift_extends_sign() {
        assert_eq!(shift_bit_sat_signed(0x7006i32, -11), 0x0E);
        assert_eq!(
            shift_bit_sat_signed(0xE600_0000u32 as i32, -11) as u32,
            0xFFFC_C000
        );
        assert_eq!(shift_bit_sat_signed(-1i8, -7), -1);
        assert_eq!(shift_bit_sat_signed(-128i8, -8), -1);
        assert_eq!(shift_bit_sat_signed(127i8, -8), 0);
        assert_eq!(shift_bit_sat_signed(-5i16, i8::MIN), -1);
    }

    #[test]
    fn signed_left_edges() {
        assert_eq!(shift_bit_sat_signed(0i8, 127), 0);
        assert_eq!(shift_bit_sat_signed(1i8, 6), 64);
        assert_eq!(shift_bit_sat_signed(1i8, 7), i8::MAX);
        assert_eq!(shift_bit_sat_signed(-1i8, 7), i8::MIN);
        assert_eq!(shift_bit_sat_signed(-1i64, 63), i64::MIN);
        assert_eq!(shift_bit_sat_signed(-2i64, 63), i64::MIN);
        assert_eq!(shift_bit_sat_signed(5i32, 0), 5);
    }

    #[test]
    fn unsigned_saturation() {
        assert_eq!(shift_bit_sat_unsigned(0x0Fu8, 4), 0xF0);
        assert_eq!(shift_bit_sat_unsigned(0x0Fu8, 5), 0xFF);
        assert_eq!(shift_bit_sat_unsigned(0x01u8, 8), 0xFF);
        assert_eq!(shift_bit_sat_unsigned(0x00u8, 8), 0x00);
        assert_eq!(shift_bit_sat_unsigned(0xF0u8, -4), 0x0F);
        assert_eq!(shift_bit_sat_unsigned(0xF0u8, -8), 0x00);
        assert_eq!(shift_bit_sat_unsigned(0x8000_0000u32, -31), 1);
        assert_eq!(shift_bit_sat_unsigned(u64::MAX, i8::MIN), 0);
    }
}

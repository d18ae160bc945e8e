// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Word widths understood by the bit-field routines.
//!
//! Every routine in [`bfx`](crate::bfx) is written once against [`Word`] (or [`SignedWord`] for
//! the two sign-aware routines) and is instantiated for the 8/16/32/64-bit primitives below.

use num_traits::{PrimInt, Signed, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned word: `u8`, `u16`, `u32` or `u64`.
pub trait Word: PrimInt + Unsigned + sealed::Sealed {
    /// Width in bits.
    const BITS: u8;
}

/// Two's-complement word: `i8`, `i16`, `i32` or `i64`.
pub trait SignedWord: PrimInt + Signed + sealed::Sealed {
    /// Width in bits.
    const BITS: u8;
}

macro_rules! impl_word {
    ($($u:ty, $s:ty;)*) => {
        $(
            impl sealed::Sealed for $u {}
            impl sealed::Sealed for $s {}

            impl Word for $u {
                const BITS: u8 = <$u>::BITS as u8;
            }

            impl SignedWord for $s {
                const BITS: u8 = <$s>::BITS as u8;
            }
        )*
    };
}

impl_word! {
    u8, i8;
    u16, i16;
    u32, i32;
    u64, i64;
}

/// Logical left shift where a count of `W::BITS` or more empties the word.
#[inline]
pub(crate) fn shl<W: Word>(data: W, count: u32) -> W {
    if count >= u32::from(W::BITS) {
        W::zero()
    } else {
        data << count as usize
    }
}

/// Logical right shift where a count of `W::BITS` or more empties the word.
#[inline]
pub(crate) fn shr<W: Word>(data: W, count: u32) -> W {
    if count >= u32::from(W::BITS) {
        W::zero()
    } else {
        data >> count as usize
    }
}

/// Single-bit mask for `position`; zero when the position is past the word.
#[inline]
pub(crate) fn bit<W: Word>(position: u8) -> W {
    shl(W::one(), u32::from(position))
}

/// The low `length` bits set.
#[inline]
pub(crate) fn low_mask<W: Word>(length: u8) -> W {
    if length >= W::BITS {
        W::max_value()
    } else {
        shl(W::one(), u32::from(length)) - W::one()
    }
}

/// Mask covering the field `[start, start + length)`, clipped to the word.
#[inline]
pub(crate) fn field_mask<W: Word>(start: u8, length: u8) -> W {
    shl(low_mask(length), u32::from(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<i8 as SignedWord>::BITS, 8);
        assert_eq!(<i64 as SignedWord>::BITS, 64);
    }

    #[test]
    fn shifts_past_width_are_empty() {
        assert_eq!(shl(0xFFu8, 8), 0);
        assert_eq!(shr(0xFFu8, 9), 0);
        assert_eq!(shl(0xFFu8, 7), 0x80);
        assert_eq!(shr(u64::MAX, 63), 1);
    }

    #[test]
    fn masks() {
        assert_eq!(low_mask::<u8>(0), 0x00);
        assert_eq!(low_mask::<u8>(3), 0x07);
        assert_eq!(low_mask::<u8>(8), 0xFF);
        assert_eq!(low_mask::<u8>(200), 0xFF);
        assert_eq!(low_mask::<u64>(64), u64::MAX);
        assert_eq!(field_mask::<u8>(4, 3), 0x70);
        // A field running off the top is clipped, not wrapped.
        assert_eq!(field_mask::<u8>(6, 4), 0xC0);
        assert_eq!(field_mask::<u32>(32, 4), 0);
        assert_eq!(bit::<u16>(15), 0x8000);
        assert_eq!(bit::<u16>(16), 0);
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Bit Field Handling (Bfx)
//!
//! Stateless, re-entrant bit manipulation over 8, 16, 32 and 64-bit words. This is the layer the
//! [`port`](crate::port) driver uses to pack 1, 2 or 4 bits of per-pin configuration into 32-bit
//! GPIO registers.
//!
//! Routines never take a word by reference: anything that modifies a word returns the new value
//! and the caller stores it, e.g. `moder = bfx::put_bits(moder, pin * 2, 2, mode)`.
//!
//! ## Routines
//!
//! | Group | Routines |
//! | ----- | -------- |
//! | single bit | [`set_bit`], [`clr_bit`], [`get_bit`], [`put_bit`], [`copy_bit`] |
//! | fields / masks | [`set_bits`], [`get_bits`], [`put_bits`], [`put_bits_mask`], [`set_bit_mask`], [`clr_bit_mask`], [`toggle_bits`], [`toggle_bit_mask`] |
//! | tests | [`tst_bit_mask`], [`tst_bit_ln_mask`], [`tst_parity_even`] |
//! | shifts | [`shift_bit_rt`], [`shift_bit_lt`], [`rot_bit_rt`], [`rot_bit_lt`], [`shift_bit_sat_signed`], [`shift_bit_sat_unsigned`] |
//! | counts | [`count_leading_ones`], [`count_leading_signs`], [`count_leading_zeros`] |
//!
//! ## Out-of-range arguments
//!
//! Nothing here panics. A position at or past the word width names no bit, fields are clipped to
//! the word, and shifting by the width or more empties the word (or saturates, for the
//! saturating shifts). Rotates take their count modulo the width.

pub mod bit;
pub mod count;
pub mod field;
pub mod shift;
pub mod word;

pub use bit::{clr_bit, copy_bit, get_bit, put_bit, set_bit};
pub use count::{count_leading_ones, count_leading_signs, count_leading_zeros, tst_parity_even};
pub use field::{
    clr_bit_mask, get_bits, put_bits, put_bits_mask, set_bit_mask, set_bits, tst_bit_ln_mask,
    tst_bit_mask, toggle_bit_mask, toggle_bits,
};
pub use shift::{
    rot_bit_lt, rot_bit_rt, shift_bit_lt, shift_bit_rt, shift_bit_sat_signed,
    shift_bit_sat_unsigned,
};
pub use word::{SignedWord, Word};

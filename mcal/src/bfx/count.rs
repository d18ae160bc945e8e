// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Parity and leading-bit counts.

use super::word::{SignedWord, Word};

/// `true` if the number of set bits is even.
#[inline]
pub fn tst_parity_even<W: Word>(data: W) -> bool {
    data.count_ones() % 2 == 0
}

/// Consecutive ones from the most significant bit down.
#[inline]
pub fn count_leading_ones<W: Word>(data: W) -> u8 {
    (!data).leading_zeros() as u8
}

/// Redundant sign bits: how many bits below the sign bit equal it.
///
/// ```
/// # use mcal::bfx;
/// assert_eq!(bfx::count_leading_signs(0b1110_0110u8 as i8), 2);
/// assert_eq!(bfx::count_leading_signs(0i32), 31);
/// ```
#[inline]
pub fn count_leading_signs<S: SignedWord>(data: S) -> u8 {
    let magnitude = if data < S::zero() { !data } else { data };
    (magnitude.leading_zeros() - 1) as u8
}

/// Consecutive zeros from the most significant bit down; the full width for 0.
#[inline]
pub fn count_leading_zeros<W: Word>(data: W) -> u8 {
    data.leading_zeros() as u8
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Mezcal MCAL
//!
//! Microcontroller abstraction layer for the STM32G0B1, written in Rust.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`bfx`] | Bit and bit-field operations on unsigned and signed words |
//! | [`port`] | GPIO port initialization and run-time pin reconfiguration |
//! | [`std_types`] | Types shared by every module (version info) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the demo on a NUCLEO-G0B1RE:
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod bfx;
pub mod port;
pub mod std_types;

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Types shared by every MCAL module.

/// Vendor id reported by every module of this MCAL.
pub const VENDOR_ID: u16 = 0x00EE;

/// Module version information (AUTOSAR `Std_VersionInfoType`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

impl VersionInfo {
    /// Version info for `module_id`, with this crate's version as the software version.
    pub const fn for_module(module_id: u16) -> Self {
        Self {
            vendor_id: VENDOR_ID,
            module_id,
            sw_major_version: parse_u8(env!("CARGO_PKG_VERSION_MAJOR")),
            sw_minor_version: parse_u8(env!("CARGO_PKG_VERSION_MINOR")),
            sw_patch_version: parse_u8(env!("CARGO_PKG_VERSION_PATCH")),
        }
    }
}

/// Decimal string to `u8` at compile time. Non-digits are skipped.
const fn parse_u8(s: &str) -> u8 {
    let bytes = s.as_bytes();
    let mut value: u8 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_digit() {
            value = value.wrapping_mul(10).wrapping_add(b - b'0');
        }
        i += 1;
    }
    value
}

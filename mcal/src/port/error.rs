// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Port driver development errors.

use core::fmt;

/// Errors reported by the Port driver.
///
/// [`code`](PortError::code) gives the matching AUTOSAR Port development error id.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PortError {
    /// Pin id names no pin of a configured port.
    ParamPin,
    /// Direction change requested for a pin that is not direction-changeable.
    DirectionUnchangeable,
    /// Initialization with an unusable configuration.
    InitFailed,
    /// Unknown pin mode or alternate function.
    ParamInvalidMode,
    /// Mode change requested for a pin that is not mode-changeable.
    ModeUnchangeable,
    /// A pin configuration that cannot be packed into a port configuration.
    ParamConfig,
}

impl PortError {
    pub const fn code(self) -> u8 {
        match self {
            PortError::ParamPin => 0x0A,
            PortError::DirectionUnchangeable => 0x0B,
            PortError::InitFailed => 0x0C,
            PortError::ParamInvalidMode => 0x0D,
            PortError::ModeUnchangeable => 0x0E,
            PortError::ParamConfig => 0x10,
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PortError::ParamPin => "invalid port pin id",
            PortError::DirectionUnchangeable => "pin direction is not changeable",
            PortError::InitFailed => "invalid port configuration",
            PortError::ParamInvalidMode => "invalid pin mode",
            PortError::ModeUnchangeable => "pin mode is not changeable",
            PortError::ParamConfig => "invalid pin configuration",
        };
        write!(f, "{} (0x{:02X})", msg, self.code())
    }
}

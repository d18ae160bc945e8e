// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin identifiers and per-pin settings.
//!
//! The discriminants of the setting enums are the raw values written into the corresponding
//! GPIO register field.

use crate::bfx;

use super::error::PortError;

/// Number of GPIO ports on the STM32G0B1 (A..F).
pub const NUMBER_OF_PORTS: usize = 6;
/// Pins per port.
pub const PINS_PER_PORT: u8 = 16;
/// Number of alternate functions a pin can select (AF0..AF10).
pub const MAX_ALT_FUNCTIONS: u8 = 11;

/// GPIO port.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl PortId {
    pub const ALL: [PortId; NUMBER_OF_PORTS] =
        [PortId::A, PortId::B, PortId::C, PortId::D, PortId::E, PortId::F];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Symbolic pin name: the port in the high nibble, the pin (0..15) in the low nibble.
///
/// `PinId::new(PortId::C, 13)` is `0x2D`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PinId(u8);

impl PinId {
    pub fn new(port: PortId, pin: u8) -> Result<Self, PortError> {
        if pin >= PINS_PER_PORT {
            return Err(PortError::ParamPin);
        }
        Ok(Self(bfx::put_bits(pin, 4, 4, port as u8)))
    }

    /// Wraps a raw pin name without validation.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Port nibble, which may name a port that does not exist.
    #[inline]
    pub fn port_number(self) -> u8 {
        bfx::shift_bit_rt(self.0, 4)
    }

    #[inline]
    pub fn pin_number(self) -> u8 {
        bfx::clr_bit_mask(self.0, 0xF0)
    }

    pub fn port(self) -> Option<PortId> {
        PortId::from_index(self.port_number())
    }
}

/// Direction of a pin used as GPIO.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PinDirection {
    In,
    Out,
}

/// MODER field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Mode {
    Input = 0b00,
    Output = 0b01,
    Alternate = 0b10,
    Analog = 0b11,
}

impl Mode {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Mode::Input),
            0b01 => Some(Mode::Output),
            0b10 => Some(Mode::Alternate),
            0b11 => Some(Mode::Analog),
            _ => None,
        }
    }

    /// Input and output are the two GPIO modes.
    #[inline]
    pub fn is_gpio(self) -> bool {
        matches!(self, Mode::Input | Mode::Output)
    }
}

impl From<PinDirection> for Mode {
    fn from(direction: PinDirection) -> Self {
        match direction {
            PinDirection::In => Mode::Input,
            PinDirection::Out => Mode::Output,
        }
    }
}

/// OSPEEDR field.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Speed {
    #[default]
    Low = 0b00,
    Medium = 0b01,
    High = 0b10,
    VeryHigh = 0b11,
}

impl Speed {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Speed::Low,
            0b01 => Speed::Medium,
            0b10 => Speed::High,
            _ => Speed::VeryHigh,
        }
    }
}

/// PUPDR field. `0b11` is reserved.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Pull {
    #[default]
    None = 0b00,
    Up = 0b01,
    Down = 0b10,
}

impl Pull {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Pull::None),
            0b01 => Some(Pull::Up),
            0b10 => Some(Pull::Down),
            _ => None,
        }
    }
}

/// OTYPER bit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Drive {
    #[default]
    PushPull = 0,
    OpenDrain = 1,
}

/// ODR / IDR bit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Level {
    #[default]
    Low = 0,
    High = 1,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Alternate function number, AF0..AF10.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AltFunction(u8);

impl AltFunction {
    pub fn new(af: u8) -> Result<Self, PortError> {
        if af < MAX_ALT_FUNCTIONS {
            Ok(Self(af))
        } else {
            Err(PortError::ParamInvalidMode)
        }
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }
}

/// What a pin is used for: a mode plus, for [`Mode::Alternate`], the function selected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PinMode {
    Input,
    Output,
    Alternate(AltFunction),
    #[default]
    Analog,
}

impl PinMode {
    /// Decodes a raw pin mode: MODER value in the low nibble, alternate function in the high
    /// nibble. The function nibble only matters for alternate mode.
    pub fn from_raw(raw: u8) -> Result<Self, PortError> {
        let mode = bfx::get_bits(raw, 0, 4);
        let af = bfx::get_bits(raw, 4, 4);

        match mode {
            0b00 => Ok(PinMode::Input),
            0b01 => Ok(PinMode::Output),
            0b10 => Ok(PinMode::Alternate(AltFunction::new(af)?)),
            0b11 => Ok(PinMode::Analog),
            _ => Err(PortError::ParamInvalidMode),
        }
    }

    pub fn raw(self) -> u8 {
        let af = match self {
            PinMode::Alternate(af) => af.number(),
            _ => 0,
        };
        bfx::put_bits(self.mode() as u8, 4, 4, af)
    }

    pub fn mode(self) -> Mode {
        match self {
            PinMode::Input => Mode::Input,
            PinMode::Output => Mode::Output,
            PinMode::Alternate(_) => Mode::Alternate,
            PinMode::Analog => Mode::Analog,
        }
    }

    /// The alternate function, or AF0 when the mode is not alternate.
    pub fn alt_function(self) -> AltFunction {
        match self {
            PinMode::Alternate(af) => af,
            _ => AltFunction::default(),
        }
    }
}

impl From<PinDirection> for PinMode {
    fn from(direction: PinDirection) -> Self {
        match direction {
            PinDirection::In => PinMode::Input,
            PinDirection::Out => PinMode::Output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_id_nibbles() {
        let pin = PinId::new(PortId::C, 13).unwrap();
        assert_eq!(pin.raw(), 0x2D);
        assert_eq!(pin.port_number(), 2);
        assert_eq!(pin.pin_number(), 13);
        assert_eq!(pin.port(), Some(PortId::C));

        let pin = PinId::from_raw(0x05);
        assert_eq!(pin.port(), Some(PortId::A));
        assert_eq!(pin.pin_number(), 5);
    }

    #[test]
    fn pin_id_rejects_bad_pin() {
        assert_eq!(PinId::new(PortId::A, 16), Err(PortError::ParamPin));
        assert_eq!(PinId::from_raw(0x70).port(), None);
    }

    #[test]
    fn pin_mode_raw_encoding() {
        let af7 = AltFunction::new(7).unwrap();
        assert_eq!(PinMode::Alternate(af7).raw(), 0x72);
        assert_eq!(PinMode::from_raw(0x72), Ok(PinMode::Alternate(af7)));
        assert_eq!(PinMode::from_raw(0x01), Ok(PinMode::Output));
        assert_eq!(PinMode::from_raw(0x03), Ok(PinMode::Analog));
        assert_eq!(PinMode::Input.raw(), 0x00);
        // The function nibble is ignored outside alternate mode.
        assert_eq!(PinMode::from_raw(0xF1), Ok(PinMode::Output));
    }

    #[test]
    fn pin_mode_rejects_bad_raw() {
        assert_eq!(PinMode::from_raw(0x04), Err(PortError::ParamInvalidMode));
        assert_eq!(PinMode::from_raw(0xB2), Err(PortError::ParamInvalidMode));
        assert_eq!(AltFunction::new(11), Err(PortError::ParamInvalidMode));
        assert!(AltFunction::new(10).is_ok());
    }

    #[test]
    fn field_decoding() {
        assert_eq!(Mode::from_bits(0b10), Some(Mode::Alternate));
        assert_eq!(Mode::from_bits(4), None);
        assert!(Mode::Output.is_gpio());
        assert!(!Mode::Analog.is_gpio());
        assert_eq!(Speed::from_bits(0b11), Speed::VeryHigh);
        assert_eq!(Pull::from_bits(0b11), None);
        assert_eq!(Mode::from(PinDirection::Out), Mode::Output);
    }
}

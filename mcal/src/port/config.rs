// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Port configuration.
//!
//! A [`PortConfig`] holds the register images for one GPIO port, packed the way the hardware
//! expects them (1, 2 or 4 bits per pin). It is normally built from a list of [`PinConfig`]s:
//!
//! ```
//! use mcal::port::{Config, PinConfig, PinMode, PortConfig, PortId, Speed};
//!
//! let led = PinConfig::new(5).with_mode(PinMode::Output).with_speed(Speed::Medium);
//! let ports = [PortConfig::from_pins(PortId::A, &[led]).unwrap()];
//! let config = Config::new(&ports);
//! assert_eq!(config.port(PortId::A).unwrap().pin(5).unwrap().mode, PinMode::Output);
//! ```

use crate::bfx;

use super::error::PortError;
use super::types::{
    AltFunction, Drive, Level, Mode, PinMode, PortId, Pull, Speed, PINS_PER_PORT,
};

const MODER_BITS: u8 = 2;
const AFR_BITS: u8 = 4;
const PINS_PER_AFR: u8 = 8;

/// Settings for one pin.
///
/// Every field defaults to the generator's default: analog, push-pull, low speed, no pull, low
/// level, nothing changeable at run time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PinConfig {
    pub pin: u8,
    pub mode: PinMode,
    pub drive: Drive,
    pub speed: Speed,
    pub pull: Pull,
    pub level: Level,
    pub direction_changeable: bool,
    pub mode_changeable: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            mode: PinMode::Analog,
            drive: Drive::PushPull,
            speed: Speed::Low,
            pull: Pull::None,
            level: Level::Low,
            direction_changeable: false,
            mode_changeable: false,
        }
    }

    pub const fn with_mode(mut self, mode: PinMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_drive(mut self, drive: Drive) -> Self {
        self.drive = drive;
        self
    }

    pub const fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub const fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    /// Initial output level.
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Allow [`Port::set_pin_direction`](super::Port::set_pin_direction) on this pin.
    pub const fn direction_changeable(mut self) -> Self {
        self.direction_changeable = true;
        self
    }

    /// Allow [`Port::set_pin_mode`](super::Port::set_pin_mode) on this pin.
    pub const fn mode_changeable(mut self) -> Self {
        self.mode_changeable = true;
        self
    }
}

/// Packed register images for one port.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PortConfig {
    pub port: PortId,
    /// Pins the driver may touch; the others keep whatever the registers hold.
    pub available_pins: u16,
    /// MODER image.
    pub mode: u32,
    /// OTYPER image.
    pub drive: u32,
    /// OSPEEDR image.
    pub speed: u32,
    /// ODR image.
    pub level: u32,
    /// PUPDR image.
    pub pull: u32,
    /// AFRH image (pins 8..15).
    pub alt_high: u32,
    /// AFRL image (pins 0..7).
    pub alt_low: u32,
    pub direction_changeable: u16,
    pub mode_changeable: u16,
}

impl PortConfig {
    /// All pins available and analog, everything else at reset value.
    pub const fn new(port: PortId) -> Self {
        Self {
            port,
            available_pins: 0xFFFF,
            mode: 0xFFFF_FFFF,
            drive: 0,
            speed: 0,
            level: 0,
            pull: 0,
            alt_high: 0,
            alt_low: 0,
            direction_changeable: 0,
            mode_changeable: 0,
        }
    }

    /// Packs `pins` on top of [`PortConfig::new`]. Pins not listed stay analog.
    pub fn from_pins(port: PortId, pins: &[PinConfig]) -> Result<Self, PortError> {
        let mut seen: u16 = 0;
        let mut config = Self::new(port);

        for pin in pins {
            if pin.pin < PINS_PER_PORT && bfx::get_bit(seen, pin.pin) {
                return Err(PortError::ParamConfig);
            }
            config = config.with_pin(*pin)?;
            seen = bfx::set_bit(seen, pin.pin);
        }

        Ok(config)
    }

    /// Restricts the driver to the pins set in `mask`.
    pub const fn with_available_pins(mut self, mask: u16) -> Self {
        self.available_pins = mask;
        self
    }

    /// Packs one pin's settings, replacing whatever the images held for it.
    pub fn with_pin(mut self, pin: PinConfig) -> Result<Self, PortError> {
        let n = pin.pin;
        if n >= PINS_PER_PORT {
            return Err(PortError::ParamPin);
        }

        self.mode = bfx::put_bits(self.mode, n * MODER_BITS, MODER_BITS, pin.mode.mode() as u32);
        self.drive = bfx::put_bit(self.drive, n, pin.drive == Drive::OpenDrain);
        self.speed = bfx::put_bits(self.speed, n * MODER_BITS, MODER_BITS, pin.speed as u32);
        self.pull = bfx::put_bits(self.pull, n * MODER_BITS, MODER_BITS, pin.pull as u32);
        self.level = bfx::put_bit(self.level, n, pin.level == Level::High);

        let af = u32::from(pin.mode.alt_function().number());
        if n < PINS_PER_AFR {
            self.alt_low = bfx::put_bits(self.alt_low, n * AFR_BITS, AFR_BITS, af);
        } else {
            self.alt_high =
                bfx::put_bits(self.alt_high, (n - PINS_PER_AFR) * AFR_BITS, AFR_BITS, af);
        }

        self.direction_changeable =
            bfx::put_bit(self.direction_changeable, n, pin.direction_changeable);
        self.mode_changeable = bfx::put_bit(self.mode_changeable, n, pin.mode_changeable);

        Ok(self)
    }

    /// Decodes the settings of `pin` back out of the images.
    pub fn pin(&self, pin: u8) -> Option<PinConfig> {
        if pin >= PINS_PER_PORT {
            return None;
        }

        let af = if pin < PINS_PER_AFR {
            bfx::get_bits(self.alt_low, pin * AFR_BITS, AFR_BITS)
        } else {
            bfx::get_bits(self.alt_high, (pin - PINS_PER_AFR) * AFR_BITS, AFR_BITS)
        };

        let mode = match self.initial_mode(pin)? {
            Mode::Input => PinMode::Input,
            Mode::Output => PinMode::Output,
            Mode::Alternate => PinMode::Alternate(AltFunction::new(af as u8).ok()?),
            Mode::Analog => PinMode::Analog,
        };

        let drive = if bfx::get_bit(self.drive, pin) {
            Drive::OpenDrain
        } else {
            Drive::PushPull
        };

        Some(PinConfig {
            pin,
            mode,
            drive,
            speed: Speed::from_bits(bfx::get_bits(self.speed, pin * MODER_BITS, MODER_BITS) as u8),
            pull: Pull::from_bits(bfx::get_bits(self.pull, pin * MODER_BITS, MODER_BITS) as u8)
                .unwrap_or_default(),
            level: Level::from(bfx::get_bit(self.level, pin)),
            direction_changeable: bfx::get_bit(self.direction_changeable, pin),
            mode_changeable: bfx::get_bit(self.mode_changeable, pin),
        })
    }

    /// MODER value configured for `pin`.
    pub fn initial_mode(&self, pin: u8) -> Option<Mode> {
        if pin >= PINS_PER_PORT {
            return None;
        }
        Mode::from_bits(bfx::get_bits(self.mode, pin * MODER_BITS, MODER_BITS) as u8)
    }

    #[inline]
    pub fn is_available(&self, pin: u8) -> bool {
        bfx::get_bit(self.available_pins, pin)
    }

    /// One bit per available pin (OTYPER, ODR).
    pub fn mask_1bit(&self) -> u32 {
        u32::from(self.available_pins)
    }

    /// Two bits per available pin (MODER, OSPEEDR, PUPDR).
    pub fn mask_2bit(&self) -> u32 {
        (0..PINS_PER_PORT)
            .filter(|&pin| self.is_available(pin))
            .fold(0, |mask, pin| {
                bfx::set_bits(mask, pin * MODER_BITS, MODER_BITS, true)
            })
    }

    /// Four bits per available pin among 0..7 (AFRL).
    pub fn mask_alt_low(&self) -> u32 {
        self.mask_4bit(0)
    }

    /// Four bits per available pin among 8..15 (AFRH).
    pub fn mask_alt_high(&self) -> u32 {
        self.mask_4bit(PINS_PER_AFR)
    }

    fn mask_4bit(&self, first: u8) -> u32 {
        (0..PINS_PER_AFR)
            .filter(|&slot| self.is_available(first + slot))
            .fold(0, |mask, slot| {
                bfx::set_bits(mask, slot * AFR_BITS, AFR_BITS, true)
            })
    }
}

/// The full configuration handed to [`Port::init`](super::Port::init).
#[derive(Copy, Clone, Debug)]
pub struct Config<'a> {
    ports: &'a [PortConfig],
}

impl<'a> Config<'a> {
    pub const fn new(ports: &'a [PortConfig]) -> Self {
        Self { ports }
    }

    #[inline]
    pub fn ports(&self) -> &'a [PortConfig] {
        self.ports
    }

    /// Configuration of `port`, if it is configured.
    pub fn port(&self, port: PortId) -> Option<&'a PortConfig> {
        self.ports.iter().find(|cfg| cfg.port == port)
    }

    /// Each port may be configured at most once.
    pub fn validate(&self) -> Result<(), PortError> {
        let mut seen: u8 = 0;
        for cfg in self.ports {
            let index = cfg.port as u8;
            if bfx::get_bit(seen, index) {
                return Err(PortError::InitFailed);
            }
            seen = bfx::set_bit(seen, index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn af(n: u8) -> AltFunction {
        AltFunction::new(n).unwrap()
    }

    #[test]
    fn new_port_is_all_analog() {
        let cfg = PortConfig::new(PortId::B);
        assert_eq!(cfg.mode, 0xFFFF_FFFF);
        assert_eq!(cfg.available_pins, 0xFFFF);
        assert_eq!(cfg.pin(3), Some(PinConfig::new(3)));
    }

    #[test]
    fn packs_pin_fields() {
        let pins = [
            PinConfig::new(5)
                .with_mode(PinMode::Output)
                .with_drive(Drive::OpenDrain)
                .with_speed(Speed::VeryHigh)
                .with_pull(Pull::Up)
                .with_level(Level::High)
                .direction_changeable(),
            PinConfig::new(10)
                .with_mode(PinMode::Alternate(af(7)))
                .with_pull(Pull::Down)
                .mode_changeable(),
        ];
        let cfg = PortConfig::from_pins(PortId::A, &pins).unwrap();

        // Pin 5: MODER bits 10..11 = 01, pin 10: bits 20..21 = 10.
        assert_eq!(cfg.mode, 0xFFEF_F7FF);
        assert_eq!(cfg.drive, 1 << 5);
        assert_eq!(cfg.speed, 0b11 << 10);
        assert_eq!(cfg.pull, (0b01 << 10) | (0b10 << 20));
        assert_eq!(cfg.level, 1 << 5);
        assert_eq!(cfg.alt_low, 0);
        assert_eq!(cfg.alt_high, 7 << 8);
        assert_eq!(cfg.direction_changeable, 1 << 5);
        assert_eq!(cfg.mode_changeable, 1 << 10);
    }

    #[test]
    fn decode_round_trips() {
        let pins = [
            PinConfig::new(0).with_mode(PinMode::Input).with_pull(Pull::Down),
            PinConfig::new(7).with_mode(PinMode::Alternate(af(10))),
            PinConfig::new(15)
                .with_mode(PinMode::Output)
                .with_level(Level::High)
                .mode_changeable(),
        ];
        let cfg = PortConfig::from_pins(PortId::C, &pins).unwrap();
        for pin in pins {
            assert_eq!(cfg.pin(pin.pin), Some(pin));
        }
        assert_eq!(cfg.pin(16), None);
    }

    #[test]
    fn rejects_bad_pins() {
        assert_eq!(
            PortConfig::from_pins(PortId::A, &[PinConfig::new(16)]),
            Err(PortError::ParamPin)
        );
        assert_eq!(
            PortConfig::from_pins(PortId::A, &[PinConfig::new(3), PinConfig::new(3)]),
            Err(PortError::ParamConfig)
        );
    }

    #[test]
    fn masks_follow_available_pins() {
        let cfg = PortConfig::new(PortId::D).with_available_pins(0b1000_0000_0000_0011);
        assert_eq!(cfg.mask_1bit(), 0x0000_8003);
        assert_eq!(cfg.mask_2bit(), 0xC000_000F);
        assert_eq!(cfg.mask_alt_low(), 0x0000_00FF);
        assert_eq!(cfg.mask_alt_high(), 0xF000_0000);

        let all = PortConfig::new(PortId::D);
        assert_eq!(all.mask_2bit(), 0xFFFF_FFFF);
        assert_eq!(all.mask_alt_low(), 0xFFFF_FFFF);
    }

    #[test]
    fn config_lookup_and_validation() {
        let ports = [PortConfig::new(PortId::A), PortConfig::new(PortId::C)];
        let config = Config::new(&ports);
        assert!(config.validate().is_ok());
        assert_eq!(config.port(PortId::C).map(|c| c.port), Some(PortId::C));
        assert!(config.port(PortId::B).is_none());

        let dup = [PortConfig::new(PortId::A), PortConfig::new(PortId::A)];
        assert_eq!(Config::new(&dup).validate(), Err(PortError::InitFailed));
    }
}

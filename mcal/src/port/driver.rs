// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Port driver.
//!
//! Holding a [`Port`] means the GPIO ports have been initialized from a [`Config`]; every
//! run-time service is a method on it.

use log::{debug, warn};

use crate::bfx;
#[cfg(feature = "version-info-api")]
use crate::std_types::VersionInfo;

use super::config::{Config, PortConfig};
use super::error::PortError;
use super::registers::{RegisterBlock, AFR_HIGH, AFR_LOW};
#[cfg(feature = "set-pin-direction-api")]
use super::types::{Mode, PinDirection};
#[cfg(feature = "set-pin-mode-api")]
use super::types::PinMode;
use super::types::{Level, PinId, NUMBER_OF_PORTS, PINS_PER_PORT};

/// AUTOSAR module id of the Port driver.
pub const MODULE_ID: u16 = 124;

const DEV_ERROR_DETECT: bool = cfg!(feature = "dev-error-detect");

const MODER_BITS: u8 = 2;
const AFR_BITS: u8 = 4;
const PINS_PER_AFR: u8 = 8;

/// Port services, numbered as AUTOSAR service ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ServiceId {
    Init = 0x00,
    SetPinDirection = 0x01,
    RefreshPortDirection = 0x02,
    GetVersionInfo = 0x03,
    SetPinMode = 0x04,
}

/// Reports `error` against `service` unless `condition` holds.
///
/// Without development error detection every check passes.
#[cfg(any(feature = "set-pin-direction-api", feature = "set-pin-mode-api"))]
fn det_check(condition: bool, service: ServiceId, error: PortError) -> Result<(), PortError> {
    if DEV_ERROR_DETECT && !condition {
        warn!("port: {:?} rejected: {}", service, error);
        Err(error)
    } else {
        Ok(())
    }
}

/// Initialized GPIO ports.
pub struct Port<'a> {
    registers: [&'a RegisterBlock; NUMBER_OF_PORTS],
    config: &'a Config<'a>,
}

impl<'a> Port<'a> {
    /// Writes `config` into the port registers.
    ///
    /// `registers` is indexed by [`PortId`](super::PortId). Ports missing from `config` are not
    /// touched, nor are the unavailable pins of configured ones. MODER is written last so a pin
    /// only switches mode once its output stage is set up.
    pub fn init(
        registers: [&'a RegisterBlock; NUMBER_OF_PORTS],
        config: &'a Config<'a>,
    ) -> Result<Self, PortError> {
        if DEV_ERROR_DETECT {
            if let Err(e) = config.validate() {
                warn!("port: {:?} rejected: {}", ServiceId::Init, e);
                return Err(e);
            }
        }

        for cfg in config.ports() {
            Self::apply(registers[cfg.port.index()], cfg);
            debug!(
                "port: {:?} configured, MODER={:#010x}",
                cfg.port,
                registers[cfg.port.index()].moder.get()
            );
        }

        Ok(Self { registers, config })
    }

    fn apply(regs: &RegisterBlock, cfg: &PortConfig) {
        let one = cfg.mask_1bit();
        let two = cfg.mask_2bit();

        regs.odr.set(bfx::put_bits_mask(regs.odr.get(), cfg.level, one));
        regs.otyper.set(bfx::put_bits_mask(regs.otyper.get(), cfg.drive, one));
        regs.ospeedr.set(bfx::put_bits_mask(regs.ospeedr.get(), cfg.speed, two));
        regs.pupdr.set(bfx::put_bits_mask(regs.pupdr.get(), cfg.pull, two));
        regs.afr[AFR_LOW].set(bfx::put_bits_mask(
            regs.afr[AFR_LOW].get(),
            cfg.alt_low,
            cfg.mask_alt_low(),
        ));
        regs.afr[AFR_HIGH].set(bfx::put_bits_mask(
            regs.afr[AFR_HIGH].get(),
            cfg.alt_high,
            cfg.mask_alt_high(),
        ));
        regs.moder.set(bfx::put_bits_mask(regs.moder.get(), cfg.mode, two));
    }

    /// Registers and configuration of the port `pin` belongs to, if `pin` is an available pin
    /// of a configured port.
    fn target(&self, pin: PinId) -> Option<(&'a RegisterBlock, &'a PortConfig, u8)> {
        let port = pin.port()?;
        let cfg = self.config.port(port)?;
        let n = pin.pin_number();
        if !cfg.is_available(n) {
            return None;
        }
        Some((self.registers[port.index()], cfg, n))
    }

    /// Switches a direction-changeable GPIO pin between input and output.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(
        &mut self,
        pin: PinId,
        direction: PinDirection,
    ) -> Result<(), PortError> {
        let service = ServiceId::SetPinDirection;
        let Some((regs, cfg, n)) = self.target(pin) else {
            return det_check(false, service, PortError::ParamPin);
        };
        det_check(
            bfx::get_bit(cfg.direction_changeable, n),
            service,
            PortError::DirectionUnchangeable,
        )?;

        let mode = Mode::from(direction);
        regs.moder.set(bfx::put_bits(
            regs.moder.get(),
            n * MODER_BITS,
            MODER_BITS,
            mode as u32,
        ));
        debug!("port: pin {:#04x} direction {:?}", pin.raw(), direction);
        Ok(())
    }

    /// Restores the configured direction of every GPIO pin that is not direction-changeable.
    pub fn refresh_port_direction(&mut self) {
        for cfg in self.config.ports() {
            let regs = self.registers[cfg.port.index()];
            let mut moder = regs.moder.get();

            for n in 0..PINS_PER_PORT {
                if !cfg.is_available(n) || bfx::get_bit(cfg.direction_changeable, n) {
                    continue;
                }
                if let Some(mode) = cfg.initial_mode(n).filter(|mode| mode.is_gpio()) {
                    moder = bfx::put_bits(moder, n * MODER_BITS, MODER_BITS, mode as u32);
                }
            }

            regs.moder.set(moder);
        }
        debug!("port: {:?} done", ServiceId::RefreshPortDirection);
    }

    /// Changes the mode of a mode-changeable pin. Alternate modes also select the function.
    #[cfg(feature = "set-pin-mode-api")]
    pub fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PortError> {
        let service = ServiceId::SetPinMode;
        let Some((regs, cfg, n)) = self.target(pin) else {
            return det_check(false, service, PortError::ParamPin);
        };
        det_check(
            bfx::get_bit(cfg.mode_changeable, n),
            service,
            PortError::ModeUnchangeable,
        )?;

        if let PinMode::Alternate(af) = mode {
            let (afr, slot) = if n < PINS_PER_AFR {
                (&regs.afr[AFR_LOW], n)
            } else {
                (&regs.afr[AFR_HIGH], n - PINS_PER_AFR)
            };
            afr.set(bfx::put_bits(
                afr.get(),
                slot * AFR_BITS,
                AFR_BITS,
                u32::from(af.number()),
            ));
        }
        regs.moder.set(bfx::put_bits(
            regs.moder.get(),
            n * MODER_BITS,
            MODER_BITS,
            mode.mode() as u32,
        ));

        debug!("port: pin {:#04x} mode {:?}", pin.raw(), mode);
        Ok(())
    }

    /// Version of this driver. Available before initialization.
    #[cfg(feature = "version-info-api")]
    pub const fn version_info() -> VersionInfo {
        VersionInfo::for_module(MODULE_ID)
    }

    /// Level on the input data register. Pins that name no available pin read low.
    pub fn read_input(&self, pin: PinId) -> Level {
        self.target(pin)
            .map(|(regs, _, n)| Level::from(bfx::get_bit(regs.idr.get(), n)))
            .unwrap_or_default()
    }

    /// Level on the output data register. Pins that name no available pin read low.
    pub fn output_level(&self, pin: PinId) -> Level {
        self.target(pin)
            .map(|(regs, _, n)| Level::from(bfx::get_bit(regs.odr.get(), n)))
            .unwrap_or_default()
    }

    /// Gives the register blocks back.
    pub fn release(self) -> [&'a RegisterBlock; NUMBER_OF_PORTS] {
        self.registers
    }
}

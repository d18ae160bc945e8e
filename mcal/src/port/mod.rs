// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Port driver
//!
//! Initializes the GPIO ports of the STM32G0B1 from a [`Config`] and offers the run-time
//! services of an AUTOSAR Port driver.
//!
//! | Item | Purpose |
//! | ---- | ------- |
//! | [`Port::init`] | Write the configured register images |
//! | [`Port::set_pin_direction`] | Flip a direction-changeable pin between input and output |
//! | [`Port::refresh_port_direction`] | Restore the configured direction of fixed pins |
//! | [`Port::set_pin_mode`] | Change the mode and alternate function of a mode-changeable pin |
//! | [`Port::version_info`] | Module version |
//!
//! The optional services are behind the `set-pin-direction-api`, `set-pin-mode-api` and
//! `version-info-api` features. Argument checks are behind `dev-error-detect`.

pub mod config;
pub mod driver;
pub mod error;
pub mod registers;
pub mod types;

pub use config::{Config, PinConfig, PortConfig};
pub use driver::{Port, ServiceId, MODULE_ID};
pub use error::PortError;
pub use registers::RegisterBlock;
pub use types::{
    AltFunction, Drive, Level, Mode, PinDirection, PinId, PinMode, PortId, Pull, Speed,
    MAX_ALT_FUNCTIONS, NUMBER_OF_PORTS, PINS_PER_PORT,
};

/// MMIO register blocks of every port, indexed by [`PortId`].
///
/// # Safety
///
/// Same as [`RegisterBlock::steal`].
pub unsafe fn steal_all() -> [&'static RegisterBlock; NUMBER_OF_PORTS] {
    PortId::ALL.map(|port| RegisterBlock::steal(port))
}

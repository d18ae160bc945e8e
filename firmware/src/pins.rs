// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-G0B1RE.

use mcal::port::{
    AltFunction, Drive, PinConfig, PinId, PinMode, PortConfig, PortError, PortId, Pull, Speed,
};

/// LD4, user LED (PA5).
pub const LED: PinId = PinId::from_raw(0x05);
/// B1, user button (PC13). Active low.
pub const BUTTON: PinId = PinId::from_raw(0x2D);
/// USART2 TX to the ST-LINK VCP (PA2).
pub const USART2_TX: PinId = PinId::from_raw(0x02);
/// USART2 RX from the ST-LINK VCP (PA3).
pub const USART2_RX: PinId = PinId::from_raw(0x03);

/// USART2 alternate function on PA2/PA3.
const AF_USART2: u8 = 1;

/// Port configuration for the board. Ports not listed keep their reset state.
pub fn board_ports() -> Result<[PortConfig; 2], PortError> {
    let usart2 = PinMode::Alternate(AltFunction::new(AF_USART2)?);

    let port_a = [
        PinConfig::new(LED.pin_number())
            .with_mode(PinMode::Output)
            .with_drive(Drive::PushPull)
            .with_speed(Speed::Low),
        PinConfig::new(USART2_TX.pin_number())
            .with_mode(usart2)
            .mode_changeable(),
        PinConfig::new(USART2_RX.pin_number())
            .with_mode(usart2)
            .with_pull(Pull::Up)
            .mode_changeable(),
    ];
    let port_c = [PinConfig::new(BUTTON.pin_number())
        .with_mode(PinMode::Input)
        .with_pull(Pull::None)];

    Ok([
        PortConfig::from_pins(PortId::A, &port_a)?,
        PortConfig::from_pins(PortId::C, &port_c)?,
    ])
}

#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use panic_halt as _;

use mcal::bfx;
use mcal::port::{self, Config, Level, Port, PortId, RegisterBlock};
use stm32g0::stm32g0b1 as pac;

mod pins;

/// Busy-wait between LED toggles, in core cycles (~300 ms at the 16 MHz HSI reset clock).
const BLINK_CYCLES: u32 = 4_800_000;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // GPIO clocks
    dp.RCC
        .iopenr
        .modify(|_, w| w.iopaen().set_bit().iopcen().set_bit());

    // Port
    let ports = pins::board_ports().unwrap();
    let config = Config::new(&ports);
    let registers = unsafe { port::steal_all() };
    let mut port = Port::init(registers, &config).unwrap();

    let gpioa: &RegisterBlock = registers[PortId::A.index()];
    let led_mask = 1u32 << pins::LED.pin_number();

    loop {
        // Hold B1 to pause blinking.
        if port.read_input(pins::BUTTON) == Level::High {
            gpioa.odr.set(bfx::toggle_bit_mask(gpioa.odr.get(), led_mask));
        }
        port.refresh_port_direction();
        cortex_m::asm::delay(BLINK_CYCLES);
    }
}

#[exception]
unsafe fn DefaultHandler(_irqn: i16) {
    loop {
        cortex_m::asm::nop();
    }
}

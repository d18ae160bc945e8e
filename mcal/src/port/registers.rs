// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! GPIO register block for the STM32G0B1 IOPORT bus.

use vcell::VolatileCell;

use super::types::PortId;

/// IOPORT bus base address.
pub const IOPORT_BASE: usize = 0x5000_0000;
/// Distance between consecutive GPIO ports.
pub const PORT_STRIDE: usize = 0x400;

/// Index of the low (pins 0..7) alternate function register in [`RegisterBlock::afr`].
pub const AFR_LOW: usize = 0;
/// Index of the high (pins 8..15) alternate function register in [`RegisterBlock::afr`].
pub const AFR_HIGH: usize = 1;

/// One GPIO port.
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00: mode, 2 bits per pin
    pub moder: VolatileCell<u32>,
    /// 0x04: output type, 1 bit per pin
    pub otyper: VolatileCell<u32>,
    /// 0x08: output speed, 2 bits per pin
    pub ospeedr: VolatileCell<u32>,
    /// 0x0C: pull-up/pull-down, 2 bits per pin
    pub pupdr: VolatileCell<u32>,
    /// 0x10: input data
    pub idr: VolatileCell<u32>,
    /// 0x14: output data
    pub odr: VolatileCell<u32>,
    /// 0x18: bit set/reset
    pub bsrr: VolatileCell<u32>,
    /// 0x1C: configuration lock
    pub lckr: VolatileCell<u32>,
    /// 0x20, 0x24: alternate function low/high, 4 bits per pin
    pub afr: [VolatileCell<u32>; 2],
    /// 0x28: bit reset
    pub brr: VolatileCell<u32>,
}

const _: () = assert!(core::mem::size_of::<RegisterBlock>() == 0x2C);

impl RegisterBlock {
    /// A block in ordinary memory at the reset state: every pin analog, everything else 0.
    pub const fn new() -> Self {
        Self {
            moder: VolatileCell::new(0xFFFF_FFFF),
            otyper: VolatileCell::new(0),
            ospeedr: VolatileCell::new(0),
            pupdr: VolatileCell::new(0),
            idr: VolatileCell::new(0),
            odr: VolatileCell::new(0),
            bsrr: VolatileCell::new(0),
            lckr: VolatileCell::new(0),
            afr: [VolatileCell::new(0), VolatileCell::new(0)],
            brr: VolatileCell::new(0),
        }
    }

    /// MMIO address of `port`'s register block.
    #[inline]
    pub const fn ptr(port: PortId) -> *const RegisterBlock {
        (IOPORT_BASE + port as usize * PORT_STRIDE) as *const RegisterBlock
    }

    /// The MMIO register block of `port`.
    ///
    /// # Safety
    ///
    /// Only valid on the target. The caller must make sure nothing else is configuring the same
    /// port concurrently.
    #[inline]
    pub unsafe fn steal(port: PortId) -> &'static RegisterBlock {
        &*Self::ptr(port)
    }
}

impl Default for RegisterBlock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(RegisterBlock, moder), 0x00);
        assert_eq!(offset_of!(RegisterBlock, otyper), 0x04);
        assert_eq!(offset_of!(RegisterBlock, ospeedr), 0x08);
        assert_eq!(offset_of!(RegisterBlock, pupdr), 0x0C);
        assert_eq!(offset_of!(RegisterBlock, idr), 0x10);
        assert_eq!(offset_of!(RegisterBlock, odr), 0x14);
        assert_eq!(offset_of!(RegisterBlock, bsrr), 0x18);
        assert_eq!(offset_of!(RegisterBlock, lckr), 0x1C);
        assert_eq!(offset_of!(RegisterBlock, afr), 0x20);
        assert_eq!(offset_of!(RegisterBlock, brr), 0x28);
    }

    #[test]
    fn port_base_addresses() {
        assert_eq!(RegisterBlock::ptr(PortId::A) as usize, 0x5000_0000);
        assert_eq!(RegisterBlock::ptr(PortId::B) as usize, 0x5000_0400);
        assert_eq!(RegisterBlock::ptr(PortId::C) as usize, 0x5000_0800);
        assert_eq!(RegisterBlock::ptr(PortId::D) as usize, 0x5000_0C00);
        assert_eq!(RegisterBlock::ptr(PortId::E) as usize, 0x5000_1000);
        assert_eq!(RegisterBlock::ptr(PortId::F) as usize, 0x5000_1400);
    }

    #[test]
    fn host_block_starts_analog() {
        let regs = RegisterBlock::new();
        assert_eq!(regs.moder.get(), 0xFFFF_FFFF);
        assert_eq!(regs.afr[AFR_LOW].get(), 0);
        assert_eq!(regs.afr[AFR_HIGH].get(), 0);
    }
}

//! A minimal transmit-only driver for an Arm PL011 (or SBSA generic) UART.

use core::fmt;
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

register_bitfields! {
    u32,

    /// Flag Register
    FR [
        /// Transmit FIFO full
        TXFF OFFSET(5) NUMBITS(1) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x000 => DR: ReadWrite<u32>),
        (0x004 => _reserved0),
        (0x018 => FR: ReadOnly<u32, FR::Register>),
        (0x01C => @END),
    }
}

/// The transmit side of a PL011 UART that firmware has already configured.
pub struct Pl011 {
    registers: *const RegisterBlock,
}

// The registers are only accessed through the logger's lock.
unsafe impl Send for Pl011 {}

impl Pl011 {
    /// # Safety
    ///
    /// `base_address` must be the identity-mapped MMIO base of an
    /// initialized PL011 that nothing else writes to.
    pub const unsafe fn new(base_address: usize) -> Pl011 {
        Pl011 { registers: base_address as *const RegisterBlock }
    }

    fn registers(&self) -> &RegisterBlock {
        unsafe { &*self.registers }
    }

    fn write_byte(&mut self, byte: u8) {
        let regs = self.registers();
        while regs.FR.is_set(FR::TXFF) {
            core::hint::spin_loop();
        }
        regs.DR.set(byte as u32);
    }
}

impl fmt::Write for Pl011 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}

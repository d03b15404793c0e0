//! Definitions for DBG2, the Debug Port Table 2.

#![no_std]

use sdt::AcpiSignature;

pub const DBG2_SIGNATURE: &AcpiSignature = b"DBG2";
/// The revision of the DBG2 debug device information structure,
/// which is what a table list entry for the DBG2 records.
pub const DBG2_DEBUG_DEVICE_INFORMATION_REVISION: u8 = 0;

/// Subtypes of a serial debug port.
/// These are also the interface types of the SPCR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum SerialPortSubtype {
    Full16550          = 0x0000,
    Subset16550        = 0x0001,
    ArmPl011           = 0x0003,
    ArmSbsa32BitUart   = 0x000D,
    ArmSbsaGenericUart = 0x000E,
    Bcm2835            = 0x0010,
}

impl SerialPortSubtype {
    pub const fn value(self) -> u16 {
        self as u16
    }
}

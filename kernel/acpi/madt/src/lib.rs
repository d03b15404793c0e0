//! Support for the MADT ACPI table, 
//! which includes interrupt and multicore info.
//!
//! On Arm platforms the MADT describes the GIC: one GICC entry per core,
//! the distributor, redistributor ranges and ITS blocks.

#![no_std]

use bitflags::bitflags;
use sdt::AcpiSignature;

pub const MADT_SIGNATURE: &AcpiSignature = b"APIC";
/// The MADT revision defined by ACPI 6.2.
pub const MADT_REVISION: u8 = 4;


bitflags! {
    /// The flags of a GICC (GIC CPU interface) entry.
    pub struct GiccFlags: u32 {
        /// The processor is ready for use.
        const ENABLED                          = 1 << 0;
        /// The performance monitoring interrupt is edge-triggered.
        const PERFORMANCE_INTERRUPT_EDGE       = 1 << 1;
        /// The VGIC maintenance interrupt is edge-triggered.
        const VGIC_MAINTENANCE_INTERRUPT_EDGE  = 1 << 2;
    }
}

/// The version of the GIC that a GICD entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum GicVersion {
    /// Let the OS probe the distributor.
    Unspecified = 0,
    V1 = 1,
    V2 = 2,
    V3 = 3,
    V4 = 4,
}

impl GicVersion {
    pub const fn value(self) -> u8 {
        self as u8
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gicc_flags_match_acpi_6_2() {
        assert_eq!(GiccFlags::ENABLED.bits(), 0x1);
        assert_eq!(GiccFlags::PERFORMANCE_INTERRUPT_EDGE.bits(), 0x2);
        assert_eq!(GiccFlags::VGIC_MAINTENANCE_INTERRUPT_EDGE.bits(), 0x4);
    }
}

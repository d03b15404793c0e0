//! Definitions for FADT, the Fixed ACPI Description Table.
//!
//! Only the fields an Arm platform has to describe itself are here:
//! the Arm boot architecture flags, the fixed feature flags
//! and the preferred power management profile.

#![no_std]

use bitflags::bitflags;
use sdt::AcpiSignature;


pub const FADT_SIGNATURE: &AcpiSignature = b"FACP";
/// The FADT revision defined by ACPI 6.2.
pub const FADT_REVISION: u8 = 6;


bitflags! {
    /// The `ARM_BOOT_ARCH` field of the FADT.
    pub struct ArmBootArchFlags: u16 {
        /// PSCI is implemented.
        const PSCI_COMPLIANT = 1 << 0;
        /// HVC, rather than SMC, must be used as the PSCI conduit.
        const PSCI_USE_HVC   = 1 << 1;
    }
}

bitflags! {
    /// The fixed feature `Flags` field of the FADT.
    pub struct FixedFeatureFlags: u32 {
        const WBINVD                  = 1 << 0;
        const WBINVD_FLUSH            = 1 << 1;
        const PROC_C1                 = 1 << 2;
        const P_LVL2_UP               = 1 << 3;
        const PWR_BUTTON              = 1 << 4;
        const SLP_BUTTON              = 1 << 5;
        const FIX_RTC                 = 1 << 6;
        const RTC_S4                  = 1 << 7;
        const TMR_VAL_EXT             = 1 << 8;
        const DCK_CAP                 = 1 << 9;
        const RESET_REG_SUP           = 1 << 10;
        const SEALED_CASE             = 1 << 11;
        /// The platform has no local input or output devices.
        const HEADLESS                = 1 << 12;
        const CPU_SW_SLP              = 1 << 13;
        const PCI_EXP_WAK             = 1 << 14;
        const USE_PLATFORM_CLOCK      = 1 << 15;
        const S4_RTC_STS_VALID        = 1 << 16;
        const REMOTE_POWER_ON_CAPABLE = 1 << 17;
        const FORCE_APIC_CLUSTER_MODEL       = 1 << 18;
        const FORCE_APIC_PHYSICAL_DESTINATION_MODE = 1 << 19;
        const HW_REDUCED_ACPI         = 1 << 20;
        const LOW_POWER_S0_IDLE_CAPABLE = 1 << 21;
    }
}

/// The `Preferred_PM_Profile` field of the FADT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PmProfile {
    Unspecified       = 0,
    Desktop           = 1,
    Mobile            = 2,
    Workstation       = 3,
    EnterpriseServer  = 4,
    SohoServer        = 5,
    AppliancePc       = 6,
    PerformanceServer = 7,
    Tablet            = 8,
}

impl PmProfile {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

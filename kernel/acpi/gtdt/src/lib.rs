//! Definitions for GTDT, the Generic Timer Description Table.
//!
//! The GTDT describes the per-processor architected timers,
//! the memory-mapped GT blocks and their timer frames,
//! and any SBSA generic watchdogs.
//! Each of them carries a flags word whose bit layout is fixed by ACPI 6.2.

#![no_std]

use bitflags::bitflags;
use sdt::AcpiSignature;


pub const GTDT_SIGNATURE: &AcpiSignature = b"GTDT";
/// The GTDT revision defined by ACPI 6.2.
pub const GTDT_REVISION: u8 = 2;

/// The GTDT value for a memory-mapped counter frame that isn't implemented.
pub const ABSENT_FRAME_ADDRESS: u64 = 0xFFFF_FFFF_FFFF_FFFF;


bitflags! {
    /// Flags for the per-processor timers (secure EL1, non-secure EL1,
    /// virtual EL1 and non-secure EL2).
    ///
    /// An unset bit means level-triggered, active-high, loses context.
    pub struct TimerFlags: u32 {
        /// The timer interrupt is edge-triggered.
        const EDGE_TRIGGERED = 1 << 0;
        /// The timer interrupt is active-low.
        const ACTIVE_LOW     = 1 << 1;
        /// The timer keeps its context in low-power states.
        const ALWAYS_ON      = 1 << 2;
    }
}

bitflags! {
    /// Physical and virtual timer flags of a GT block timer frame.
    pub struct GtBlockTimerFlags: u32 {
        const EDGE_TRIGGERED = 1 << 0;
        const ACTIVE_LOW     = 1 << 1;
    }
}

bitflags! {
    /// Common flags of a GT block timer frame.
    pub struct GtBlockCommonFlags: u32 {
        /// The frame's timer is a secure timer.
        const SECURE    = 1 << 0;
        const ALWAYS_ON = 1 << 1;
    }
}

bitflags! {
    /// Flags of an SBSA generic watchdog.
    pub struct WatchdogFlags: u32 {
        const EDGE_TRIGGERED = 1 << 0;
        const ACTIVE_LOW     = 1 << 1;
        /// The watchdog is a secure watchdog.
        const SECURE         = 1 << 2;
    }
}

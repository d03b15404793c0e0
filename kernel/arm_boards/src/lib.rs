//! Per-board definitions for Arm reference platforms
//!
//! | Feature | CPU Cores | Interrupt Controller | Console UART |
//! | --- | --- | --- | --- |
//! | fvp (default) | 8 | GICv3 with ITS | PL011 at `0x1C09_0000` |
//! | juno | 6 | GICv2 (GIC-400) | PL011 at `0x7FF8_0000` |
//!
//! Both boards are always compiled and reachable through [`boards`];
//! the board feature only selects which one is re-exported as [`BOARD_CONFIG`].
//! The `juno` feature takes precedence over the default `fvp` feature.

#![no_std]

use dbg2::SerialPortSubtype;
use fadt::{ArmBootArchFlags, FixedFeatureFlags, PmProfile};
use gtdt::{GtBlockCommonFlags, GtBlockTimerFlags, TimerFlags, WatchdogFlags};
use madt::GicVersion;

pub mod mpidr;

pub mod boards {
    pub mod fvp;
    pub mod juno;
}

/// A processor core and its GIC CPU interface.
#[derive(Debug, Copy, Clone)]
pub struct CpuConfig {
    pub cpu_interface_number: u32,
    pub mpidr: mpidr::DefinedMpidrValue,
    /// The GSIV of the core's PMU overflow interrupt.
    pub pmu_gsiv: u32,
    pub vgic_maintenance_gsiv: u32,
    /// Cores with a higher class are less power efficient.
    pub power_efficiency_class: u8,
}

#[derive(Debug, Copy, Clone)]
pub struct GicV2InterruptControllerConfig {
    pub distributor_base_address: u64,
    pub cpu_interface_base_address: u64,
}

#[derive(Debug, Copy, Clone)]
pub struct GicItsConfig {
    pub id: u32,
    pub base_address: u64,
}

#[derive(Debug, Copy, Clone)]
pub struct GicV3InterruptControllerConfig {
    pub distributor_base_address: u64,
    /// The memory-mapped CPU interface, for the legacy (GICv2-compatible) mode.
    pub cpu_interface_base_address: u64,
    pub redistributor_discovery_base_address: u64,
    pub redistributor_discovery_length: u32,
    pub its: Option<GicItsConfig>,
}

#[derive(Debug, Copy, Clone)]
pub enum InterruptControllerConfig {
    GicV2(GicV2InterruptControllerConfig),
    GicV3(GicV3InterruptControllerConfig),
}

impl InterruptControllerConfig {
    pub const fn version(&self) -> GicVersion {
        match self {
            InterruptControllerConfig::GicV2(_) => GicVersion::V2,
            InterruptControllerConfig::GicV3(_) => GicVersion::V3,
        }
    }

    pub const fn distributor_base_address(&self) -> u64 {
        match self {
            InterruptControllerConfig::GicV2(gic) => gic.distributor_base_address,
            InterruptControllerConfig::GicV3(gic) => gic.distributor_base_address,
        }
    }

    pub const fn cpu_interface_base_address(&self) -> u64 {
        match self {
            InterruptControllerConfig::GicV2(gic) => gic.cpu_interface_base_address,
            InterruptControllerConfig::GicV3(gic) => gic.cpu_interface_base_address,
        }
    }
}

/// The interrupt of one of the architected per-processor timers.
#[derive(Debug, Copy, Clone)]
pub struct TimerInterrupt {
    pub gsiv: u32,
    pub flags: TimerFlags,
}

#[derive(Debug, Copy, Clone)]
pub struct GenericTimerConfig {
    /// The `CNTControlBase` frame of the system counter.
    pub counter_control_base_address: u64,
    /// The `CNTReadBase` frame of the system counter.
    pub counter_read_base_address: u64,
    pub secure_el1: TimerInterrupt,
    pub non_secure_el1: TimerInterrupt,
    pub virtual_el1: TimerInterrupt,
    pub non_secure_el2: TimerInterrupt,
}

/// The interrupt of a GT block timer frame.
#[derive(Debug, Copy, Clone)]
pub struct GtFrameInterrupt {
    pub gsiv: u32,
    pub flags: GtBlockTimerFlags,
}

#[derive(Debug, Copy, Clone)]
pub struct GtFrameConfig {
    pub frame_number: u8,
    /// The `CNTBaseN` frame.
    pub cnt_base_address: u64,
    /// The `CNTEL0BaseN` frame, or all-ones if it isn't implemented.
    pub cnt_el0_base_address: u64,
    pub physical_timer: GtFrameInterrupt,
    pub virtual_timer: Option<GtFrameInterrupt>,
    pub common_flags: GtBlockCommonFlags,
}

/// A memory-mapped GT block and its timer frames.
#[derive(Debug, Copy, Clone)]
pub struct GtBlockConfig {
    /// The `CNTCTLBase` frame of the block.
    pub base_address: u64,
    pub frames: &'static [GtFrameConfig],
}

#[derive(Debug, Copy, Clone)]
pub struct WatchdogConfig {
    pub control_frame_address: u64,
    pub refresh_frame_address: u64,
    pub gsiv: u32,
    pub flags: WatchdogFlags,
}

#[derive(Debug, Copy, Clone)]
pub struct UartConfig {
    pub base_address: u64,
    pub base_address_length: u64,
    pub interrupt: u32,
    pub baud_rate: u64,
    pub clock_hz: u32,
    pub subtype: SerialPortSubtype,
}

#[derive(Debug, Copy, Clone)]
pub struct BoardConfig {
    pub name: &'static str,
    pub cpus: &'static [CpuConfig],
    pub interrupt_controller: InterruptControllerConfig,
    pub generic_timer: GenericTimerConfig,
    pub gt_block: GtBlockConfig,
    pub watchdog: WatchdogConfig,
    /// The UART that the SPCR hands to the OS as its console.
    pub console_uart: UartConfig,
    /// The UART that the DBG2 hands to the OS debugger.
    pub debug_uart: UartConfig,
    pub boot_arch_flags: ArmBootArchFlags,
    /// Only described on platforms that need FADT feature flags, e.g., headless ones.
    pub fixed_feature_flags: Option<FixedFeatureFlags>,
    pub pm_profile: PmProfile,
    /// The board's AML definition block, installed as the DSDT.
    pub dsdt: &'static [u8],
}

/// The FADT fixed feature flags of a board build.
pub(crate) const fn fixed_feature_flags() -> Option<FixedFeatureFlags> {
    if cfg!(feature = "headless") {
        Some(FixedFeatureFlags::HEADLESS)
    } else {
        None
    }
}

// by default, the FVP board config is used, unless the Juno board is selected
#[cfg(not(any(feature = "fvp", feature = "juno")))]
compile_error!("Please select a board config feature in the arm_boards crate");

#[cfg(all(feature = "fvp", not(feature = "juno")))]
pub use boards::fvp::BOARD_CONFIG;
#[cfg(feature = "juno")]
pub use boards::juno::BOARD_CONFIG;

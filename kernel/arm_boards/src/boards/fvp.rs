//! Board config for the Arm Fixed Virtual Platform (FVP) Base AEMv8-A model

use crate::{
    InterruptControllerConfig::GicV3, GicV3InterruptControllerConfig, GicItsConfig,
    BoardConfig, CpuConfig, GenericTimerConfig, TimerInterrupt, GtBlockConfig, GtFrameConfig,
    GtFrameInterrupt, WatchdogConfig, UartConfig, fixed_feature_flags, mpidr::DefinedMpidrValue,
};
use dbg2::SerialPortSubtype;
use fadt::{ArmBootArchFlags, PmProfile};
use gtdt::{GtBlockCommonFlags, GtBlockTimerFlags, TimerFlags, WatchdogFlags};
use sdt::{SDT_SIZE_IN_BYTES, DSDT_SIGNATURE, DSDT_REVISION, empty_definition_block};

// local utility function to describe a core, all of which
// share the same VGIC maintenance interrupt and efficiency class
const fn cpu(cpu_interface_number: u32, cluster: u8, core: u8, pmu_gsiv: u32) -> CpuConfig {
    CpuConfig {
        cpu_interface_number,
        mpidr: DefinedMpidrValue::cluster_core(cluster, core),
        pmu_gsiv,
        vgic_maintenance_gsiv: 25,
        power_efficiency_class: 0,
    }
}

#[cfg(feature = "mem_mapped_timer")]
const SYSTEM_TIMER_BASE_ADDRESS: u64 = 0x2A43_0000;
#[cfg(feature = "mem_mapped_timer")]
const CNT_READ_BASE_ADDRESS: u64 = 0x2A80_0000;
#[cfg(not(feature = "mem_mapped_timer"))]
const SYSTEM_TIMER_BASE_ADDRESS: u64 = gtdt::ABSENT_FRAME_ADDRESS;
#[cfg(not(feature = "mem_mapped_timer"))]
const CNT_READ_BASE_ADDRESS: u64 = gtdt::ABSENT_FRAME_ADDRESS;

/// Level-triggered, active-low, loses context.
const GTIMER_FLAGS: TimerFlags = TimerFlags::ACTIVE_LOW;

const fn timer(gsiv: u32) -> TimerInterrupt {
    TimerInterrupt { gsiv, flags: GTIMER_FLAGS }
}

/// Level-triggered, active-high.
const GTX_TIMER_FLAGS: GtBlockTimerFlags = GtBlockTimerFlags::empty();

const GTX_COMMON_FLAGS_S: GtBlockCommonFlags = GtBlockCommonFlags::from_bits_truncate(
    GtBlockCommonFlags::ALWAYS_ON.bits() | GtBlockCommonFlags::SECURE.bits()
);
const GTX_COMMON_FLAGS_NS: GtBlockCommonFlags = GtBlockCommonFlags::ALWAYS_ON;

const GT_BLOCK_FRAMES: [GtFrameConfig; 2] = [
    GtFrameConfig {
        frame_number: 0,
        cnt_base_address: 0x2A82_0000,
        cnt_el0_base_address: gtdt::ABSENT_FRAME_ADDRESS,
        physical_timer: GtFrameInterrupt { gsiv: 57, flags: GTX_TIMER_FLAGS },
        virtual_timer: None,
        common_flags: GTX_COMMON_FLAGS_S,
    },
    GtFrameConfig {
        frame_number: 1,
        cnt_base_address: 0x2A83_0000,
        cnt_el0_base_address: gtdt::ABSENT_FRAME_ADDRESS,
        physical_timer: GtFrameInterrupt { gsiv: 58, flags: GTX_TIMER_FLAGS },
        virtual_timer: None,
        common_flags: GTX_COMMON_FLAGS_NS,
    },
];

/// The FVP has no compiled ASL source in this workspace,
/// so its DSDT is an empty definition block.
pub const DSDT: [u8; SDT_SIZE_IN_BYTES] =
    empty_definition_block(*DSDT_SIGNATURE, DSDT_REVISION, *b"ARMLTD", *b"ARM-VEXP", 0x2000_0001);

const fn pl011(base_address: u64, interrupt: u32) -> UartConfig {
    UartConfig {
        base_address,
        base_address_length: 0x1000,
        interrupt,
        baud_rate: 115_200,
        clock_hz: 24_000_000,
        subtype: SerialPortSubtype::ArmSbsaGenericUart,
    }
}

pub const NUM_CPUS: usize = 8;
pub const BOARD_CONFIG: BoardConfig = BoardConfig {
    name: "Arm FVP",
    cpus: &[
        cpu(0, 0, 0, 92),
        cpu(1, 0, 1, 93),
        cpu(2, 0, 2, 94),
        cpu(3, 0, 3, 95),

        cpu(4, 1, 0, 96),
        cpu(5, 1, 1, 97),
        cpu(6, 1, 2, 98),
        cpu(7, 1, 3, 99),
    ],
    interrupt_controller: GicV3(GicV3InterruptControllerConfig {
        distributor_base_address: 0x2F00_0000,
        cpu_interface_base_address: 0x2C00_0000,
        redistributor_discovery_base_address: 0x2F10_0000,
        redistributor_discovery_length: 0x0020_0000,
        its: Some(GicItsConfig { id: 0, base_address: 0x2F02_0000 }),
    }),
    generic_timer: GenericTimerConfig {
        counter_control_base_address: SYSTEM_TIMER_BASE_ADDRESS,
        counter_read_base_address: CNT_READ_BASE_ADDRESS,
        secure_el1: timer(29),
        non_secure_el1: timer(30),
        virtual_el1: timer(27),
        non_secure_el2: timer(26),
    },
    gt_block: GtBlockConfig {
        base_address: 0x2A81_0000,
        frames: &GT_BLOCK_FRAMES,
    },
    watchdog: WatchdogConfig {
        control_frame_address: 0x2A44_0000,
        refresh_frame_address: 0x2A45_0000,
        gsiv: 59,
        // non-secure, active-high, level-triggered
        flags: WatchdogFlags::empty(),
    },
    console_uart: pl011(0x1C09_0000, 37),
    debug_uart: pl011(0x1C0A_0000, 39),
    boot_arch_flags: ArmBootArchFlags::PSCI_COMPLIANT,
    fixed_feature_flags: fixed_feature_flags(),
    pm_profile: PmProfile::EnterpriseServer,
    dsdt: &DSDT,
};

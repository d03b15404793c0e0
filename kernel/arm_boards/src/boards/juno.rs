//! Board config for the Arm Juno development board

use crate::{
    InterruptControllerConfig::GicV2, GicV2InterruptControllerConfig,
    BoardConfig, CpuConfig, GenericTimerConfig, TimerInterrupt, GtBlockConfig, GtFrameConfig,
    GtFrameInterrupt, WatchdogConfig, UartConfig, fixed_feature_flags, mpidr::DefinedMpidrValue,
};
use dbg2::SerialPortSubtype;
use fadt::{ArmBootArchFlags, PmProfile};
use gtdt::{GtBlockCommonFlags, GtBlockTimerFlags, TimerFlags, WatchdogFlags};
use sdt::{SDT_SIZE_IN_BYTES, DSDT_SIGNATURE, DSDT_REVISION, empty_definition_block};

// Juno pairs a big cluster of Cortex-A57 cores (cluster 0)
// with a LITTLE cluster of Cortex-A53 cores (cluster 1).
const fn cpu(cpu_interface_number: u32, cluster: u8, core: u8, pmu_gsiv: u32) -> CpuConfig {
    CpuConfig {
        cpu_interface_number,
        mpidr: DefinedMpidrValue::cluster_core(cluster, core),
        pmu_gsiv,
        vgic_maintenance_gsiv: 25,
        power_efficiency_class: if cluster == 0 { 1 } else { 0 },
    }
}

// REFCLK CNTControl and CNTRead
#[cfg(feature = "mem_mapped_timer")]
const SYSTEM_TIMER_BASE_ADDRESS: u64 = 0x2A43_0000;
#[cfg(feature = "mem_mapped_timer")]
const CNT_READ_BASE_ADDRESS: u64 = 0x2A80_0000;
#[cfg(not(feature = "mem_mapped_timer"))]
const SYSTEM_TIMER_BASE_ADDRESS: u64 = gtdt::ABSENT_FRAME_ADDRESS;
#[cfg(not(feature = "mem_mapped_timer"))]
const CNT_READ_BASE_ADDRESS: u64 = gtdt::ABSENT_FRAME_ADDRESS;

const GTIMER_FLAGS: TimerFlags = TimerFlags::ACTIVE_LOW;

const fn timer(gsiv: u32) -> TimerInterrupt {
    TimerInterrupt { gsiv, flags: GTIMER_FLAGS }
}

const GTX_TIMER_FLAGS: GtBlockTimerFlags = GtBlockTimerFlags::empty();
const GTX_COMMON_FLAGS_S: GtBlockCommonFlags = GtBlockCommonFlags::from_bits_truncate(
    GtBlockCommonFlags::ALWAYS_ON.bits() | GtBlockCommonFlags::SECURE.bits()
);
const GTX_COMMON_FLAGS_NS: GtBlockCommonFlags = GtBlockCommonFlags::ALWAYS_ON;

const GT_BLOCK_FRAMES: [GtFrameConfig; 2] = [
    // AP_REFCLK_S CNTBase0
    GtFrameConfig {
        frame_number: 0,
        cnt_base_address: 0x2A82_0000,
        cnt_el0_base_address: gtdt::ABSENT_FRAME_ADDRESS,
        physical_timer: GtFrameInterrupt { gsiv: 91, flags: GTX_TIMER_FLAGS },
        virtual_timer: None,
        common_flags: GTX_COMMON_FLAGS_S,
    },
    // AP_REFCLK_NS CNTBase1
    GtFrameConfig {
        frame_number: 1,
        cnt_base_address: 0x2A83_0000,
        cnt_el0_base_address: gtdt::ABSENT_FRAME_ADDRESS,
        physical_timer: GtFrameInterrupt { gsiv: 92, flags: GTX_TIMER_FLAGS },
        virtual_timer: None,
        common_flags: GTX_COMMON_FLAGS_NS,
    },
];

pub const DSDT: [u8; SDT_SIZE_IN_BYTES] =
    empty_definition_block(*DSDT_SIGNATURE, DSDT_REVISION, *b"ARMLTD", *b"ARM-JUNO", 0x2014_0727);

const fn pl011(base_address: u64, interrupt: u32) -> UartConfig {
    UartConfig {
        base_address,
        base_address_length: 0x1000,
        interrupt,
        baud_rate: 115_200,
        clock_hz: 7_372_800,
        subtype: SerialPortSubtype::ArmSbsaGenericUart,
    }
}

pub const NUM_CPUS: usize = 6;
pub const BOARD_CONFIG: BoardConfig = BoardConfig {
    name: "Arm Juno",
    cpus: &[
        cpu(0, 0, 0, 34),
        cpu(1, 0, 1, 38),

        cpu(2, 1, 0, 50),
        cpu(3, 1, 1, 54),
        cpu(4, 1, 2, 58),
        cpu(5, 1, 3, 62),
    ],
    interrupt_controller: GicV2(GicV2InterruptControllerConfig {
        distributor_base_address: 0x2C01_0000,
        cpu_interface_base_address: 0x2C02_F000,
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
        // AP_REFCLK CNTCTL
        base_address: 0x2A81_0000,
        frames: &GT_BLOCK_FRAMES,
    },
    watchdog: WatchdogConfig {
        control_frame_address: 0x2A44_0000,
        refresh_frame_address: 0x2A45_0000,
        gsiv: 93,
        // non-secure, active-high, edge-triggered
        flags: WatchdogFlags::EDGE_TRIGGERED,
    },
    console_uart: pl011(0x7FF8_0000, 115),
    debug_uart: pl011(0x7FF7_0000, 116),
    boot_arch_flags: ArmBootArchFlags::PSCI_COMPLIANT,
    fixed_feature_flags: fixed_feature_flags(),
    pm_profile: PmProfile::EnterpriseServer,
    dsdt: &DSDT,
};

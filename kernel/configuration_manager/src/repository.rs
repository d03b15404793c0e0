//! The platform repository: every CM object of the platform, built once from its board config.

use alloc::{vec, vec::Vec};
use arm_boards::{BoardConfig, InterruptControllerConfig, UartConfig};
use cm_object::{
    CmObjectToken, StdAcpiTableId, TableGeneratorId,
    std_objects::{CmStdObjAcpiTableInfo, CmStdObjConfigurationManagerInfo},
    arm_objects::*,
};
use madt::GiccFlags;
use platform_config::cm::{CFG_MGR_OEM_ID, CONFIGURATION_MANAGER_REVISION};
use sdt::signature_to_u32;

/// A GTDT GT block has at most 8 timer frames.
const MAX_GT_BLOCK_TIMER_FRAMES: usize = 8;

/// All CM objects that this platform's Configuration Manager hands out.
///
/// Objects that a board doesn't have (e.g., redistributors on a GICv2)
/// are `None` and are reported as not found.
#[derive(Debug)]
pub struct PlatformRepositoryInfo {
    pub(crate) cm_info: CmStdObjConfigurationManagerInfo,
    pub(crate) acpi_table_list: Vec<CmStdObjAcpiTableInfo>,
    pub(crate) boot_arch_info: CmArmBootArchInfo,
    pub(crate) fixed_feature_flags: Option<CmArmFixedFeatureFlags>,
    pub(crate) pm_profile_info: CmArmPowerManagementProfileInfo,
    pub(crate) gicc_info: Vec<CmArmGiccInfo>,
    pub(crate) gicd_info: CmArmGicDInfo,
    pub(crate) gic_redist_info: Option<CmArmGicRedistInfo>,
    pub(crate) gic_its_info: Option<CmArmGicItsInfo>,
    pub(crate) generic_timer_info: CmArmGenericTimerInfo,
    pub(crate) gt_block_info: [CmArmGtBlockInfo; 1],
    /// The timer frames of the only GT block, which its `gt_block_timer_frame_token` refers to.
    /// This list must never be reallocated, otherwise that token dangles.
    pub(crate) gt_block0_timer_info: Vec<CmArmGtBlockTimerFrameInfo>,
    pub(crate) watchdog: CmArmGenericWatchdogInfo,
    pub(crate) spcr_serial_port: CmArmSerialConsolePortInfo,
    pub(crate) dbg_serial_port: CmArmSerialDebugPortInfo,
}

impl PlatformRepositoryInfo {
    /// Builds the repository from the given board's hardware facts.
    pub fn new(board: &BoardConfig) -> Result<PlatformRepositoryInfo, &'static str> {
        if board.cpus.is_empty() {
            return Err("board config has no CPUs");
        }
        if board.gt_block.frames.is_empty() || board.gt_block.frames.len() > MAX_GT_BLOCK_TIMER_FRAMES {
            return Err("board config's GT block must have between 1 and 8 timer frames");
        }

        let gic = &board.interrupt_controller;
        let gicc_info = board.cpus.iter()
            .map(|cpu| CmArmGiccInfo::new(
                cpu.cpu_interface_number,
                GiccFlags::ENABLED.bits(),
                cpu.pmu_gsiv,
                gic.cpu_interface_base_address(),
                cpu.vgic_maintenance_gsiv,
                cpu.mpidr.value(),
                cpu.power_efficiency_class,
            ))
            .collect();

        let (gic_redist_info, gic_its_info) = match gic {
            InterruptControllerConfig::GicV2(_) => (None, None),
            InterruptControllerConfig::GicV3(gicv3) => (
                Some(CmArmGicRedistInfo::new(
                    gicv3.redistributor_discovery_base_address,
                    gicv3.redistributor_discovery_length,
                )),
                gicv3.its.map(|its| CmArmGicItsInfo::new(its.id, its.base_address)),
            ),
        };

        let timer = &board.generic_timer;
        let generic_timer_info = CmArmGenericTimerInfo {
            counter_control_base_address: timer.counter_control_base_address,
            counter_read_base_address:    timer.counter_read_base_address,
            secure_pl1_timer_gsiv:        timer.secure_el1.gsiv,
            secure_pl1_timer_flags:       timer.secure_el1.flags.bits(),
            non_secure_pl1_timer_gsiv:    timer.non_secure_el1.gsiv,
            non_secure_pl1_timer_flags:   timer.non_secure_el1.flags.bits(),
            virtual_timer_gsiv:           timer.virtual_el1.gsiv,
            virtual_timer_flags:          timer.virtual_el1.flags.bits(),
            non_secure_pl2_timer_gsiv:    timer.non_secure_el2.gsiv,
            non_secure_pl2_timer_flags:   timer.non_secure_el2.flags.bits(),
        };

        let gt_block0_timer_info: Vec<CmArmGtBlockTimerFrameInfo> = board.gt_block.frames.iter()
            .map(|frame| {
                let (virtual_gsiv, virtual_flags) = frame.virtual_timer
                    .map_or((0, 0), |timer| (timer.gsiv, timer.flags.bits()));
                CmArmGtBlockTimerFrameInfo::new(
                    frame.frame_number,
                    frame.cnt_base_address,
                    frame.cnt_el0_base_address,
                    frame.physical_timer.gsiv,
                    frame.physical_timer.flags.bits(),
                    virtual_gsiv,
                    virtual_flags,
                    frame.common_flags.bits(),
                )
            })
            .collect();
        // The frame list's heap buffer doesn't move with the repository,
        // so its address stays a valid token for as long as the list lives.
        let gt_block_info = [CmArmGtBlockInfo::new(
            board.gt_block.base_address,
            gt_block0_timer_info.len() as u32,
            CmObjectToken::of(&gt_block0_timer_info),
        )];

        Ok(PlatformRepositoryInfo {
            cm_info: CmStdObjConfigurationManagerInfo::new(CONFIGURATION_MANAGER_REVISION, CFG_MGR_OEM_ID),
            acpi_table_list: acpi_table_list(board),
            boot_arch_info: CmArmBootArchInfo { boot_arch_flags: board.boot_arch_flags.bits() },
            fixed_feature_flags: board.fixed_feature_flags
                .map(|flags| CmArmFixedFeatureFlags { flags: flags.bits() }),
            pm_profile_info: CmArmPowerManagementProfileInfo {
                power_management_profile: board.pm_profile.value(),
            },
            gicc_info,
            gicd_info: CmArmGicDInfo::new(gic.distributor_base_address(), 0, gic.version().value()),
            gic_redist_info,
            gic_its_info,
            generic_timer_info,
            gt_block_info,
            gt_block0_timer_info,
            watchdog: CmArmGenericWatchdogInfo {
                control_frame_address: board.watchdog.control_frame_address,
                refresh_frame_address: board.watchdog.refresh_frame_address,
                timer_gsiv: board.watchdog.gsiv,
                flags: board.watchdog.flags.bits(),
            },
            spcr_serial_port: CmArmSerialConsolePortInfo(serial_port_info(&board.console_uart)),
            dbg_serial_port: CmArmSerialDebugPortInfo(serial_port_info(&board.debug_uart)),
        })
    }

    /// Returns the token that refers to the timer frame list of the GT block.
    pub fn gt_block0_timer_frame_token(&self) -> CmObjectToken {
        CmObjectToken::of(&self.gt_block0_timer_info)
    }
}

/// The ACPI tables that this platform installs, in installation order.
fn acpi_table_list(board: &BoardConfig) -> Vec<CmStdObjAcpiTableInfo> {
    let std_table = |signature, revision, table_id| CmStdObjAcpiTableInfo::new(
        signature_to_u32(signature),
        revision,
        TableGeneratorId::std_acpi(table_id),
        0,
    );
    vec![
        std_table(fadt::FADT_SIGNATURE, fadt::FADT_REVISION, StdAcpiTableId::Fadt),
        std_table(gtdt::GTDT_SIGNATURE, gtdt::GTDT_REVISION, StdAcpiTableId::Gtdt),
        std_table(madt::MADT_SIGNATURE, madt::MADT_REVISION, StdAcpiTableId::Madt),
        std_table(spcr::SPCR_SIGNATURE, spcr::SPCR_REVISION, StdAcpiTableId::Spcr),
        // The DSDT is pre-built, so the generator ignores the revision.
        CmStdObjAcpiTableInfo::new(
            signature_to_u32(sdt::DSDT_SIGNATURE),
            0,
            TableGeneratorId::std_acpi(StdAcpiTableId::Dsdt),
            board.dsdt.as_ptr() as u64,
        ),
        std_table(dbg2::DBG2_SIGNATURE, dbg2::DBG2_DEBUG_DEVICE_INFORMATION_REVISION, StdAcpiTableId::Dbg2),
    ]
}

fn serial_port_info(uart: &UartConfig) -> CmArmSerialPortInfo {
    CmArmSerialPortInfo::new(
        uart.base_address,
        uart.interrupt,
        uart.baud_rate,
        uart.clock_hz,
        uart.subtype.value(),
        uart.base_address_length,
    )
}

//! Tests for `GetObject` and `SetObject` against the FVP and Juno repositories.

extern crate std;

use super::*;
use arm_boards::{BoardConfig, GenericTimerConfig, GtBlockConfig, boards::{fvp, juno}};
use cm_object::{
    StdAcpiTableId, TableGeneratorId,
    arm_objects::*,
    std_objects::{CmStdObjAcpiTableInfo, CmStdObjConfigurationManagerInfo},
};
use platform_config::cm::{CFG_MGR_OEM_ID, CONFIGURATION_MANAGER_REVISION};

fn fvp_cm() -> ConfigurationManager {
    ConfigurationManager::new(&fvp::BOARD_CONFIG).unwrap()
}

fn juno_cm() -> ConfigurationManager {
    ConfigurationManager::new(&juno::BOARD_CONFIG).unwrap()
}

fn arm(id: ArmObjectId) -> CmObjectId {
    CmObjectId::arm(id)
}

fn assert_found(cm: &ConfigurationManager, id: CmObjectId, size: usize, count: usize) {
    let desc = cm.get_object(id, CmObjectToken::NULL).unwrap();
    assert_eq!(desc.object_id(), id);
    assert_eq!(desc.size(), size);
    assert_eq!(desc.count(), count);
    assert_eq!(desc.data().len(), size);
}

#[test]
fn fvp_object_sizes_and_counts() {
    let cm = fvp_cm();
    assert_found(&cm, CmObjectId::standard(StdObjectId::CfgMgrInfo), 12, 1);
    assert_found(&cm, CmObjectId::standard(StdObjectId::AcpiTableList), 6 * 40, 6);
    assert_found(&cm, arm(ArmObjectId::BootArchInfo), 2, 1);
    assert_found(&cm, arm(ArmObjectId::PowerManagementProfileInfo), 1, 1);
    assert_found(&cm, arm(ArmObjectId::GicCInfo), fvp::NUM_CPUS * 88, fvp::NUM_CPUS);
    assert_found(&cm, arm(ArmObjectId::GicDInfo), 16, 1);
    assert_found(&cm, arm(ArmObjectId::GicRedistributorInfo), 16, 1);
    assert_found(&cm, arm(ArmObjectId::GicItsInfo), 16, 1);
    assert_found(&cm, arm(ArmObjectId::GenericTimerInfo), 48, 1);
    assert_found(&cm, arm(ArmObjectId::PlatformGtBlockInfo), 24, 1);
    assert_found(&cm, arm(ArmObjectId::GtBlockTimerFrameInfo), 2 * 48, 2);
    assert_found(&cm, arm(ArmObjectId::PlatformGenericWatchdogInfo), 24, 1);
    assert_found(&cm, arm(ArmObjectId::SerialConsolePortInfo), 40, 1);
    assert_found(&cm, arm(ArmObjectId::SerialDebugPortInfo), 40, 1);
}

#[test]
fn element_size_is_size_over_count() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::GicCInfo), CmObjectToken::NULL).unwrap();
    assert_eq!(desc.element_size(), 88);
    let desc = cm.get_object(CmObjectId::standard(StdObjectId::AcpiTableList), CmObjectToken::NULL).unwrap();
    assert_eq!(desc.element_size(), 40);
}

#[test]
fn cfg_mgr_info() {
    let cm = fvp_cm();
    let desc = cm.get_object(CmObjectId::standard(StdObjectId::CfgMgrInfo), CmObjectToken::NULL).unwrap();
    let info = desc.objects::<CmStdObjConfigurationManagerInfo>().unwrap();
    assert_eq!(info[0].revision, CONFIGURATION_MANAGER_REVISION);
    assert_eq!(info[0].oem_id, CFG_MGR_OEM_ID);
}

#[test]
fn acpi_table_list_order() {
    let board = fvp::BOARD_CONFIG;
    let cm = ConfigurationManager::new(&board).unwrap();
    let desc = cm.get_object(CmObjectId::standard(StdObjectId::AcpiTableList), CmObjectToken::NULL).unwrap();
    let tables = desc.objects::<CmStdObjAcpiTableInfo>().unwrap();
    let expected = [
        (b"FACP", 6, StdAcpiTableId::Fadt),
        (b"GTDT", 2, StdAcpiTableId::Gtdt),
        (b"APIC", 4, StdAcpiTableId::Madt),
        (b"SPCR", 2, StdAcpiTableId::Spcr),
        (b"DSDT", 0, StdAcpiTableId::Dsdt),
        (b"DBG2", 0, StdAcpiTableId::Dbg2),
    ];
    assert_eq!(tables.len(), expected.len());
    for (table, (signature, revision, table_id)) in tables.iter().zip(expected) {
        assert_eq!(table.acpi_table_signature, u32::from_le_bytes(*signature));
        assert_eq!(table.acpi_table_revision, revision);
        assert_eq!(table.table_generator_id, TableGeneratorId::std_acpi(table_id));
    }

    // only the DSDT is pre-built
    for table in tables {
        if table.table_generator_id == TableGeneratorId::std_acpi(StdAcpiTableId::Dsdt) {
            assert_eq!(table.acpi_table_data, board.dsdt.as_ptr() as u64);
        } else {
            assert_eq!(table.acpi_table_data, 0);
        }
    }
}

#[test]
fn gicc_info_describes_every_cpu() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::GicCInfo), CmObjectToken::NULL).unwrap();
    let giccs = desc.objects::<CmArmGiccInfo>().unwrap();
    for (gicc, cpu) in giccs.iter().zip(fvp::BOARD_CONFIG.cpus) {
        assert_eq!(gicc.cpu_interface_number, cpu.cpu_interface_number);
        assert_eq!(gicc.acpi_processor_uid, cpu.cpu_interface_number);
        assert_eq!(gicc.mpidr, cpu.mpidr.value());
        assert_eq!(gicc.performance_interrupt_gsiv, cpu.pmu_gsiv);
        assert_eq!(gicc.flags, madt::GiccFlags::ENABLED.bits());
        assert_eq!(gicc.physical_base_address, 0x2C00_0000);
    }
    assert_eq!(giccs[7].mpidr, 0x103);
}

#[test]
fn gt_block_timer_frames_by_token() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::PlatformGtBlockInfo), CmObjectToken::NULL).unwrap();
    let block = desc.objects::<CmArmGtBlockInfo>().unwrap()[0];
    assert_eq!(block.gt_block_physical_address, 0x2A81_0000);
    assert_eq!(block.gt_block_timer_frame_count, 2);
    assert_eq!(block.gt_block_timer_frame_token, cm.repository().gt_block0_timer_frame_token());

    let desc = cm.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), block.gt_block_timer_frame_token).unwrap();
    assert_eq!(desc.count(), 2);
    let frames = desc.objects::<CmArmGtBlockTimerFrameInfo>().unwrap();
    assert_eq!(frames[0].frame_number, 0);
    assert_eq!(frames[0].physical_timer_gsiv, 57);
    assert_eq!(frames[1].physical_timer_gsiv, 58);
    assert_eq!(frames[0].common_flags & 0x1, 0x1);
    assert_eq!(frames[1].common_flags & 0x1, 0);
    // frames without a virtual timer describe it as absent
    assert_eq!(frames[0].virtual_timer_gsiv, 0);
    assert_eq!(frames[0].virtual_timer_flags, 0);
}

#[test]
fn gt_block_timer_frames_with_null_token() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), CmObjectToken::NULL).unwrap();
    assert_eq!(desc.count(), 2);
    assert_eq!(desc.size(), 96);
}

#[test]
fn gt_block_timer_frames_with_wrong_token() {
    let cm = fvp_cm();
    let token = cm.repository().gt_block0_timer_frame_token();
    let wrong = CmObjectToken::new(token.value() + 1);
    let result = cm.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), wrong);
    assert_eq!(result.unwrap_err(), CmError::NotFound);
}

#[test]
fn token_survives_moving_the_configuration_manager() {
    let cm = fvp_cm();
    let token = cm.repository().gt_block0_timer_frame_token();
    let moved = std::boxed::Box::new(cm);
    let desc = moved.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), token).unwrap();
    assert_eq!(desc.count(), 2);
}

#[test]
fn serial_ports() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::SerialConsolePortInfo), CmObjectToken::NULL).unwrap();
    let console = desc.objects::<CmArmSerialConsolePortInfo>().unwrap()[0].0;
    assert_eq!(console.base_address, 0x1C09_0000);
    assert_eq!(console.interrupt, 37);
    assert_eq!(console.baud_rate, 115200);
    assert_eq!(console.port_subtype, dbg2::SerialPortSubtype::ArmSbsaGenericUart.value());

    let desc = cm.get_object(arm(ArmObjectId::SerialDebugPortInfo), CmObjectToken::NULL).unwrap();
    let debug = desc.objects::<CmArmSerialDebugPortInfo>().unwrap()[0].0;
    assert_eq!(debug.base_address, 0x1C0A_0000);
    assert_eq!(debug.interrupt, 39);
}

#[test]
fn typed_view_of_the_wrong_record_type_fails() {
    let cm = fvp_cm();
    let desc = cm.get_object(arm(ArmObjectId::SerialConsolePortInfo), CmObjectToken::NULL).unwrap();
    assert_eq!(desc.objects::<CmArmSerialDebugPortInfo>().unwrap_err(), CmError::BadBufferSize);
    assert_eq!(desc.objects::<CmArmGicDInfo>().unwrap_err(), CmError::BadBufferSize);
}

#[test]
fn unsupported_objects_are_not_found() {
    let cm = fvp_cm();
    for id in [
        ArmObjectId::Reserved,
        ArmObjectId::CpuInfo,
        ArmObjectId::GicMsiFrameInfo,
        ArmObjectId::PciConfigSpaceInfo,
        ArmObjectId::ItsGroup,
        ArmObjectId::SerialPortInfo,
    ] {
        assert_eq!(cm.get_object(arm(id), CmObjectToken::NULL).unwrap_err(), CmError::NotFound);
    }
    // object ids past the end of the Arm namespace
    assert_eq!(cm.get_object(CmObjectId::new(1, 0xFF), CmObjectToken::NULL).unwrap_err(), CmError::NotFound);
    assert_eq!(
        cm.get_object(CmObjectId::standard(StdObjectId::SmbiosTableList), CmObjectToken::NULL).unwrap_err(),
        CmError::NotFound,
    );
    assert_eq!(cm.get_object(CmObjectId::oem(0), CmObjectToken::NULL).unwrap_err(), CmError::NotFound);
}

#[test]
fn fixed_feature_flags_only_on_headless_builds() {
    let cm = fvp_cm();
    let result = cm.get_object(arm(ArmObjectId::FixedFeatureFlags), CmObjectToken::NULL);
    if fvp::BOARD_CONFIG.fixed_feature_flags.is_some() {
        assert_eq!(result.unwrap().size(), 4);
    } else {
        assert_eq!(result.unwrap_err(), CmError::NotFound);
    }
}

#[test]
fn headless_board_without_counter_frames() {
    let board = BoardConfig {
        fixed_feature_flags: Some(fadt::FixedFeatureFlags::HEADLESS),
        generic_timer: GenericTimerConfig {
            counter_control_base_address: gtdt::ABSENT_FRAME_ADDRESS,
            counter_read_base_address: gtdt::ABSENT_FRAME_ADDRESS,
            ..fvp::BOARD_CONFIG.generic_timer
        },
        ..fvp::BOARD_CONFIG
    };
    let cm = ConfigurationManager::new(&board).unwrap();

    assert_found(&cm, arm(ArmObjectId::FixedFeatureFlags), 4, 1);
    let desc = cm.get_object(arm(ArmObjectId::FixedFeatureFlags), CmObjectToken::NULL).unwrap();
    assert_eq!(desc.objects::<CmArmFixedFeatureFlags>().unwrap()[0].flags, 0x1000);

    let desc = cm.get_object(arm(ArmObjectId::GenericTimerInfo), CmObjectToken::NULL).unwrap();
    let timer = desc.objects::<CmArmGenericTimerInfo>().unwrap()[0];
    assert_eq!(timer.counter_control_base_address, u64::MAX);
    assert_eq!(timer.counter_read_base_address, u64::MAX);
    assert_eq!(timer.non_secure_pl1_timer_gsiv, fvp::BOARD_CONFIG.generic_timer.non_secure_el1.gsiv);
}

#[test]
fn gt_block_without_frames_is_rejected() {
    let board = BoardConfig {
        gt_block: GtBlockConfig { frames: &[], ..fvp::BOARD_CONFIG.gt_block },
        ..fvp::BOARD_CONFIG
    };
    assert!(ConfigurationManager::new(&board).is_err());
}

#[test]
fn unknown_namespace_is_invalid() {
    let cm = fvp_cm();
    for namespace in [2, 3, 7, 9, 0xF] {
        assert_eq!(
            cm.get_object(CmObjectId::new(namespace, 1), CmObjectToken::NULL).unwrap_err(),
            CmError::InvalidParameter,
        );
    }
}

#[test]
fn set_object_is_unsupported() {
    let cm = fvp_cm();
    let id = arm(ArmObjectId::BootArchInfo);
    let desc = cm.get_object(id, CmObjectToken::NULL).unwrap();
    assert_eq!(cm.set_object(id, CmObjectToken::NULL, &desc), Err(CmError::Unsupported));
    // unknown ids are rejected the same way
    let unknown = CmObjectId::new(0xF, 0xFF);
    assert_eq!(cm.set_object(unknown, CmObjectToken::NULL, &desc), Err(CmError::Unsupported));
}

#[test]
fn juno_has_no_redistributors_or_its() {
    let cm = juno_cm();
    assert_found(&cm, arm(ArmObjectId::GicCInfo), juno::NUM_CPUS * 88, juno::NUM_CPUS);
    assert_eq!(cm.get_object(arm(ArmObjectId::GicRedistributorInfo), CmObjectToken::NULL).unwrap_err(), CmError::NotFound);
    assert_eq!(cm.get_object(arm(ArmObjectId::GicItsInfo), CmObjectToken::NULL).unwrap_err(), CmError::NotFound);

    let desc = cm.get_object(arm(ArmObjectId::GicDInfo), CmObjectToken::NULL).unwrap();
    let gicd = desc.objects::<CmArmGicDInfo>().unwrap()[0];
    assert_eq!(gicd.gic_version, 2);
    assert_eq!(gicd.physical_base_address, 0x2C01_0000);
}

#[test]
fn juno_watchdog_and_timer_frames() {
    let cm = juno_cm();
    let desc = cm.get_object(arm(ArmObjectId::PlatformGenericWatchdogInfo), CmObjectToken::NULL).unwrap();
    let watchdog = desc.objects::<CmArmGenericWatchdogInfo>().unwrap()[0];
    assert_eq!(watchdog.timer_gsiv, 93);
    assert_eq!(watchdog.flags, gtdt::WatchdogFlags::EDGE_TRIGGERED.bits());

    let token = cm.repository().gt_block0_timer_frame_token();
    let desc = cm.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), token).unwrap();
    let frames = desc.objects::<CmArmGtBlockTimerFrameInfo>().unwrap();
    assert_eq!(frames[0].physical_timer_gsiv, 91);
    assert_eq!(frames[1].physical_timer_gsiv, 92);
}

#[test]
fn tokens_are_per_repository() {
    let fvp = fvp_cm();
    let juno = juno_cm();
    let juno_token = juno.repository().gt_block0_timer_frame_token();
    assert_eq!(
        fvp.get_object(arm(ArmObjectId::GtBlockTimerFrameInfo), juno_token).unwrap_err(),
        CmError::NotFound,
    );
}

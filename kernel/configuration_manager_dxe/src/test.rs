//! Tests for the protocol functions, called the way a table generator calls them.

extern crate std;

use super::*;
use arm_boards::boards::{fvp, juno};
use cm_object::{ArmObjectId, StdObjectId, arm_objects::CmArmGtBlockInfo};
use self::std::boxed::Box;

fn protocol_for(board: &arm_boards::BoardConfig) -> ConfigurationManagerProtocol {
    let cm: &'static ConfigurationManager = Box::leak(Box::new(ConfigurationManager::new(board).unwrap()));
    ConfigurationManagerProtocol::new(cm)
}

fn get(protocol: &ConfigurationManagerProtocol, id: CmObjectId, token: usize) -> (Status, CmObjDescriptorRaw) {
    let mut raw = CmObjDescriptorRaw::empty();
    let status = unsafe { (protocol.get_object)(protocol, id.value(), token, &mut raw) };
    (status, raw)
}

#[test]
fn protocol_identity() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    assert_eq!(protocol.revision, 0x0001_0000);
    assert_eq!(
        CONFIGURATION_MANAGER_PROTOCOL_GUID,
        Guid::from_bytes([
            0x35, 0x48, 0x5A, 0xD8, 0x82, 0x5A, 0x94, 0x48,
            0xAC, 0x02, 0x70, 0x6F, 0x43, 0xD5, 0x97, 0x8E,
        ]),
    );
}

#[test]
fn get_object_null_pointers() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    let id = CmObjectId::arm(ArmObjectId::GicCInfo).value();
    let mut raw = CmObjDescriptorRaw::empty();
    unsafe {
        assert_eq!(get_object(ptr::null(), id, 0, &mut raw), Status::INVALID_PARAMETER);
        assert_eq!(get_object(&protocol, id, 0, ptr::null_mut()), Status::INVALID_PARAMETER);
    }
    // nothing was written
    assert!(raw.data.is_null());
    assert_eq!(raw.count, 0);
}

#[test]
fn get_object_fills_in_the_descriptor() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    let id = CmObjectId::arm(ArmObjectId::GicCInfo);
    let (status, raw) = get(&protocol, id, 0);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(raw.object_id, id.value());
    assert_eq!(raw.count as usize, fvp::NUM_CPUS);
    assert_eq!(raw.size as usize, fvp::NUM_CPUS * 88);

    let cm = unsafe { &*protocol.plat_repo_info };
    let expected = cm.get_object(id, CmObjectToken::NULL).unwrap();
    assert_eq!(raw.data as *const u8, expected.data().as_ptr());
}

#[test]
fn get_object_errors_become_statuses() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    let (status, raw) = get(&protocol, CmObjectId::standard(StdObjectId::SmbiosTableList), 0);
    assert_eq!(status, Status::NOT_FOUND);
    assert!(raw.data.is_null());
    let (status, _) = get(&protocol, CmObjectId::new(5, 0), 0);
    assert_eq!(status, Status::INVALID_PARAMETER);
    let (status, _) = get(&protocol, CmObjectId::arm(ArmObjectId::GtBlockTimerFrameInfo), 0x10);
    assert_eq!(status, Status::NOT_FOUND);

    let juno = protocol_for(&juno::BOARD_CONFIG);
    let (status, _) = get(&juno, CmObjectId::arm(ArmObjectId::GicItsInfo), 0);
    assert_eq!(status, Status::NOT_FOUND);
}

#[test]
fn gt_block_token_round_trip() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    let (status, raw) = get(&protocol, CmObjectId::arm(ArmObjectId::PlatformGtBlockInfo), 0);
    assert_eq!(status, Status::SUCCESS);
    let block = unsafe { &*(raw.data as *const CmArmGtBlockInfo) };

    let (status, raw) = get(
        &protocol,
        CmObjectId::arm(ArmObjectId::GtBlockTimerFrameInfo),
        block.gt_block_timer_frame_token.value(),
    );
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(raw.count, 2);
    assert_eq!(raw.size, 96);
}

#[test]
fn set_object_is_unsupported() {
    let protocol = protocol_for(&fvp::BOARD_CONFIG);
    let id = CmObjectId::arm(ArmObjectId::BootArchInfo);
    let (_, mut raw) = get(&protocol, id, 0);
    unsafe {
        assert_eq!((protocol.set_object)(&protocol, id.value(), 0, &mut raw), Status::UNSUPPORTED);
        let mut empty = CmObjDescriptorRaw::empty();
        assert_eq!((protocol.set_object)(&protocol, id.value(), 0, &mut empty), Status::UNSUPPORTED);
        assert_eq!(set_object(&protocol, 0xF000_00FF, 0x10, &mut raw), Status::UNSUPPORTED);
    }
}

#[test]
fn set_object_ignores_its_arguments() {
    let mut protocol = protocol_for(&fvp::BOARD_CONFIG);
    let id = CmObjectId::arm(ArmObjectId::GicDInfo).value();
    // a descriptor whose data pointer must never be read
    let mut bogus = CmObjDescriptorRaw {
        object_id: id,
        size: u32::MAX,
        data: 0x10 as *mut c_void,
        count: 1,
    };
    unsafe {
        assert_eq!(set_object(ptr::null(), id, 0, &mut bogus), Status::UNSUPPORTED);
        assert_eq!(set_object(&protocol, id, 0, ptr::null_mut()), Status::UNSUPPORTED);
        assert_eq!(set_object(&protocol, id, 0, &mut bogus), Status::UNSUPPORTED);
        protocol.plat_repo_info = ptr::null();
        assert_eq!((protocol.set_object)(&protocol, id, 0, &mut bogus), Status::UNSUPPORTED);
    }
}

#[test]
fn protocol_without_a_configuration_manager() {
    let mut protocol = protocol_for(&fvp::BOARD_CONFIG);
    protocol.plat_repo_info = ptr::null();
    let (status, _) = get(&protocol, CmObjectId::arm(ArmObjectId::GicDInfo), 0);
    assert_eq!(status, Status::INVALID_PARAMETER);
}

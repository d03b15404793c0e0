//! Records of the [`ObjectNamespace::Arm`](crate::ObjectNamespace::Arm) namespace.
//!
//! Flag fields hold the raw ACPI bit patterns; the `gtdt`, `madt` and `fadt`
//! crates define their meaning.

use core::mem::{align_of, size_of};
use zerocopy::{AsBytes, FromBytes, FromZeroes};
use crate::{ArmObjectId, CmObject, CmObjectId, CmObjectToken};

macro_rules! arm_cm_object {
    ($record:ty, $id:ident) => {
        impl CmObject for $record {
            const OBJECT_ID: CmObjectId = CmObjectId::arm(ArmObjectId::$id);
        }
    };
}


/// The FADT `ARM_BOOT_ARCH` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmBootArchInfo {
    pub boot_arch_flags: u16,
}
const _: () = assert!(size_of::<CmArmBootArchInfo>() == 2);
arm_cm_object!(CmArmBootArchInfo, BootArchInfo);

/// The FADT fixed feature flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmFixedFeatureFlags {
    pub flags: u32,
}
const _: () = assert!(size_of::<CmArmFixedFeatureFlags>() == 4);
arm_cm_object!(CmArmFixedFeatureFlags, FixedFeatureFlags);

/// The FADT preferred power management profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmPowerManagementProfileInfo {
    pub power_management_profile: u8,
}
const _: () = assert!(size_of::<CmArmPowerManagementProfileInfo>() == 1);
arm_cm_object!(CmArmPowerManagementProfileInfo, PowerManagementProfileInfo);


/// A GIC CPU interface, one per core. Becomes a MADT GICC entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGiccInfo {
    pub cpu_interface_number: u32,
    pub acpi_processor_uid: u32,
    pub flags: u32,
    pub parking_protocol_version: u32,
    /// The GSIV of the core's performance monitoring interrupt.
    pub performance_interrupt_gsiv: u32,
    _reserved0: u32,
    pub parked_address: u64,
    /// The base address of the GIC CPU interface registers.
    pub physical_base_address: u64,
    pub gicv: u64,
    pub gich: u64,
    pub vgic_maintenance_interrupt: u32,
    _reserved1: u32,
    /// Zero when redistributors are described by discovery ranges instead.
    pub gicr_base_address: u64,
    pub mpidr: u64,
    pub processor_power_efficiency_class: u8,
    _reserved2: [u8; 7],
}
const _: () = assert!(size_of::<CmArmGiccInfo>() == 88);
const _: () = assert!(align_of::<CmArmGiccInfo>() == 8);
arm_cm_object!(CmArmGiccInfo, GicCInfo);

impl CmArmGiccInfo {
    /// Describes an enabled core that uses neither the parking protocol,
    /// a virtual GIC interface, nor a per-core redistributor address.
    pub const fn new(
        cpu_interface_number: u32,
        flags: u32,
        performance_interrupt_gsiv: u32,
        physical_base_address: u64,
        vgic_maintenance_interrupt: u32,
        mpidr: u64,
        processor_power_efficiency_class: u8,
    ) -> Self {
        Self {
            cpu_interface_number,
            acpi_processor_uid: cpu_interface_number,
            flags,
            parking_protocol_version: 0,
            performance_interrupt_gsiv,
            _reserved0: 0,
            parked_address: 0,
            physical_base_address,
            gicv: 0,
            gich: 0,
            vgic_maintenance_interrupt,
            _reserved1: 0,
            gicr_base_address: 0,
            mpidr,
            processor_power_efficiency_class,
            _reserved2: [0; 7],
        }
    }
}

/// The GIC distributor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGicDInfo {
    pub physical_base_address: u64,
    pub system_vector_base: u32,
    pub gic_version: u8,
    _reserved: [u8; 3],
}
const _: () = assert!(size_of::<CmArmGicDInfo>() == 16);
arm_cm_object!(CmArmGicDInfo, GicDInfo);

impl CmArmGicDInfo {
    pub const fn new(physical_base_address: u64, system_vector_base: u32, gic_version: u8) -> Self {
        Self { physical_base_address, system_vector_base, gic_version, _reserved: [0; 3] }
    }
}

/// A range of GIC redistributors that the OS discovers by probing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGicRedistInfo {
    pub discovery_range_base_address: u64,
    pub discovery_range_length: u32,
    _reserved: u32,
}
const _: () = assert!(size_of::<CmArmGicRedistInfo>() == 16);
arm_cm_object!(CmArmGicRedistInfo, GicRedistributorInfo);

impl CmArmGicRedistInfo {
    pub const fn new(discovery_range_base_address: u64, discovery_range_length: u32) -> Self {
        Self { discovery_range_base_address, discovery_range_length, _reserved: 0 }
    }
}

/// A GIC Interrupt Translation Service block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGicItsInfo {
    pub gic_its_id: u32,
    _reserved: u32,
    pub physical_base_address: u64,
}
const _: () = assert!(size_of::<CmArmGicItsInfo>() == 16);
arm_cm_object!(CmArmGicItsInfo, GicItsInfo);

impl CmArmGicItsInfo {
    pub const fn new(gic_its_id: u32, physical_base_address: u64) -> Self {
        Self { gic_its_id, _reserved: 0, physical_base_address }
    }
}


/// The architected per-processor timers and the system counter frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGenericTimerInfo {
    pub counter_control_base_address: u64,
    pub counter_read_base_address: u64,
    pub secure_pl1_timer_gsiv: u32,
    pub secure_pl1_timer_flags: u32,
    pub non_secure_pl1_timer_gsiv: u32,
    pub non_secure_pl1_timer_flags: u32,
    pub virtual_timer_gsiv: u32,
    pub virtual_timer_flags: u32,
    pub non_secure_pl2_timer_gsiv: u32,
    pub non_secure_pl2_timer_flags: u32,
}
const _: () = assert!(size_of::<CmArmGenericTimerInfo>() == 48);
arm_cm_object!(CmArmGenericTimerInfo, GenericTimerInfo);

/// A memory-mapped GT block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGtBlockInfo {
    pub gt_block_physical_address: u64,
    pub gt_block_timer_frame_count: u32,
    _reserved: u32,
    /// Refers to this block's list of [`CmArmGtBlockTimerFrameInfo`].
    pub gt_block_timer_frame_token: CmObjectToken,
}
const _: () = assert!(size_of::<CmArmGtBlockInfo>() == 24);
arm_cm_object!(CmArmGtBlockInfo, PlatformGtBlockInfo);

impl CmArmGtBlockInfo {
    pub const fn new(
        gt_block_physical_address: u64,
        gt_block_timer_frame_count: u32,
        gt_block_timer_frame_token: CmObjectToken,
    ) -> Self {
        Self { gt_block_physical_address, gt_block_timer_frame_count, _reserved: 0, gt_block_timer_frame_token }
    }
}

/// One timer frame of a GT block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGtBlockTimerFrameInfo {
    pub frame_number: u8,
    _reserved0: [u8; 7],
    pub physical_address_cnt_base: u64,
    pub physical_address_cnt_el0_base: u64,
    pub physical_timer_gsiv: u32,
    pub physical_timer_flags: u32,
    pub virtual_timer_gsiv: u32,
    pub virtual_timer_flags: u32,
    pub common_flags: u32,
    _reserved1: u32,
}
const _: () = assert!(size_of::<CmArmGtBlockTimerFrameInfo>() == 48);
arm_cm_object!(CmArmGtBlockTimerFrameInfo, GtBlockTimerFrameInfo);

impl CmArmGtBlockTimerFrameInfo {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        frame_number: u8,
        physical_address_cnt_base: u64,
        physical_address_cnt_el0_base: u64,
        physical_timer_gsiv: u32,
        physical_timer_flags: u32,
        virtual_timer_gsiv: u32,
        virtual_timer_flags: u32,
        common_flags: u32,
    ) -> Self {
        Self {
            frame_number,
            _reserved0: [0; 7],
            physical_address_cnt_base,
            physical_address_cnt_el0_base,
            physical_timer_gsiv,
            physical_timer_flags,
            virtual_timer_gsiv,
            virtual_timer_flags,
            common_flags,
            _reserved1: 0,
        }
    }
}

/// An SBSA generic watchdog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmGenericWatchdogInfo {
    pub control_frame_address: u64,
    pub refresh_frame_address: u64,
    pub timer_gsiv: u32,
    pub flags: u32,
}
const _: () = assert!(size_of::<CmArmGenericWatchdogInfo>() == 24);
arm_cm_object!(CmArmGenericWatchdogInfo, PlatformGenericWatchdogInfo);


/// A serial port, used for both the SPCR console and the DBG2 debug port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmArmSerialPortInfo {
    pub base_address: u64,
    pub interrupt: u32,
    _reserved0: u32,
    pub baud_rate: u64,
    pub clock: u32,
    /// A DBG2 serial port subtype.
    pub port_subtype: u16,
    _reserved1: u16,
    pub base_address_length: u64,
}
const _: () = assert!(size_of::<CmArmSerialPortInfo>() == 40);

impl CmArmSerialPortInfo {
    pub const fn new(
        base_address: u64,
        interrupt: u32,
        baud_rate: u64,
        clock: u32,
        port_subtype: u16,
        base_address_length: u64,
    ) -> Self {
        Self {
            base_address,
            interrupt,
            _reserved0: 0,
            baud_rate,
            clock,
            port_subtype,
            _reserved1: 0,
            base_address_length,
        }
    }
}

/// The serial port that the SPCR describes.
///
/// The console and debug ports share the [`CmArmSerialPortInfo`] layout
/// but are requested under different ids, so each gets its own record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(transparent)]
pub struct CmArmSerialConsolePortInfo(pub CmArmSerialPortInfo);
arm_cm_object!(CmArmSerialConsolePortInfo, SerialConsolePortInfo);

/// The serial port that the DBG2 describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(transparent)]
pub struct CmArmSerialDebugPortInfo(pub CmArmSerialPortInfo);
arm_cm_object!(CmArmSerialDebugPortInfo, SerialDebugPortInfo);

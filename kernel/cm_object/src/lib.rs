//! The Configuration Manager object model.
//!
//! A CM object is a record that an ACPI table generator asks the
//! platform's Configuration Manager for. It is addressed by a [`CmObjectId`],
//! which combines an [`ObjectNamespace`] with an object id inside it,
//! and optionally by a [`CmObjectToken`] that selects one list among several.
//!
//! The records themselves are in [`std_objects`] and [`arm_objects`].
//! Their layouts are the firmware ABI shared with the table generator,
//! so each one is `repr(C)` with its padding spelled out.

#![no_std]

mod error;
mod table_generator;
pub mod arm_objects;
pub mod std_objects;

pub use error::CmError;
pub use table_generator::*;

use core::mem::size_of;
use derive_more::{Display, LowerHex, UpperHex};
use zerocopy::{AsBytes, FromBytes, FromZeroes};


const NAMESPACE_ID_BIT_SHIFT: u32 = 28;
const NAMESPACE_ID_MASK:      u32 = 0xF;
const OBJECT_ID_BIT_SHIFT:    u32 = 0;
const OBJECT_ID_MASK:         u32 = 0xFF;

/// The namespaces that CM object ids live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ObjectNamespace {
    /// Architecture-independent objects, see [`StdObjectId`].
    Standard = 0x0,
    /// Arm-specific objects, see [`ArmObjectId`].
    Arm      = 0x1,
    /// Objects private to an OEM's own table generators.
    Oem      = 0x8,
}

impl TryFrom<u32> for ObjectNamespace {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(ObjectNamespace::Standard),
            0x1 => Ok(ObjectNamespace::Arm),
            0x8 => Ok(ObjectNamespace::Oem),
            other => Err(other),
        }
    }
}

/// Object ids in the [`ObjectNamespace::Standard`] namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum StdObjectId {
    CfgMgrInfo      = 0,
    AcpiTableList   = 1,
    SmbiosTableList = 2,
}

impl TryFrom<u8> for StdObjectId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StdObjectId::CfgMgrInfo),
            1 => Ok(StdObjectId::AcpiTableList),
            2 => Ok(StdObjectId::SmbiosTableList),
            other => Err(other),
        }
    }
}

/// Object ids in the [`ObjectNamespace::Arm`] namespace.
///
/// The numbering is fixed: table generators and configuration managers
/// are built separately and only agree on these values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ArmObjectId {
    Reserved                    = 0,
    BootArchInfo                = 1,
    CpuInfo                     = 2,
    PowerManagementProfileInfo  = 3,
    GicCInfo                    = 4,
    GicDInfo                    = 5,
    GicMsiFrameInfo             = 6,
    GicRedistributorInfo        = 7,
    GicItsInfo                  = 8,
    SerialConsolePortInfo       = 9,
    SerialDebugPortInfo         = 10,
    GenericTimerInfo            = 11,
    PlatformGtBlockInfo         = 12,
    GtBlockTimerFrameInfo       = 13,
    PlatformGenericWatchdogInfo = 14,
    PciConfigSpaceInfo          = 15,
    HypervisorVendorIdentity    = 16,
    FixedFeatureFlags           = 17,
    ItsGroup                    = 18,
    NamedComponent              = 19,
    RootComplex                 = 20,
    SmmuV1SmmuV2                = 21,
    SmmuV3                      = 22,
    Pmcg                        = 23,
    GicItsIdentifierArray       = 24,
    IdMapping                   = 25,
    SmmuInterruptArray          = 26,
    ProcHierarchyInfo           = 27,
    CacheInfo                   = 28,
    ProcNodeIdInfo              = 29,
    CmRef                       = 30,
    MemoryAffinityInfo          = 31,
    DeviceHandleAcpi            = 32,
    DeviceHandlePci             = 33,
    GenericInitiatorAffinityInfo = 34,
    SerialPortInfo              = 35,
}

impl ArmObjectId {
    const ALL: [ArmObjectId; 36] = [
        ArmObjectId::Reserved, ArmObjectId::BootArchInfo, ArmObjectId::CpuInfo,
        ArmObjectId::PowerManagementProfileInfo, ArmObjectId::GicCInfo, ArmObjectId::GicDInfo,
        ArmObjectId::GicMsiFrameInfo, ArmObjectId::GicRedistributorInfo, ArmObjectId::GicItsInfo,
        ArmObjectId::SerialConsolePortInfo, ArmObjectId::SerialDebugPortInfo,
        ArmObjectId::GenericTimerInfo, ArmObjectId::PlatformGtBlockInfo,
        ArmObjectId::GtBlockTimerFrameInfo, ArmObjectId::PlatformGenericWatchdogInfo,
        ArmObjectId::PciConfigSpaceInfo, ArmObjectId::HypervisorVendorIdentity,
        ArmObjectId::FixedFeatureFlags, ArmObjectId::ItsGroup, ArmObjectId::NamedComponent,
        ArmObjectId::RootComplex, ArmObjectId::SmmuV1SmmuV2, ArmObjectId::SmmuV3,
        ArmObjectId::Pmcg, ArmObjectId::GicItsIdentifierArray, ArmObjectId::IdMapping,
        ArmObjectId::SmmuInterruptArray, ArmObjectId::ProcHierarchyInfo, ArmObjectId::CacheInfo,
        ArmObjectId::ProcNodeIdInfo, ArmObjectId::CmRef, ArmObjectId::MemoryAffinityInfo,
        ArmObjectId::DeviceHandleAcpi, ArmObjectId::DeviceHandlePci,
        ArmObjectId::GenericInitiatorAffinityInfo, ArmObjectId::SerialPortInfo,
    ];
}

impl TryFrom<u8> for ArmObjectId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ArmObjectId::ALL.get(value as usize).copied().ok_or(value)
    }
}


/// A namespace-qualified CM object identifier.
///
/// The namespace occupies bits 28 to 31 and the object id bits 0 to 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, LowerHex, UpperHex)]
#[repr(transparent)]
pub struct CmObjectId(u32);

impl CmObjectId {
    /// Creates an object id from raw namespace and object id numbers,
    /// truncating each one to the width of its field.
    pub const fn new(namespace: u32, object_id: u32) -> CmObjectId {
        CmObjectId(
            ((namespace & NAMESPACE_ID_MASK) << NAMESPACE_ID_BIT_SHIFT)
            | ((object_id & OBJECT_ID_MASK) << OBJECT_ID_BIT_SHIFT)
        )
    }

    pub const fn standard(id: StdObjectId) -> CmObjectId {
        CmObjectId::new(ObjectNamespace::Standard as u32, id as u32)
    }

    pub const fn arm(id: ArmObjectId) -> CmObjectId {
        CmObjectId::new(ObjectNamespace::Arm as u32, id as u32)
    }

    pub const fn oem(object_id: u8) -> CmObjectId {
        CmObjectId::new(ObjectNamespace::Oem as u32, object_id as u32)
    }

    /// Wraps an object id received over the protocol boundary.
    pub const fn from_raw(value: u32) -> CmObjectId {
        CmObjectId(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the raw namespace number.
    pub const fn namespace_id(self) -> u32 {
        (self.0 >> NAMESPACE_ID_BIT_SHIFT) & NAMESPACE_ID_MASK
    }

    /// Returns the namespace, or the raw number if it isn't a known namespace.
    pub fn namespace(self) -> Result<ObjectNamespace, u32> {
        ObjectNamespace::try_from(self.namespace_id())
    }

    /// Returns the object id within its namespace.
    pub const fn object_id(self) -> u8 {
        ((self.0 >> OBJECT_ID_BIT_SHIFT) & OBJECT_ID_MASK) as u8
    }
}


/// An opaque token that selects one object list among several of the same id.
///
/// A token that refers to a list in the platform repository is the address
/// of that list, so a token is only meaningful to the repository that issued it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
    Display, LowerHex, UpperHex, AsBytes, FromBytes, FromZeroes,
)]
#[repr(transparent)]
pub struct CmObjectToken(usize);

impl CmObjectToken {
    /// The token that callers pass when they don't select a specific list.
    pub const NULL: CmObjectToken = CmObjectToken(0);

    pub const fn new(value: usize) -> CmObjectToken {
        CmObjectToken(value)
    }

    /// Returns the token that refers to the given object list.
    pub fn of<T>(objects: &[T]) -> CmObjectToken {
        CmObjectToken(objects.as_ptr() as usize)
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub const fn value(self) -> usize {
        self.0
    }
}


/// A record that can be handed out by a Configuration Manager.
///
/// Implementors have a fixed `repr(C)` layout without implicit padding,
/// so a list of them can be viewed as bytes and back.
pub trait CmObject: AsBytes + FromBytes + Sized {
    /// The id under which this record is requested.
    const OBJECT_ID: CmObjectId;
}


/// Describes a list of CM objects that a `GetObject` request resolved to.
///
/// `size` is the size in bytes of the whole list and `count` the number
/// of records in it, so each record is `size / count` bytes.
#[derive(Clone, Copy, Debug)]
pub struct CmObjDescriptor<'a> {
    object_id: CmObjectId,
    size: usize,
    data: &'a [u8],
    count: usize,
}

impl<'a> CmObjDescriptor<'a> {
    /// Describes the given list of records under the requested `object_id`.
    pub fn new<T: CmObject>(object_id: CmObjectId, objects: &'a [T]) -> CmObjDescriptor<'a> {
        let data = objects.as_bytes();
        CmObjDescriptor {
            object_id,
            size: data.len(),
            data,
            count: objects.len(),
        }
    }

    pub fn object_id(&self) -> CmObjectId {
        self.object_id
    }

    /// The size in bytes of all described records.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The size in bytes of a single record.
    pub fn element_size(&self) -> usize {
        if self.count == 0 { 0 } else { self.size / self.count }
    }

    /// Views the described bytes as a list of `T` records.
    ///
    /// Fails with [`CmError::BadBufferSize`] if this descriptor wasn't
    /// produced for `T`'s object id, or if its size doesn't fit `count` records of `T`.
    pub fn objects<T: CmObject>(&self) -> Result<&'a [T], CmError> {
        if self.object_id != T::OBJECT_ID || self.size != self.count * size_of::<T>() {
            return Err(CmError::BadBufferSize);
        }
        T::slice_from(self.data).ok_or(CmError::BadBufferSize)
    }
}

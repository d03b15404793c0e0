//! Records of the [`ObjectNamespace::Standard`](crate::ObjectNamespace::Standard) namespace.

use core::mem::{align_of, size_of};
use zerocopy::{AsBytes, FromBytes, FromZeroes};
use crate::{CmObject, CmObjectId, StdObjectId, TableGeneratorId};


/// Identifies the Configuration Manager that a table generator talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmStdObjConfigurationManagerInfo {
    pub revision: u32,
    /// The OEM id that generators write into every table header.
    pub oem_id: [u8; 6],
    _reserved: [u8; 2],
}
const _: () = assert!(size_of::<CmStdObjConfigurationManagerInfo>() == 12);
const _: () = assert!(align_of::<CmStdObjConfigurationManagerInfo>() == 4);

impl CmStdObjConfigurationManagerInfo {
    pub const fn new(revision: u32, oem_id: [u8; 6]) -> Self {
        Self { revision, oem_id, _reserved: [0; 2] }
    }
}

impl CmObject for CmStdObjConfigurationManagerInfo {
    const OBJECT_ID: CmObjectId = CmObjectId::standard(StdObjectId::CfgMgrInfo);
}


/// One entry of the list of ACPI tables that the platform installs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct CmStdObjAcpiTableInfo {
    /// The table signature, as a little-endian `u32`.
    pub acpi_table_signature: u32,
    pub acpi_table_revision: u8,
    _reserved0: [u8; 3],
    pub table_generator_id: TableGeneratorId,
    _reserved1: u32,
    /// The address of a pre-built table, or zero if the generator builds it.
    pub acpi_table_data: u64,
    /// Overrides the generator's OEM table id if non-zero.
    pub oem_table_id: u64,
    /// Overrides the generator's OEM revision if non-zero.
    pub oem_revision: u32,
    _reserved2: u32,
}
const _: () = assert!(size_of::<CmStdObjAcpiTableInfo>() == 40);
const _: () = assert!(align_of::<CmStdObjAcpiTableInfo>() == 8);

impl CmStdObjAcpiTableInfo {
    pub const fn new(
        acpi_table_signature: u32,
        acpi_table_revision: u8,
        table_generator_id: TableGeneratorId,
        acpi_table_data: u64,
    ) -> Self {
        Self {
            acpi_table_signature,
            acpi_table_revision,
            _reserved0: [0; 3],
            table_generator_id,
            _reserved1: 0,
            acpi_table_data,
            oem_table_id: 0,
            oem_revision: 0,
            _reserved2: 0,
        }
    }
}

impl CmObject for CmStdObjAcpiTableInfo {
    const OBJECT_ID: CmObjectId = CmObjectId::standard(StdObjectId::AcpiTableList);
}

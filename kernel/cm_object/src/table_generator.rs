//! Identifiers of the table generators that an ACPI table list entry names.
//!
//! A generator id is laid out as follows:
//! * bits 0 to 7: the table id within the generator namespace,
//! * bits 28 and 29: the generator type (ACPI, SMBIOS or device tree),
//! * bit 31: the generator namespace, standard (0) or OEM (1).

use derive_more::{Display, LowerHex, UpperHex};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

const TABLE_ID_MASK:          u32 = 0xFF;
const TABLE_TYPE_BIT_SHIFT:   u32 = 28;
const TABLE_TYPE_MASK:        u32 = 0b11 << TABLE_TYPE_BIT_SHIFT;
const TABLE_NAMESPACE_BIT_SHIFT: u32 = 31;
const TABLE_NAMESPACE_MASK:   u32 = 1 << TABLE_NAMESPACE_BIT_SHIFT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TableGeneratorType {
    Acpi   = 0,
    Smbios = 1,
    Dt     = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TableGeneratorNamespace {
    Std = 0,
    Oem = 1,
}

/// The standard ACPI table generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum StdAcpiTableId {
    Reserved = 0,
    /// Installs a pre-built table as-is.
    Raw      = 1,
    Dsdt     = 2,
    Fadt     = 3,
    Gtdt     = 4,
    Madt     = 5,
    Mcfg     = 6,
    Spcr     = 7,
    Dbg2     = 8,
    Spmi     = 9,
    Iort     = 10,
    Pptt     = 11,
    Srat     = 12,
}

/// Identifies the generator that builds one entry of the ACPI table list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash,
    Display, LowerHex, UpperHex, AsBytes, FromBytes, FromZeroes,
)]
#[repr(transparent)]
pub struct TableGeneratorId(u32);

impl TableGeneratorId {
    pub const fn new(
        table_type: TableGeneratorType,
        namespace: TableGeneratorNamespace,
        table_id: u32,
    ) -> TableGeneratorId {
        TableGeneratorId(
            (((table_type as u32) << TABLE_TYPE_BIT_SHIFT) & TABLE_TYPE_MASK)
            | (((namespace as u32) << TABLE_NAMESPACE_BIT_SHIFT) & TABLE_NAMESPACE_MASK)
            | (table_id & TABLE_ID_MASK)
        )
    }

    /// The id of a standard ACPI table generator.
    pub const fn std_acpi(table_id: StdAcpiTableId) -> TableGeneratorId {
        TableGeneratorId::new(TableGeneratorType::Acpi, TableGeneratorNamespace::Std, table_id as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

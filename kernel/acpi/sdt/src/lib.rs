//! ACPI table definitions and basic SDT structures.
#![no_std]

use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// The four-byte signature at the start of every ACPI table.
pub type AcpiSignature = [u8; 4];

/// The size in bytes of the ACPI SDT Header (`Sdt` struct).
pub const SDT_SIZE_IN_BYTES: usize = core::mem::size_of::<Sdt>();

pub const DSDT_SIGNATURE: &AcpiSignature = b"DSDT";
/// Revision 2 of the DSDT header allows 64-bit AML integers.
pub const DSDT_REVISION: u8 = 2;

/// Arm's ACPI creator id, `ARMH`.
pub const ARM_CREATOR_ID: u32 = u32::from_le_bytes(*b"ARMH");
pub const ARM_CREATOR_REVISION: u32 = 0x0000_0099;

/// Converts an ACPI signature into the little-endian `u32` form
/// that table lists and table generators store.
pub const fn signature_to_u32(signature: &AcpiSignature) -> u32 {
    u32::from_le_bytes(*signature)
}

/// An ACPI System Descriptor Table.
/// This is the header (the first part) of every ACPI table.
#[derive(Copy, Clone, Debug, AsBytes, FromBytes, FromZeroes)]
#[repr(C, packed)]
pub struct Sdt {
  pub signature: AcpiSignature,
  pub length: u32,
  pub revision: u8,
  pub checksum: u8,
  pub oem_id: [u8; 6],
  pub oem_table_id: [u8; 8],
  pub oem_revision: u32,
  pub creator_id: u32,
  pub creator_revision: u32
}
const _: () = assert!(core::mem::size_of::<Sdt>() == 36);
const _: () = assert!(core::mem::align_of::<Sdt>() == 1);

impl Sdt {
    /// Creates a header for a table of `length` bytes, with its checksum still zeroed.
    pub const fn new(
        signature: AcpiSignature,
        length: u32,
        revision: u8,
        oem_id: [u8; 6],
        oem_table_id: [u8; 8],
        oem_revision: u32,
    ) -> Sdt {
        Sdt {
            signature,
            length,
            revision,
            checksum: 0,
            oem_id,
            oem_table_id,
            oem_revision,
            creator_id: ARM_CREATOR_ID,
            creator_revision: ARM_CREATOR_REVISION,
        }
    }

    /// Serializes this header into its little-endian in-memory form.
    pub const fn to_bytes(&self) -> [u8; SDT_SIZE_IN_BYTES] {
        let mut bytes = [0u8; SDT_SIZE_IN_BYTES];
        let signature = self.signature;
        let oem_id = self.oem_id;
        let oem_table_id = self.oem_table_id;
        bytes = copy_into(bytes, 0, &signature);
        bytes = copy_into(bytes, 4, &self.length.to_le_bytes());
        bytes[8] = self.revision;
        bytes[9] = self.checksum;
        bytes = copy_into(bytes, 10, &oem_id);
        bytes = copy_into(bytes, 16, &oem_table_id);
        bytes = copy_into(bytes, 24, &self.oem_revision.to_le_bytes());
        bytes = copy_into(bytes, 28, &self.creator_id.to_le_bytes());
        bytes = copy_into(bytes, 32, &self.creator_revision.to_le_bytes());
        bytes
    }
}

const fn copy_into(mut dest: [u8; SDT_SIZE_IN_BYTES], offset: usize, src: &[u8]) -> [u8; SDT_SIZE_IN_BYTES] {
    let mut i = 0;
    while i < src.len() {
        dest[offset + i] = src[i];
        i += 1;
    }
    dest
}

/// Returns the value that makes the byte-wise sum of `bytes` wrap to zero,
/// assuming the checksum byte inside `bytes` is currently zero.
pub const fn checksum(bytes: &[u8]) -> u8 {
    let mut sum: u8 = 0;
    let mut i = 0;
    while i < bytes.len() {
        sum = sum.wrapping_add(bytes[i]);
        i += 1;
    }
    0u8.wrapping_sub(sum)
}

/// Returns `true` if all bytes of the given table sum to zero.
pub fn is_checksum_valid(table: &[u8]) -> bool {
    table.iter().fold(0u8, |sum, b| sum.wrapping_add(*b)) == 0
}

/// Builds an AML definition block with no content: a header-only table
/// whose length and checksum are filled in.
///
/// Platforms without a compiled ASL source use this as their DSDT.
pub const fn empty_definition_block(
    signature: AcpiSignature,
    revision: u8,
    oem_id: [u8; 6],
    oem_table_id: [u8; 8],
    oem_revision: u32,
) -> [u8; SDT_SIZE_IN_BYTES] {
    let header = Sdt::new(signature, SDT_SIZE_IN_BYTES as u32, revision, oem_id, oem_table_id, oem_revision);
    let mut bytes = header.to_bytes();
    bytes[9] = checksum(&bytes);
    bytes
}

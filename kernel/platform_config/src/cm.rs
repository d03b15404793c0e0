//! Identity of this Configuration Manager and of the protocol it implements.

/// Encodes a `major.minor` revision as the firmware expects it,
/// with the major number in the upper 16 bits.
pub const fn create_revision(major: u16, minor: u16) -> u32 {
    ((major as u32) << 16) | (minor as u32)
}

/// Value: 1.0. The revision reported in the standard `CfgMgrInfo` object.
pub const CONFIGURATION_MANAGER_REVISION: u32 = create_revision(1, 0);

/// Value: 1.0. The revision of the Configuration Manager protocol interface.
pub const CONFIGURATION_MANAGER_PROTOCOL_REVISION: u32 = create_revision(1, 0);

/// The OEM id that table generators write into every generated table.
pub const CFG_MGR_OEM_ID: [u8; 6] = *b"ARMLTD";


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_encoding() {
        assert_eq!(create_revision(1, 0), 0x0001_0000);
        assert_eq!(create_revision(2017, 10), 0x07E1_000A);
    }
}

//! The platform's Configuration Manager.
//!
//! The Configuration Manager owns a [`PlatformRepositoryInfo`] that describes
//! this platform's hardware as a set of CM objects, and answers `GetObject`
//! requests from the table generators by handing out read-only descriptors
//! that point into that repository.
//!
//! Requests are dispatched first by the namespace of the requested object id
//! and then by the object id within that namespace.
//! An id in an unknown namespace is an invalid parameter,
//! whereas an unknown or absent id in a known namespace is simply not found.

#![no_std]

extern crate alloc;

mod repository;
#[cfg(test)]
mod test;

pub use repository::PlatformRepositoryInfo;

use core::slice;
use arm_boards::BoardConfig;
use cm_object::{
    ArmObjectId, CmError, CmObjDescriptor, CmObject, CmObjectId, CmObjectToken,
    ObjectNamespace, StdObjectId,
};
use log::{debug, error, info};

/// A handler that resolves a non-null token for the given object id.
type TokenHandler = for<'a> fn(&'a ConfigurationManager, CmObjectId, CmObjectToken) -> Result<CmObjDescriptor<'a>, CmError>;

/// Serves the CM objects of a single platform repository.
#[derive(Debug)]
pub struct ConfigurationManager {
    repository: PlatformRepositoryInfo,
}

impl ConfigurationManager {
    /// Builds the platform repository from the given board's hardware facts.
    pub fn new(board: &BoardConfig) -> Result<ConfigurationManager, &'static str> {
        let repository = PlatformRepositoryInfo::new(board)?;
        info!("Built the platform repository for board {:?} with {} CPUs and {} ACPI tables",
            board.name, repository.gicc_info.len(), repository.acpi_table_list.len(),
        );
        Ok(ConfigurationManager { repository })
    }

    pub fn repository(&self) -> &PlatformRepositoryInfo {
        &self.repository
    }

    /// Returns a descriptor of the list of CM objects with the given id.
    ///
    /// The `token` selects a specific list for object ids that are
    /// referenced by other objects, e.g., the timer frames of a GT block;
    /// pass [`CmObjectToken::NULL`] to get the platform's full list.
    ///
    /// The returned descriptor borrows this Configuration Manager's repository.
    pub fn get_object(
        &self,
        cm_object_id: CmObjectId,
        token: CmObjectToken,
    ) -> Result<CmObjDescriptor<'_>, CmError> {
        match cm_object_id.namespace() {
            Ok(ObjectNamespace::Standard) => self.get_standard_namespace_object(cm_object_id, token),
            Ok(ObjectNamespace::Arm)      => self.get_arm_namespace_object(cm_object_id, token),
            Ok(ObjectNamespace::Oem)      => self.get_oem_namespace_object(cm_object_id, token),
            Err(namespace) => {
                error!("Unknown namespace {:#X} of CM object {:#X}", namespace, cm_object_id);
                Err(CmError::InvalidParameter)
            }
        }
    }

    /// Updating CM objects isn't supported, as the repository is read-only.
    pub fn set_object(
        &self,
        cm_object_id: CmObjectId,
        _token: CmObjectToken,
        _cm_object: &CmObjDescriptor<'_>,
    ) -> Result<(), CmError> {
        debug!("Rejected SetObject of CM object {:#X}", cm_object_id);
        Err(CmError::Unsupported)
    }

    fn get_standard_namespace_object(
        &self,
        cm_object_id: CmObjectId,
        _token: CmObjectToken,
    ) -> Result<CmObjDescriptor<'_>, CmError> {
        let repo = &self.repository;
        let descriptor = match StdObjectId::try_from(cm_object_id.object_id()) {
            Ok(StdObjectId::CfgMgrInfo) => {
                handle_cm_object(cm_object_id, slice::from_ref(&repo.cm_info))
            }
            Ok(StdObjectId::AcpiTableList) => {
                handle_cm_object(cm_object_id, &repo.acpi_table_list)
            }
            _ => {
                error!("CM object {:#X} not found", cm_object_id);
                return Err(CmError::NotFound);
            }
        };
        Ok(descriptor)
    }

    fn get_arm_namespace_object(
        &self,
        cm_object_id: CmObjectId,
        token: CmObjectToken,
    ) -> Result<CmObjDescriptor<'_>, CmError> {
        let repo = &self.repository;
        let descriptor = match ArmObjectId::try_from(cm_object_id.object_id()) {
            Ok(ArmObjectId::BootArchInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.boot_arch_info)))
            }
            Ok(ArmObjectId::FixedFeatureFlags) => {
                handle_optional_cm_object(cm_object_id, repo.fixed_feature_flags.as_ref())
            }
            Ok(ArmObjectId::PowerManagementProfileInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.pm_profile_info)))
            }
            Ok(ArmObjectId::GicCInfo) => {
                Some(handle_cm_object(cm_object_id, &repo.gicc_info))
            }
            Ok(ArmObjectId::GicDInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.gicd_info)))
            }
            Ok(ArmObjectId::GicRedistributorInfo) => {
                handle_optional_cm_object(cm_object_id, repo.gic_redist_info.as_ref())
            }
            Ok(ArmObjectId::GicItsInfo) => {
                handle_optional_cm_object(cm_object_id, repo.gic_its_info.as_ref())
            }
            Ok(ArmObjectId::GenericTimerInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.generic_timer_info)))
            }
            Ok(ArmObjectId::PlatformGtBlockInfo) => {
                Some(handle_cm_object(cm_object_id, &repo.gt_block_info))
            }
            Ok(ArmObjectId::GtBlockTimerFrameInfo) => {
                return self.handle_cm_object_ref_by_token(
                    cm_object_id,
                    &repo.gt_block0_timer_info,
                    token,
                    Self::get_gt_block_timer_frame_info,
                );
            }
            Ok(ArmObjectId::PlatformGenericWatchdogInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.watchdog)))
            }
            Ok(ArmObjectId::SerialConsolePortInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.spcr_serial_port)))
            }
            Ok(ArmObjectId::SerialDebugPortInfo) => {
                Some(handle_cm_object(cm_object_id, slice::from_ref(&repo.dbg_serial_port)))
            }
            _ => None,
        };

        descriptor.ok_or_else(|| {
            info!("CM object {:#X} not found", cm_object_id);
            CmError::NotFound
        })
    }

    /// This platform describes no OEM objects.
    fn get_oem_namespace_object(
        &self,
        cm_object_id: CmObjectId,
        _token: CmObjectToken,
    ) -> Result<CmObjDescriptor<'_>, CmError> {
        error!("CM object {:#X} not found", cm_object_id);
        Err(CmError::NotFound)
    }

    /// Returns the whole `objects` list for a null token,
    /// otherwise lets `handler` resolve the token.
    fn handle_cm_object_ref_by_token<'a, T: CmObject>(
        &'a self,
        cm_object_id: CmObjectId,
        objects: &'a [T],
        token: CmObjectToken,
        handler: TokenHandler,
    ) -> Result<CmObjDescriptor<'a>, CmError> {
        if token.is_null() {
            Ok(handle_cm_object(cm_object_id, objects))
        } else {
            handler(self, cm_object_id, token)
        }
    }

    /// Resolves the token of the GT block to the list of its timer frames.
    fn get_gt_block_timer_frame_info(
        &self,
        cm_object_id: CmObjectId,
        token: CmObjectToken,
    ) -> Result<CmObjDescriptor<'_>, CmError> {
        let frames = &self.repository.gt_block0_timer_info;
        if token != CmObjectToken::of(frames) {
            info!("Token {:#X} doesn't refer to any GT block timer frames", token);
            return Err(CmError::NotFound);
        }
        Ok(handle_cm_object(cm_object_id, frames))
    }
}

fn handle_cm_object<T: CmObject>(cm_object_id: CmObjectId, objects: &[T]) -> CmObjDescriptor<'_> {
    let descriptor = CmObjDescriptor::new(cm_object_id, objects);
    debug!("CM_OBJECT_ID = {:#X}, Ptr = {:p}, Size = {}, Count = {}",
        cm_object_id, objects.as_ptr(), descriptor.size(), descriptor.count(),
    );
    descriptor
}

fn handle_optional_cm_object<T: CmObject>(cm_object_id: CmObjectId, object: Option<&T>) -> Option<CmObjDescriptor<'_>> {
    object.map(|obj| handle_cm_object(cm_object_id, slice::from_ref(obj)))
}

//! The Configuration Manager protocol and the driver entry point that installs it.
//!
//! The protocol is the C ABI through which the ACPI table generator
//! queries this platform's [`ConfigurationManager`]:
//! a revision, a `GetObject` and a `SetObject` function, and a pointer
//! to the Configuration Manager that those functions serve.
//!
//! The firmware image's entry point is expected to set up the `uefi` crate's
//! boot services and then call [`configuration_manager_dxe_initialize()`].

#![no_std]

#[cfg(test)]
mod test;

use core::{ffi::c_void, ptr};
use cm_object::{CmError, CmObjDescriptor, CmObjectId, CmObjectToken};
use configuration_manager::ConfigurationManager;
use log::{debug, error, info, warn};
use platform_config::cm::CONFIGURATION_MANAGER_PROTOCOL_REVISION;
use spin::Once;
use uefi::{guid, Guid, Handle, Status};

/// The GUID under which the Configuration Manager protocol is installed.
pub const CONFIGURATION_MANAGER_PROTOCOL_GUID: Guid = guid!("d85a4835-5a82-4894-ac02-706f43d5978e");

/// The ABI form of a [`CmObjDescriptor`].
#[derive(Debug)]
#[repr(C)]
pub struct CmObjDescriptorRaw {
    pub object_id: u32,
    /// The size in bytes of all records that `data` points to.
    pub size: u32,
    pub data: *mut c_void,
    pub count: u32,
}

impl CmObjDescriptorRaw {
    pub const fn empty() -> CmObjDescriptorRaw {
        CmObjDescriptorRaw {
            object_id: 0,
            size: 0,
            data: ptr::null_mut(),
            count: 0,
        }
    }

    /// Points this raw descriptor at the records that `descriptor` describes.
    fn fill(&mut self, descriptor: &CmObjDescriptor<'_>) -> Result<(), CmError> {
        let size = u32::try_from(descriptor.size()).map_err(|_| CmError::BadBufferSize)?;
        let count = u32::try_from(descriptor.count()).map_err(|_| CmError::BadBufferSize)?;
        *self = CmObjDescriptorRaw {
            object_id: descriptor.object_id().value(),
            size,
            // table generators only read through this pointer
            data: descriptor.data().as_ptr() as *mut c_void,
            count,
        };
        Ok(())
    }
}

/// `GetObject`: fills in `cm_object` with the objects of the given id and token.
pub type GetObjectFn = unsafe extern "efiapi" fn(
    this: *const ConfigurationManagerProtocol,
    cm_object_id: u32,
    token: usize,
    cm_object: *mut CmObjDescriptorRaw,
) -> Status;

/// `SetObject`: updates the objects of the given id and token from `cm_object`.
pub type SetObjectFn = unsafe extern "efiapi" fn(
    this: *const ConfigurationManagerProtocol,
    cm_object_id: u32,
    token: usize,
    cm_object: *mut CmObjDescriptorRaw,
) -> Status;

/// The Configuration Manager protocol interface.
#[repr(C)]
pub struct ConfigurationManagerProtocol {
    pub revision: u32,
    pub get_object: GetObjectFn,
    pub set_object: SetObjectFn,
    /// The Configuration Manager that owns the platform repository.
    pub plat_repo_info: *const ConfigurationManager,
}

// The Configuration Manager behind `plat_repo_info` is never mutated.
unsafe impl Send for ConfigurationManagerProtocol {}
unsafe impl Sync for ConfigurationManagerProtocol {}

impl ConfigurationManagerProtocol {
    /// Creates the protocol interface for the given Configuration Manager,
    /// which must outlive every use of the interface.
    pub fn new(configuration_manager: &ConfigurationManager) -> ConfigurationManagerProtocol {
        ConfigurationManagerProtocol {
            revision: CONFIGURATION_MANAGER_PROTOCOL_REVISION,
            get_object,
            set_object,
            plat_repo_info: configuration_manager,
        }
    }
}

/// Returns the Configuration Manager behind a non-null `this`.
///
/// # Safety
///
/// `this` must point to a valid protocol interface.
unsafe fn configuration_manager<'a>(
    this: *const ConfigurationManagerProtocol,
) -> Result<&'a ConfigurationManager, CmError> {
    (*this).plat_repo_info.as_ref().ok_or(CmError::InvalidParameter)
}

unsafe extern "efiapi" fn get_object(
    this: *const ConfigurationManagerProtocol,
    cm_object_id: u32,
    token: usize,
    cm_object: *mut CmObjDescriptorRaw,
) -> Status {
    if this.is_null() || cm_object.is_null() {
        error!("GetObject: invalid parameter, This = {:p}, CmObject = {:p}", this, cm_object);
        return Status::INVALID_PARAMETER;
    }
    let result = configuration_manager(this).and_then(|cm| {
        let descriptor = cm.get_object(CmObjectId::from_raw(cm_object_id), CmObjectToken::new(token))?;
        (*cm_object).fill(&descriptor)
    });
    match result {
        Ok(()) => Status::SUCCESS,
        Err(e) => e.into(),
    }
}

/// Rejects every request without looking at its arguments.
unsafe extern "efiapi" fn set_object(
    _this: *const ConfigurationManagerProtocol,
    cm_object_id: u32,
    _token: usize,
    _cm_object: *mut CmObjDescriptorRaw,
) -> Status {
    debug!("SetObject: CM object {:#X} can't be updated", cm_object_id);
    Status::UNSUPPORTED
}


// The Configuration Manager and its protocol interface, created once by the driver entry point.
static CONFIGURATION_MANAGER: Once<ConfigurationManager> = Once::new();
static PROTOCOL: Once<ConfigurationManagerProtocol> = Once::new();

/// The driver entry point: sets up logging on the console UART,
/// builds the platform repository of the selected board,
/// and installs the Configuration Manager protocol on `image_handle`.
pub fn configuration_manager_dxe_initialize(image_handle: Handle) -> Status {
    let board = &arm_boards::BOARD_CONFIG;

    // If another logger is already installed, this warning goes to it.
    if let Err(e) = unsafe { logger::init(board.console_uart.base_address as usize) } {
        warn!("Configuration Manager: couldn't log to the console UART: {}", e);
    }

    if CONFIGURATION_MANAGER.is_completed() {
        error!("Configuration Manager: already initialized");
        return Status::ALREADY_STARTED;
    }
    let cm = match ConfigurationManager::new(board) {
        Ok(cm) => CONFIGURATION_MANAGER.call_once(|| cm),
        Err(e) => {
            error!("Configuration Manager: failed to build the platform repository: {}", e);
            return Status::LOAD_ERROR;
        }
    };
    let protocol = PROTOCOL.call_once(|| ConfigurationManagerProtocol::new(cm));

    let installed = unsafe {
        uefi::boot::install_protocol_interface(
            Some(image_handle),
            &CONFIGURATION_MANAGER_PROTOCOL_GUID,
            protocol as *const ConfigurationManagerProtocol as *const c_void,
        )
    };
    match installed {
        Ok(_) => {
            info!("Configuration Manager: installed protocol revision {:#X} for board {:?}",
                protocol.revision, board.name,
            );
            Status::SUCCESS
        }
        Err(e) => {
            error!("Configuration Manager: failed to install the protocol: {:?}", e.status());
            e.status()
        }
    }
}

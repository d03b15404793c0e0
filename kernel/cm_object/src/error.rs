use derive_more::Display;
use uefi::Status;

/// The ways a Configuration Manager request can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CmError {
    /// The request itself was malformed, e.g., a null pointer
    /// or an object id in an unknown namespace.
    #[display(fmt = "invalid parameter")]
    InvalidParameter,
    /// No object matches the requested id, or the token doesn't refer to any list.
    #[display(fmt = "not found")]
    NotFound,
    /// The operation isn't implemented by this Configuration Manager.
    #[display(fmt = "unsupported")]
    Unsupported,
    /// A descriptor's size doesn't match the record type it was read as.
    #[display(fmt = "bad buffer size")]
    BadBufferSize,
}

impl From<CmError> for Status {
    fn from(error: CmError) -> Status {
        match error {
            CmError::InvalidParameter => Status::INVALID_PARAMETER,
            CmError::NotFound         => Status::NOT_FOUND,
            CmError::Unsupported      => Status::UNSUPPORTED,
            CmError::BadBufferSize    => Status::BAD_BUFFER_SIZE,
        }
    }
}

//! Integer status codes for hosts that cannot carry Rust error values.
//!
//! [`Status`] is a `repr(i32)` enum: `Ok` = 0, all errors are negative.
//! Values are stable.

use varargv_core::{ArgvError, Rejected};

/// Status code reported to a host after a buffer call.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Success.
    Ok = 0,
    /// A parameter is missing or not an integer.
    InvalidArgument = -1,
    /// A store could not grow.
    CapacityExceeded = -2,
}

impl Status {
    /// Status for any result carrying an [`ArgvError`].
    pub fn of<T>(result: &Result<T, ArgvError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => Self::from(err),
        }
    }

    /// Returns `true` for [`Status::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<&ArgvError> for Status {
    fn from(err: &ArgvError) -> Self {
        match err {
            ArgvError::InvalidArgument { .. } => Self::InvalidArgument,
            ArgvError::CapacityExceeded { .. } => Self::CapacityExceeded,
        }
    }
}

impl<T> From<&Rejected<T>> for Status {
    fn from(rejected: &Rejected<T>) -> Self {
        Self::from(&rejected.error)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status as i32
    }
}

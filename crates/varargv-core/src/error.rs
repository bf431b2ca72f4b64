//! Error types for argument buffer operations.
//!
//! Exactly two failure kinds exist: a host parameter that cannot be read as
//! an integer, and a store that cannot grow. Out-of-range indices are never
//! errors; they clamp or fall back to head/tail positions.

use std::error::Error;
use std::fmt;

/// Errors that can occur while operating on an argument buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgvError {
    /// A mandatory numeric parameter is missing, or a parameter is not
    /// representable as an integer. Raised before any mutation.
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
    /// A store (or the caller's channel) cannot grow to hold the
    /// additional elements.
    CapacityExceeded {
        /// Number of elements the operation needed to add.
        requested: usize,
        /// Number of elements the store could still accept.
        available: usize,
    },
}

impl ArgvError {
    /// Shorthand for [`ArgvError::InvalidArgument`].
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`ArgvError::CapacityExceeded`].
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

impl fmt::Display for ArgvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { parameter, reason } => {
                write!(f, "bad argument '{parameter}': {reason}")
            }
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, {available} available"
                )
            }
        }
    }
}

impl Error for ArgvError {}

/// A rejected operation: the error plus the values the caller handed in.
///
/// Operations that take ownership of a caller's run give it back untouched
/// when they refuse it, so nothing is lost on failure.
#[derive(Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    /// Why the operation was refused.
    pub error: ArgvError,
    /// The caller's values, in order.
    pub values: Vec<T>,
}

impl<T> Rejected<T> {
    /// Bundle an error with the run it refused.
    pub fn new(error: ArgvError, values: Vec<T>) -> Self {
        Self { error, values }
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .field("returned", &self.values.len())
            .finish()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} values returned)", self.error, self.values.len())
    }
}

impl<T> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Rejected<T>> for ArgvError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}

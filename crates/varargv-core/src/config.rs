//! Buffer configuration parameters.

use crate::error::ArgvError;

/// Configuration for an argument buffer.
///
/// Controls the declared capacity of the primary store and how much room is
/// reserved up front. Plain data; validated by [`BufferConfig::validate`]
/// when a buffer is built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Maximum number of elements the buffer may retain.
    ///
    /// Default: `i32::MAX`, the width of a host argument counter. Any growth
    /// past this limit fails with [`ArgvError::CapacityExceeded`].
    pub max_len: usize,

    /// Number of element slots reserved when the buffer is created.
    ///
    /// Default: 8. Must not exceed `max_len`.
    pub initial_capacity: usize,
}

impl BufferConfig {
    /// Default declared capacity.
    pub const DEFAULT_MAX_LEN: usize = i32::MAX as usize;

    /// Default up-front reservation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Create a config with the given capacity limit.
    ///
    /// The initial reservation is the default, lowered to `max_len` if the
    /// limit is smaller.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY.min(max_len),
        }
    }

    /// Check structural consistency.
    ///
    /// # Errors
    ///
    /// [`ArgvError::InvalidArgument`] if `initial_capacity > max_len`.
    pub fn validate(&self) -> Result<(), ArgvError> {
        if self.initial_capacity > self.max_len {
            return Err(ArgvError::invalid(
                "initial_capacity",
                format!(
                    "initial capacity {} exceeds max_len {}",
                    self.initial_capacity, self.max_len
                ),
            ));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::with_max_len(Self::DEFAULT_MAX_LEN)
    }
}

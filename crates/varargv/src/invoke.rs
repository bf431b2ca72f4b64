//! Host-call dispatch: the method table a scripting host sees.
//!
//! A host binds the buffer as an object whose methods receive loosely typed
//! parameters. [`ArgBuffer::invoke`] reads those parameters, runs the typed
//! operation, and packages the outcome as a [`Reply`]:
//!
//! | Host method | Parameters | Reply |
//! |-------------|------------|-------|
//! | `set`        | `n` (mandatory)       | [`Reply::Values`] |
//! | `select`     | `n` (default: length) | [`Reply::Values`] |
//! | `add`        | `idx` (default: 0)    | [`Reply::Flag`] |
//! | `__len`      | none                  | [`Reply::Len`] |
//! | `__tostring` | none                  | [`Reply::Text`] |

use std::fmt;
use std::str::FromStr;

use varargv_core::{check_integer, opt_integer, ArgvError, Param};

use crate::buffer::ArgBuffer;
use crate::status::Status;

/// A buffer method as named by a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Replace the retained sequence.
    Set,
    /// Detach a prefix or suffix.
    Select,
    /// Splice values in at a position.
    Add,
    /// Query the retained count.
    Len,
    /// Identity-based string form.
    ToString,
}

impl Method {
    /// Every method, in method-table order.
    pub const ALL: [Method; 5] = [
        Method::Set,
        Method::Select,
        Method::Add,
        Method::Len,
        Method::ToString,
    ];

    /// Canonical host-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Select => "select",
            Self::Add => "add",
            Self::Len => "__len",
            Self::ToString => "__tostring",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ArgvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(Self::Set),
            "select" => Ok(Self::Select),
            "add" => Ok(Self::Add),
            "__len" | "len" => Ok(Self::Len),
            "__tostring" | "tostring" => Ok(Self::ToString),
            other => Err(ArgvError::invalid(
                "method",
                format!("unknown method '{other}'"),
            )),
        }
    }
}

/// What a host receives back from [`ArgBuffer::invoke`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    /// Values handed back to the caller, with their count.
    Values {
        /// Number of values returned.
        count: usize,
        /// The values, in order.
        values: Vec<T>,
    },
    /// Success flag of an `add`.
    Flag(bool),
    /// Retained count.
    Len(usize),
    /// String form of the buffer.
    Text(String),
}

impl<T> Reply<T> {
    /// Status code a host should report for this reply.
    pub fn status(&self) -> Status {
        match self {
            Self::Flag(false) => Status::CapacityExceeded,
            _ => Status::Ok,
        }
    }

    fn values(values: Vec<T>) -> Self {
        Self::Values {
            count: values.len(),
            values,
        }
    }
}

impl<T> ArgBuffer<T> {
    /// Run `method` with host `params` and the caller's trailing `values`.
    ///
    /// Parameters are validated before the buffer is touched. Methods that
    /// do not take values drop them.
    ///
    /// # Errors
    ///
    /// - [`ArgvError::InvalidArgument`] if a parameter cannot be read as an
    ///   integer, or `set` is called without `n`.
    /// - [`ArgvError::CapacityExceeded`] if `set` would retain more than the
    ///   declared capacity. A refused `add` is reported as
    ///   [`Reply::Flag`]`(false)` instead.
    pub fn invoke(
        &mut self,
        method: Method,
        params: &[Param],
        values: Vec<T>,
    ) -> Result<Reply<T>, ArgvError> {
        let reply = match method {
            Method::Set => {
                let n = check_integer(params, 0, "n")?;
                let (count, values) = self.set(n, values)?;
                Reply::Values { count, values }
            }
            Method::Select => {
                let default = i64::try_from(self.len()).unwrap_or(i64::MAX);
                let n = opt_integer(params, 0, "n", default)?;
                Reply::values(self.select(Some(n), values))
            }
            Method::Add => {
                let idx = opt_integer(params, 0, "idx", 0)?;
                Reply::Flag(self.add(idx, values).is_ok())
            }
            Method::Len => Reply::Len(self.len()),
            Method::ToString => Reply::Text(self.to_string()),
        };
        tracing::trace!(%method, status = ?reply.status(), "invoke");
        Ok(reply)
    }

    /// Resolve a host method name and [`invoke`](Self::invoke) it.
    ///
    /// # Errors
    ///
    /// [`ArgvError::InvalidArgument`] for an unknown method name, plus
    /// everything [`invoke`](Self::invoke) reports.
    pub fn invoke_named(
        &mut self,
        name: &str,
        params: &[Param],
        values: Vec<T>,
    ) -> Result<Reply<T>, ArgvError> {
        self.invoke(name.parse()?, params, values)
    }
}

//! Core types for the varargv argument buffer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error vocabulary, the loosely-typed host parameters used by the
//! host-call layer, and the buffer configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod param;

pub use config::BufferConfig;
pub use error::{ArgvError, Rejected};
pub use param::{check_integer, opt_integer, Param, Params};

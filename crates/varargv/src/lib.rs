//! varargv: a reusable buffer for forwarding, slicing, and splicing
//! variadic call arguments.
//!
//! An [`ArgBuffer`] retains an ordered run of opaque values. A caller can
//! replace the whole run while handing part of it back ([`ArgBuffer::set`]),
//! detach a prefix or suffix ([`ArgBuffer::select`]), or splice a new run in
//! at a signed position ([`ArgBuffer::add`]).
//!
//! # Quick start
//!
//! ```rust
//! use varargv::prelude::*;
//!
//! let mut argv = ArgBuffer::new();
//!
//! // Retain everything but the trailing value.
//! let (n, tail) = argv.set(-1, vec![1, 2, 3, 4]).unwrap();
//! assert_eq!((n, tail), (1, vec![4]));
//!
//! // Insert one value from the tail: [1, 2, 9, 3].
//! argv.add(-1, vec![9]).unwrap();
//!
//! // Take the first two, then everything else plus an extra.
//! assert_eq!(argv.select(Some(2), vec![]), vec![1, 2]);
//! assert_eq!(argv.select(None, vec![0]), vec![9, 3, 0]);
//! assert!(argv.is_empty());
//! ```
//!
//! # Addressing
//!
//! | Operation | Positive control | Negative control | Covering magnitude |
//! |-----------|------------------|------------------|--------------------|
//! | `set(n)`     | return `n` leading  | return `-n` trailing | return everything, keep nothing |
//! | `select(n)`  | detach `n` leading  | detach `-n` trailing | clamp to the count |
//! | `add(idx)`   | before 1-based `idx`| `-idx` from the tail | append / prepend |
//!
//! # Modules
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`store`] | `varargv-store` | `ValueStore`, `ScratchStore` |
//! | [`types`] | `varargv-core`  | `ArgvError`, `Param`, `BufferConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod invoke;
pub mod position;
pub mod status;

/// Backing stores (`varargv-store`).
pub use varargv_store as store;

/// Errors, host parameters, and configuration (`varargv-core`).
pub use varargv_core as types;

pub use buffer::ArgBuffer;
pub use invoke::{Method, Reply};
pub use position::{Insertion, Selection, Split};
pub use status::Status;
pub use varargv_core::{ArgvError, BufferConfig, Param, Params, Rejected};

/// Common imports for working with argument buffers.
///
/// ```rust
/// use varargv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::ArgBuffer;
    pub use crate::invoke::{Method, Reply};
    pub use crate::status::Status;
    pub use varargv_core::{ArgvError, BufferConfig, Param, Rejected};
}

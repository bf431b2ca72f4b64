//! Backing stores for the varargv argument buffer.
//!
//! Two independently growable regions back every buffer:
//!
//! ```text
//! ArgBuffer
//! ├── ValueStore   (retained sequence, length == count, hard limit)
//! └── ScratchStore (parking region, empty between operations)
//! ```
//!
//! Both are plain `Vec<T>` regions. Growth of the value store is always
//! preceded by [`ValueStore::reserve`], which checks the declared limit and
//! makes a fallible reservation, so a refused growth never leaves a run
//! half moved.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod scratch;
pub mod store;

pub use scratch::{ScratchGuard, ScratchStore};
pub use store::{reserve_run, ValueStore};

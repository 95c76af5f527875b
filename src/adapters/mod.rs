//! External system adapters
//!
//! This module contains adapters for the systems the pipeline touches:
//!
//! - `storage` - Byte-level object stores (filesystem, in-memory)
//! - `queue` - Work queues carrying file references (spool directory, in-memory)
//! - `factory` - Configuration-driven construction of the adapters above

pub mod factory;
pub mod queue;
pub mod storage;

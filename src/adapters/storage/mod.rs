//! Storage adapters
//!
//! Byte-level object storage behind the [`ByteSource`] and [`ByteSink`]
//! traits, with filesystem and in-memory implementations.

pub mod filesystem;
pub mod memory;
pub mod traits;

pub use filesystem::FsObjectStore;
pub use memory::MemoryObjectStore;
pub use traits::{ByteSink, ByteSource};

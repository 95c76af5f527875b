//! Queue adapters
//!
//! Work queues behind the [`WorkQueue`] trait, with a durable
//! spool-directory implementation and an in-memory one.

pub mod memory;
pub mod spool;
pub mod traits;

pub use memory::MemoryQueue;
pub use spool::SpoolQueue;
pub use traits::WorkQueue;

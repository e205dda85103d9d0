//! Session storage adapters
//!
//! - **MemoryStorage**: process-local map, used by tests and when no storage
//!   directory is configured
//! - **FileStorage**: one JSON file per key inside a directory, so a session
//!   survives restarts

pub mod memory;
pub mod file;

pub use memory::MemoryStorage;
pub use file::FileStorage;

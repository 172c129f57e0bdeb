//! Workspace adapters: local filesystem and an in-memory test double.

pub mod local;
pub mod memory;

pub use local::LocalWorkspace;
pub use memory::MemoryWorkspace;

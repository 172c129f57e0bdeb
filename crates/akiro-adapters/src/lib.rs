//! Infrastructure adapters for Akiro.
//!
//! This crate implements the ports defined in `akiro-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod loader;
pub mod runner;
pub mod workspace;

// Re-export commonly used adapters
pub use loader::TeraSpecLoader;
pub use runner::{ConanCli, RecordingRunner};
pub use workspace::{LocalWorkspace, MemoryWorkspace};

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `akiro-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SpecLoader`: template rendering + YAML parsing
//!   - `PackageManager`: Conan invocations
//!   - `Workspace`: scratch-file handling for the built-list pipeline
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{PackageManager, SpecLoader, Workspace};

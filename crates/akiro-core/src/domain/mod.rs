//! Core domain layer for Akiro.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O — template rendering, YAML parsing, process invocation — is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod command;
pub mod error;
pub mod expand;
pub mod requirement;
pub mod scope;
pub mod spec;

// Re-exports for convenience
pub use command::{CommandPlan, DEFAULT_BUILD_TYPE, DEFAULT_PROFILE, InstallCommand};
pub use error::DomainError;
pub use expand::expand_requirements;
pub use requirement::Requirement;
pub use scope::Scope;
pub use spec::{ConfigBlock, PackageSpec, RenderVars, SpecDocument, VersionConfig, VersionSpec};

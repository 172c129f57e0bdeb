//! Akiro Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Akiro
//! batch install tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            akiro-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (SpecService, InstallService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: SpecLoader, PackageManager,    │
//! │          Workspace)                     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    akiro-adapters (Infrastructure)      │
//! │  (TeraSpecLoader, ConanCli, LocalWs)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SpecDocument, Requirement, expand)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use akiro_core::domain::{
//!     CommandPlan, PackageSpec, SpecDocument, VersionSpec, expand_requirements,
//! };
//!
//! let document = SpecDocument::new(vec![PackageSpec::new(
//!     "zlib",
//!     vec![VersionSpec::bare("1.3.1")],
//! )]);
//!
//! let requirements = expand_requirements(&document).unwrap();
//! let commands = CommandPlan::default().commands(requirements);
//! assert_eq!(commands.len(), 1);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InstallService, SpecService,
        ports::{PackageManager, SpecLoader, Workspace},
    };
    pub use crate::domain::{
        CommandPlan, ConfigBlock, InstallCommand, PackageSpec, RenderVars, Requirement, Scope,
        SpecDocument, VersionConfig, VersionSpec, expand_requirements,
    };
    pub use crate::error::{AkiroError, AkiroResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

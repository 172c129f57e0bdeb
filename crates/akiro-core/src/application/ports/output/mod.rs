//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `akiro-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{InstallCommand, RenderVars, SpecDocument};
use crate::error::AkiroResult;

/// Port for loading a specification document.
///
/// Implemented by:
/// - `akiro_adapters::loader::TeraSpecLoader` (production)
///
/// ## Design Notes
///
/// - Rendering happens before parsing; a template error never produces a
///   partially-parsed document.
/// - Parsing uses safe semantics only: scalars, sequences, and mappings.
///   Specification files may come from shared repositories, so loading
///   must never construct arbitrary objects or execute anything.
pub trait SpecLoader: Send + Sync {
    /// Render template text with the given variables and parse the result.
    fn load_str(&self, template: &str, vars: &RenderVars) -> AkiroResult<SpecDocument>;

    /// Read a template file, then render and parse it.
    fn load_path(&self, path: &Path, vars: &RenderVars) -> AkiroResult<SpecDocument>;
}

/// Port for the external package manager.
///
/// Implemented by:
/// - `akiro_adapters::runner::ConanCli` (spawns the real binary)
/// - `akiro_adapters::runner::RecordingRunner` (testing)
///
/// Every method maps to one sequential invocation; the port defines no
/// batching or concurrency.
pub trait PackageManager: Send + Sync {
    /// Run one install command to completion.
    fn install(&self, command: &InstallCommand) -> AkiroResult<()>;

    /// Run one install command, exporting the dependency graph as JSON.
    fn install_with_graph(&self, command: &InstallCommand, graph_out: &Path) -> AkiroResult<()>;

    /// Extract the list of built binaries from an exported graph.
    fn list_built(&self, graph: &Path, out: &Path) -> AkiroResult<()>;

    /// Merge package lists into one manifest.
    fn merge_lists(&self, lists: &[PathBuf], out: &Path) -> AkiroResult<()>;
}

/// Port for the scratch-file operations the built-list pipeline needs.
///
/// Implemented by:
/// - `akiro_adapters::workspace::LocalWorkspace` (production)
/// - `akiro_adapters::workspace::MemoryWorkspace` (testing)
pub trait Workspace: Send + Sync {
    /// Copy a file, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> AkiroResult<()>;

    /// Remove a file; missing files are not an error.
    fn remove_file(&self, path: &Path) -> AkiroResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

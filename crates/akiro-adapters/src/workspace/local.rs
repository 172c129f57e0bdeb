//! Real-filesystem workspace adapter.

use std::path::Path;

use akiro_core::{
    application::{ApplicationError, ports::Workspace},
    error::AkiroResult,
};
use tracing::trace;

/// Scratch-file operations on the local filesystem.
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for LocalWorkspace {
    fn copy_file(&self, from: &Path, to: &Path) -> AkiroResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy");
        std::fs::copy(from, to).map_err(|e| ApplicationError::Io {
            path: to.to_path_buf(),
            reason: format!("copying from {}: {e}", from.display()),
        })?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> AkiroResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

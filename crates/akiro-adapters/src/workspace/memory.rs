//! In-memory workspace adapter for testing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use akiro_core::{
    application::{ApplicationError, ports::Workspace},
    error::AkiroResult,
};

/// A workspace over an in-memory file map. Clones share state.
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkspace {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn put(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Read a file back, if present.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Workspace for MemoryWorkspace {
    fn copy_file(&self, from: &Path, to: &Path) -> AkiroResult<()> {
        let mut files = self.files.lock().unwrap();
        let content = files
            .get(from)
            .cloned()
            .ok_or_else(|| ApplicationError::Io {
                path: from.to_path_buf(),
                reason: "no such file".into(),
            })?;
        files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> AkiroResult<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

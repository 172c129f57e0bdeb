//! Spec Service - loading and planning.
//!
//! Coordinates the spec-loader port with the domain expansion: load a
//! specification file, expand it, and prefix the requirements into full
//! install commands. No policy of its own — all the interesting rules
//! live in `domain::expand`.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::SpecLoader,
    domain::{CommandPlan, InstallCommand, RenderVars, SpecDocument, expand_requirements},
    error::AkiroResult,
};

/// Loads specifications and turns them into command lists.
pub struct SpecService {
    loader: Box<dyn SpecLoader>,
}

impl SpecService {
    pub fn new(loader: Box<dyn SpecLoader>) -> Self {
        Self { loader }
    }

    /// Load and parse a specification file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path, vars: &RenderVars) -> AkiroResult<SpecDocument> {
        let document = self.loader.load_path(path, vars)?;
        debug!(
            packages = document.packages.len(),
            versions = document.version_count(),
            "specification loaded"
        );
        Ok(document)
    }

    /// Load a specification and expand it into full install commands.
    ///
    /// Either every command is produced or the first error aborts the
    /// whole plan — never a partial list.
    pub fn plan(
        &self,
        path: &Path,
        vars: &RenderVars,
        plan: &CommandPlan,
    ) -> AkiroResult<Vec<InstallCommand>> {
        let document = self.load(path, vars)?;
        let requirements = expand_requirements(&document)?;
        Ok(plan.commands(requirements))
    }
}

//! Tera-backed specification loader.

use std::path::Path;

use akiro_core::{
    application::{ApplicationError, ports::SpecLoader},
    domain::{RenderVars, SpecDocument},
    error::AkiroResult,
};
use tera::Tera;
use tracing::{debug, instrument};

use super::yaml::document_from_yaml;

/// Loads a specification by rendering it with Tera and parsing the result
/// as YAML.
///
/// The render context holds exactly the two defined variables (`os`,
/// `build_type`); Tera fails the render on any undefined variable, which
/// is the behavior the loader contract requires. Parsing is plain
/// `serde_yaml` — data only, no object construction.
pub struct TeraSpecLoader;

impl TeraSpecLoader {
    /// Create a new spec loader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecLoader for TeraSpecLoader {
    #[instrument(skip_all)]
    fn load_str(&self, template: &str, vars: &RenderVars) -> AkiroResult<SpecDocument> {
        let context = tera::Context::from_serialize(vars).map_err(|e| {
            ApplicationError::TemplateRender {
                reason: render_reason(&e),
            }
        })?;

        let rendered = Tera::one_off(template, &context, false).map_err(|e| {
            ApplicationError::TemplateRender {
                reason: render_reason(&e),
            }
        })?;
        debug!(bytes = rendered.len(), "template rendered");

        let value: serde_yaml::Value =
            serde_yaml::from_str(&rendered).map_err(|e| ApplicationError::SpecParse {
                reason: e.to_string(),
            })?;

        document_from_yaml(value)
    }

    fn load_path(&self, path: &Path, vars: &RenderVars) -> AkiroResult<SpecDocument> {
        let template =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.load_str(&template, vars)
    }
}

/// Flatten a Tera error chain into one line.
///
/// Tera's top-level message is usually just "Failed to render '...'";
/// the useful part ("Variable `x` not found") sits in the source chain.
fn render_reason(err: &tera::Error) -> String {
    let mut reason = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    reason
}

// ── tests ─────────────────────────────────────────────────────────────────────

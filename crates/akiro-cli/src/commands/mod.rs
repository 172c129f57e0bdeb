//! Command handlers.
//!
//! Each submodule implements one subcommand. Shared argument→value
//! resolution (CLI flag, then config, then built-in default) lives here.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod install;
pub mod plan;

use std::path::PathBuf;

use crate::{
    cli::SpecOpts,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the specification path and verify it exists.
pub(crate) fn resolve_spec_path(opts: &SpecOpts, config: &AppConfig) -> CliResult<PathBuf> {
    let path = opts
        .spec
        .clone()
        .unwrap_or_else(|| config.defaults.spec_file.clone());
    if !path.exists() {
        return Err(CliError::SpecNotFound { path });
    }
    Ok(path)
}

/// Build type: CLI flag wins, then config (which defaults to `Release`).
pub(crate) fn resolve_build_type(opts: &SpecOpts, config: &AppConfig) -> String {
    opts.build_type
        .clone()
        .unwrap_or_else(|| config.defaults.build_type.clone())
}

/// Profile: CLI flag wins, then config (which defaults to `default`).
pub(crate) fn resolve_profile(profile: Option<&String>, config: &AppConfig) -> String {
    profile
        .cloned()
        .unwrap_or_else(|| config.defaults.profile.clone())
}

// ── tests ─────────────────────────────────────────────────────────────────────

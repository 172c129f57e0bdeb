//! Implementation of the `akiro check` command.

use akiro_adapters::TeraSpecLoader;
use akiro_core::{
    application::SpecService,
    domain::{RenderVars, expand_requirements},
    error::AkiroError,
};

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    commands::{resolve_build_type, resolve_spec_path},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let spec_path = resolve_spec_path(&args.spec, &config)?;
    let build_type = resolve_build_type(&args.spec, &config);

    let vars = RenderVars::for_host(&build_type);

    let spec_service = SpecService::new(Box::new(TeraSpecLoader::new()));
    let document = spec_service.load(&spec_path, &vars)?;

    // Expansion validates every scope label, so a clean check means an
    // install of the same spec cannot fail before reaching Conan.
    let requirements =
        expand_requirements(&document).map_err(|e| CliError::Core(AkiroError::from(e)))?;

    output.success(&format!("{} parses cleanly", spec_path.display()))?;
    output.print(&format!("  Packages:     {}", document.packages.len()))?;
    output.print(&format!("  Versions:     {}", document.version_count()))?;
    output.print(&format!("  Requirements: {}", requirements.len()))?;

    Ok(())
}

//! Implementation of the `akiro install` command.

use akiro_adapters::{ConanCli, LocalWorkspace, TeraSpecLoader};
use akiro_core::{
    application::{InstallService, SpecService},
    domain::{CommandPlan, RenderVars},
};

use crate::{
    cli::{InstallArgs, global::GlobalArgs},
    commands::{resolve_build_type, resolve_profile, resolve_spec_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: InstallArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let spec_path = resolve_spec_path(&args.spec, &config)?;
    let build_type = resolve_build_type(&args.spec, &config);
    let profile = resolve_profile(args.profile.as_ref(), &config);

    let vars = RenderVars::for_host(&build_type);
    let plan = CommandPlan::new(&build_type, &profile);

    let spec_service = SpecService::new(Box::new(TeraSpecLoader::new()));
    let commands = spec_service.plan(&spec_path, &vars, &plan)?;

    if commands.is_empty() {
        output.warning(&format!(
            "{} declares no packages, nothing to install",
            spec_path.display()
        ))?;
        return Ok(());
    }

    output.header(&format!(
        "Installing {} requirement(s) from {} ({build_type}, profile {profile})",
        commands.len(),
        spec_path.display()
    ))?;

    let installer = InstallService::new(
        Box::new(ConanCli::with_program(&config.conan.program)),
        Box::new(LocalWorkspace::new()),
    );

    match &args.built_list {
        Some(built_list) => {
            let scratch = tempfile::tempdir()?;
            installer.run_with_built_list(&commands, scratch.path(), built_list)?;
            output.success(&format!(
                "All {} install(s) completed, built-package list written to {}",
                commands.len(),
                built_list.display()
            ))?;
        }
        None => {
            installer.run(&commands)?;
            output.success(&format!("All {} install(s) completed", commands.len()))?;
        }
    }

    Ok(())
}
